use super::types::Layout;

/// Viewports narrower than this use the stacked mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

impl Layout {
	pub fn for_viewport_width(width: f64) -> Self {
		if width < MOBILE_BREAKPOINT {
			Layout::Mobile
		} else {
			Layout::Desktop
		}
	}
}

/// What a change of viewport or diagram size requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeAction {
	/// Same layout, element positions may have moved.
	Remeasure,
	/// Rows must be re-rendered first; measuring follows the switch.
	Switch(Layout),
}

impl ResizeAction {
	pub fn for_viewport(current: Layout, width: f64) -> Self {
		match Layout::for_viewport_width(width) {
			next if next == current => ResizeAction::Remeasure,
			next => ResizeAction::Switch(next),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
	pub stroke_width: f64,
	/// Arrow head length as a multiple of `stroke_width`.
	pub head_size: f64,
	/// Used for edges that carry no curveness of their own.
	pub curveness: f64,
}

impl Default for ArrowStyle {
	fn default() -> Self {
		Self {
			stroke_width: 3.0,
			head_size: 5.0,
			curveness: 0.6,
		}
	}
}

impl ArrowStyle {
	pub fn head_length(&self) -> f64 {
		self.stroke_width * self.head_size
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePalette {
	pub active: &'static str,
	pub idle: &'static str,
	/// Idle colour while some other part of the diagram is hovered.
	pub faded: &'static str,
}

impl Default for EdgePalette {
	fn default() -> Self {
		Self {
			active: "#C5a059",
			idle: "#e7e5e4",
			faded: "#e7e5e44A",
		}
	}
}

impl EdgePalette {
	pub fn color(&self, active: bool, hovering: bool) -> &'static str {
		match (active, hovering) {
			(true, _) => self.active,
			(false, true) => self.faded,
			(false, false) => self.idle,
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(320.0, Layout::Mobile)]
	#[case(767.9, Layout::Mobile)]
	#[case(768.0, Layout::Desktop)]
	#[case(1440.0, Layout::Desktop)]
	fn breakpoint(#[case] width: f64, #[case] expected: Layout) {
		assert_eq!(Layout::for_viewport_width(width), expected);
	}

	#[rstest]
	#[case(Layout::Desktop, 1200.0, ResizeAction::Remeasure)]
	#[case(Layout::Desktop, 1185.0, ResizeAction::Remeasure)]
	#[case(Layout::Desktop, 600.0, ResizeAction::Switch(Layout::Mobile))]
	#[case(Layout::Mobile, 600.0, ResizeAction::Remeasure)]
	#[case(Layout::Mobile, 1024.0, ResizeAction::Switch(Layout::Desktop))]
	fn resize_remeasures_unless_layout_switches(
		#[case] current: Layout,
		#[case] width: f64,
		#[case] expected: ResizeAction,
	) {
		assert_eq!(ResizeAction::for_viewport(current, width), expected);
	}

	#[test]
	fn edge_colours() {
		let palette = EdgePalette::default();
		assert_eq!(palette.color(true, true), "#C5a059");
		assert_eq!(palette.color(false, true), "#e7e5e44A");
		assert_eq!(palette.color(false, false), "#e7e5e4");
	}
}
