use super::anchor::{Connector, Point};
use super::theme::ArrowStyle;

/// Shortest distance a control point is pushed out from its anchor, so that
/// close endpoints still leave and enter through their sides.
const MIN_REACH: f64 = 10.0;

/// SVG geometry for one connector: a cubic curve and its arrow head.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorPath {
	/// Value for the `d` attribute of a `<path>`.
	pub line: String,
	/// Value for the `points` attribute of a `<polygon>`.
	pub head: String,
}

pub fn connector_path(connector: &Connector, style: &ArrowStyle) -> Option<ConnectorPath> {
	let (start, end) = (connector.start, connector.end);
	let dist = start.distance(end);
	if dist < 0.001 {
		return None;
	}

	let head_len = style.head_length();
	let (ox, oy) = connector.start_side.outward();
	let (ex, ey) = connector.end_side.outward();
	// The curve arrives travelling into the end side.
	let (ix, iy) = (-ex, -ey);

	let line_end = Point::new(end.x - ix * head_len, end.y - iy * head_len);
	let reach = (dist * connector.curveness.unwrap_or(style.curveness)).max(MIN_REACH);
	let c1 = Point::new(
		start.x + ox * reach + connector.start_offset,
		start.y + oy * reach,
	);
	let c2 = Point::new(line_end.x + ex * reach, line_end.y + ey * reach);

	let line = format!(
		"M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
		start.x, start.y, c1.x, c1.y, c2.x, c2.y, line_end.x, line_end.y
	);

	let (px, py) = (-iy * head_len * 0.5, ix * head_len * 0.5);
	let head = format!(
		"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
		end.x,
		end.y,
		line_end.x + px,
		line_end.y + py,
		line_end.x - px,
		line_end.y - py
	);

	Some(ConnectorPath { line, head })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::workflow::types::AnchorSide;

	fn horizontal() -> Connector {
		Connector {
			start: Point::new(0.0, 0.0),
			start_side: AnchorSide::Right,
			end: Point::new(200.0, 0.0),
			end_side: AnchorSide::Left,
			curveness: None,
			start_offset: 0.0,
		}
	}

	#[test]
	fn curve_leaves_and_enters_through_sides() {
		let path = connector_path(&horizontal(), &ArrowStyle::default()).unwrap();
		assert_eq!(path.line, "M 0.0 0.0 C 120.0 0.0, 65.0 0.0, 185.0 0.0");
		assert_eq!(path.head, "200.0,0.0 185.0,7.5 185.0,-7.5");
	}

	#[test]
	fn edge_curveness_and_offset_move_control_points() {
		let connector = Connector {
			curveness: Some(0.3),
			start_offset: -200.0,
			..horizontal()
		};
		let path = connector_path(&connector, &ArrowStyle::default()).unwrap();
		assert_eq!(path.line, "M 0.0 0.0 C -140.0 0.0, 125.0 0.0, 185.0 0.0");
	}

	#[test]
	fn vertical_head_points_down_into_top_side() {
		let connector = Connector {
			start: Point::new(50.0, 0.0),
			start_side: AnchorSide::Bottom,
			end: Point::new(50.0, 100.0),
			end_side: AnchorSide::Top,
			curveness: None,
			start_offset: 0.0,
		};
		let path = connector_path(&connector, &ArrowStyle::default()).unwrap();
		assert!(path.line.ends_with("50.0 85.0"));
		assert!(path.head.starts_with("50.0,100.0 "));
	}

	#[test]
	fn zero_length_connector_is_skipped() {
		let connector = Connector {
			end: Point::new(0.0, 0.0),
			..horizontal()
		};
		assert_eq!(connector_path(&connector, &ArrowStyle::default()), None);
	}
}
