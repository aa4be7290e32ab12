//! Maps node views and anchor sides to the screen points a connector is drawn
//! between.

use std::collections::HashMap;

use log::debug;

use super::graph::WorkflowGraph;
use super::types::{AnchorSide, Layout, WorkflowEdge};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
	}
}

/// Axis-aligned rectangle in the diagram's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Midpoint of the given edge. `Auto` is treated as the centre; use
	/// [`AnchorSide::facing`] to pick a concrete side first.
	pub fn anchor(&self, side: AnchorSide) -> Point {
		let c = self.center();
		match side {
			AnchorSide::Top => Point::new(c.x, self.y),
			AnchorSide::Bottom => Point::new(c.x, self.y + self.height),
			AnchorSide::Left => Point::new(self.x, c.y),
			AnchorSide::Right => Point::new(self.x + self.width, c.y),
			AnchorSide::Auto => c,
		}
	}
}

impl AnchorSide {
	/// Concrete side of `rect` that should face `toward`. Named sides are
	/// returned unchanged.
	pub fn facing(self, rect: &Rect, toward: Point) -> AnchorSide {
		if self != AnchorSide::Auto {
			return self;
		}
		let c = rect.center();
		let (dx, dy) = (toward.x - c.x, toward.y - c.y);
		if dx.abs() >= dy.abs() {
			if dx >= 0.0 {
				AnchorSide::Right
			} else {
				AnchorSide::Left
			}
		} else if dy >= 0.0 {
			AnchorSide::Bottom
		} else {
			AnchorSide::Top
		}
	}

	/// Unit vector pointing away from the rectangle through this side.
	pub fn outward(self) -> (f64, f64) {
		match self {
			AnchorSide::Top => (0.0, -1.0),
			AnchorSide::Bottom => (0.0, 1.0),
			AnchorSide::Left => (-1.0, 0.0),
			AnchorSide::Right => (1.0, 0.0),
			AnchorSide::Auto => (0.0, 0.0),
		}
	}
}

/// Source of rendered element rectangles.
pub trait ElementBounds {
	/// `None` when the element is not currently mounted.
	fn bounds(&self, element_id: &str) -> Option<Rect>;
}

impl ElementBounds for HashMap<String, Rect> {
	fn bounds(&self, element_id: &str) -> Option<Rect> {
		self.get(element_id).copied()
	}
}

/// Two resolved endpoints plus the routing hints needed to draw between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
	pub start: Point,
	pub start_side: AnchorSide,
	pub end: Point,
	pub end_side: AnchorSide,
	pub curveness: Option<f64>,
	pub start_offset: f64,
}

pub struct AnchorResolver<'a, B: ElementBounds + ?Sized> {
	bounds: &'a B,
}

impl<'a, B: ElementBounds + ?Sized> AnchorResolver<'a, B> {
	pub fn new(bounds: &'a B) -> Self {
		Self { bounds }
	}

	pub fn resolve(&self, edge: &WorkflowEdge, layout: Layout) -> Option<Connector> {
		let Some(from) = self.bounds.bounds(edge.source.as_str()) else {
			debug!("no bounds for {}, skipping connector", edge.source);
			return None;
		};
		let Some(to) = self.bounds.bounds(edge.target.as_str()) else {
			debug!("no bounds for {}, skipping connector", edge.target);
			return None;
		};
		let hints = edge.hints.for_layout(layout);
		let start_side = hints.start.facing(&from, to.center());
		let end_side = hints.end.facing(&to, from.center());

		Some(Connector {
			start: from.anchor(start_side),
			start_side,
			end: to.anchor(end_side),
			end_side,
			curveness: hints.curveness,
			start_offset: hints.start_offset,
		})
	}

	/// One entry per graph edge, in declaration order.
	pub fn resolve_all(&self, graph: &WorkflowGraph, layout: Layout) -> Vec<Option<Connector>> {
		graph
			.edges()
			.iter()
			.map(|edge| self.resolve(edge, layout))
			.collect()
	}
}
