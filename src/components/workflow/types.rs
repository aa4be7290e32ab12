use std::borrow::Borrow;
use std::fmt;

/// Identifier of a node in the workflow graph. Doubles as the DOM element id
/// of the node's view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for NodeId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for NodeId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

/// Named attachment point on a node's bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorSide {
	#[default]
	Auto,
	Top,
	Bottom,
	Left,
	Right,
}

/// Which arrangement the diagram is currently rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
	#[default]
	Desktop,
	Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteHints {
	pub start: AnchorSide,
	pub end: AnchorSide,
	pub curveness: Option<f64>,
	/// Horizontal shift of the first control point, in pixels.
	pub start_offset: f64,
}

impl RouteHints {
	pub const fn new(start: AnchorSide, end: AnchorSide) -> Self {
		Self {
			start,
			end,
			curveness: None,
			start_offset: 0.0,
		}
	}

	pub const fn curveness(mut self, curveness: f64) -> Self {
		self.curveness = Some(curveness);
		self
	}

	pub const fn start_offset(mut self, offset: f64) -> Self {
		self.start_offset = offset;
		self
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHints {
	pub desktop: RouteHints,
	pub mobile: RouteHints,
}

impl EdgeHints {
	pub fn for_layout(&self, layout: Layout) -> &RouteHints {
		match layout {
			Layout::Desktop => &self.desktop,
			Layout::Mobile => &self.mobile,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowEdge {
	pub source: NodeId,
	pub target: NodeId,
	pub hints: EdgeHints,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeIcon {
	Target,
	FileText,
	Sparkles,
	Code,
	UserCheck,
	MessageCircle,
}

impl NodeIcon {
	/// Glyph used in place of an icon font.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Target => "◎",
			Self::FileText => "▤",
			Self::Sparkles => "✦",
			Self::Code => "</>",
			Self::UserCheck => "✓",
			Self::MessageCircle => "◌",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
	#[default]
	Default,
	Compact,
	/// Title-only card used for feedback loops.
	Feedback,
}

/// Row a top-level node is drawn in. Grouped children ignore this and are
/// drawn inside their container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
	/// Above the main flow on desktop, below it on mobile.
	Above,
	#[default]
	Flow,
	Below,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowNode {
	pub id: NodeId,
	pub title: String,
	pub icon: Option<NodeIcon>,
	pub description: Option<String>,
	pub inputs: Vec<String>,
	pub outputs: Vec<String>,
	pub tip: Option<String>,
	pub variant: CardVariant,
	pub placement: Placement,
	/// Container this node is drawn inside of, if any.
	pub group: Option<NodeId>,
}

impl WorkflowNode {
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: NodeId::new(id),
			title: title.into(),
			icon: None,
			description: None,
			inputs: Vec::new(),
			outputs: Vec::new(),
			tip: None,
			variant: CardVariant::Default,
			placement: Placement::Flow,
			group: None,
		}
	}

	pub fn icon(mut self, icon: NodeIcon) -> Self {
		self.icon = Some(icon);
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn inputs(mut self, inputs: &[&str]) -> Self {
		self.inputs = inputs.iter().map(|s| s.to_string()).collect();
		self
	}

	pub fn outputs(mut self, outputs: &[&str]) -> Self {
		self.outputs = outputs.iter().map(|s| s.to_string()).collect();
		self
	}

	pub fn tip(mut self, tip: impl Into<String>) -> Self {
		self.tip = Some(tip.into());
		self
	}

	pub fn variant(mut self, variant: CardVariant) -> Self {
		self.variant = variant;
		self
	}

	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	pub fn in_group(mut self, parent: impl Into<String>) -> Self {
		self.group = Some(NodeId::new(parent));
		self
	}
}

/// Unvalidated graph definition, see [`super::graph::WorkflowGraph::new`].
#[derive(Clone, Debug, Default)]
pub struct GraphDefinition {
	pub nodes: Vec<WorkflowNode>,
	pub edges: Vec<WorkflowEdge>,
}

impl GraphDefinition {
	pub fn node(mut self, node: WorkflowNode) -> Self {
		self.nodes.push(node);
		self
	}

	pub fn edge(
		mut self,
		source: impl Into<String>,
		target: impl Into<String>,
		hints: EdgeHints,
	) -> Self {
		self.edges.push(WorkflowEdge {
			source: NodeId::new(source),
			target: NodeId::new(target),
			hints,
		});
		self
	}
}
