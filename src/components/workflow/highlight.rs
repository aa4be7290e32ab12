use std::collections::HashSet;

use super::graph::WorkflowGraph;
use super::types::{CardVariant, NodeId, WorkflowEdge};

impl WorkflowGraph {
	/// Nodes to emphasise while `hovered` is under the pointer.
	///
	/// Hovering a container or one of its grouped children lights the whole
	/// group plus the container's downstream nodes, ignoring the children's
	/// own edges. Any other node lights itself and its direct successors; a
	/// container reached that way also lights its first grouped child, which
	/// is the step that consumes what flows into the container.
	pub fn active_nodes(&self, hovered: Option<&NodeId>) -> HashSet<NodeId> {
		let Some(hovered) = hovered else {
			return HashSet::new();
		};

		if let Some(container) = self.owning_container(hovered.as_str()) {
			return std::iter::once(container)
				.chain(self.members(container.as_str()))
				.chain(self.successors(container.as_str()))
				.cloned()
				.collect();
		}

		let mut active: HashSet<NodeId> = std::iter::once(hovered)
			.chain(self.successors(hovered.as_str()))
			.cloned()
			.collect();
		for next in self.successors(hovered.as_str()) {
			if let Some(first) = self.members(next.as_str()).first() {
				active.insert(first.clone());
			}
		}
		active
	}

	/// Whether `edge` is drawn in the accent colour while `hovered` is under
	/// the pointer. Edges leaving a container stay lit while any part of the
	/// container group is hovered.
	pub fn is_edge_active(&self, edge: &WorkflowEdge, hovered: Option<&NodeId>) -> bool {
		let Some(hovered) = hovered else {
			return false;
		};
		if self
			.owning_container(hovered.as_str())
			.is_some_and(|container| *container == edge.source)
		{
			return true;
		}
		edge.source == *hovered
	}
}

/// How a node view is drawn for the current hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeEmphasis {
	Active,
	Normal,
	Muted,
}

/// Everything the view needs for one hover state, computed in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	pub hovered: Option<NodeId>,
	pub nodes: HashSet<NodeId>,
	/// Parallel to [`WorkflowGraph::edges`].
	pub edges: Vec<bool>,
}

impl Highlight {
	pub fn compute(graph: &WorkflowGraph, hovered: Option<&NodeId>) -> Self {
		Self {
			hovered: hovered.cloned(),
			nodes: graph.active_nodes(hovered),
			edges: graph
				.edges()
				.iter()
				.map(|edge| graph.is_edge_active(edge, hovered))
				.collect(),
		}
	}

	pub fn is_hovering(&self) -> bool {
		self.hovered.is_some()
	}

	pub fn is_node_active(&self, id: &str) -> bool {
		self.nodes.contains(id)
	}

	pub fn is_edge_active(&self, edge_idx: usize) -> bool {
		self.edges.get(edge_idx).copied().unwrap_or(false)
	}

	pub fn emphasis(&self, graph: &WorkflowGraph, id: &str) -> NodeEmphasis {
		if self.is_node_active(id) {
			return NodeEmphasis::Active;
		}
		let Some(hovered) = &self.hovered else {
			return NodeEmphasis::Normal;
		};
		let Some(parent) = graph.parent_of(id) else {
			return NodeEmphasis::Muted;
		};

		// Opacity compounds through nesting: a child inside a muted container
		// must not be muted again.
		if self.emphasis(graph, parent.as_str()) == NodeEmphasis::Muted {
			return NodeEmphasis::Normal;
		}
		// Feedback flows into the whole group, not into one step of it.
		let feedback_hovered = graph
			.node(hovered.as_str())
			.is_some_and(|n| n.variant == CardVariant::Feedback);
		if feedback_hovered {
			NodeEmphasis::Normal
		} else {
			NodeEmphasis::Muted
		}
	}
}
