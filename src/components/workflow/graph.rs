use std::collections::HashMap;

use super::types::{GraphDefinition, NodeId, Placement, WorkflowEdge, WorkflowNode};

/// Construction-time validation failures. These are programming errors in
/// the static definition, never runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
	#[error("node {0} is defined more than once")]
	DuplicateNode(NodeId),

	#[error("edge {from} -> {to} references unknown node {missing}")]
	UnknownEdgeEndpoint {
		from: NodeId,
		to: NodeId,
		missing: NodeId,
	},

	#[error("node {child} is grouped under unknown node {parent}")]
	UnknownGroupParent { child: NodeId, parent: NodeId },

	#[error("node {0} is grouped under itself")]
	SelfGroup(NodeId),

	#[error("node {child} is grouped under {parent}, which is itself grouped")]
	NestedGroup { child: NodeId, parent: NodeId },
}

/// Validated, immutable workflow graph.
#[derive(Clone, Debug)]
pub struct WorkflowGraph {
	nodes: Vec<WorkflowNode>,
	edges: Vec<WorkflowEdge>,
	index: HashMap<NodeId, usize>,
	successors: HashMap<NodeId, Vec<NodeId>>,
	members: HashMap<NodeId, Vec<NodeId>>,
}

impl WorkflowGraph {
	pub fn new(definition: GraphDefinition) -> Result<Self, GraphError> {
		let GraphDefinition { nodes, edges } = definition;

		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(GraphError::DuplicateNode(node.id.clone()));
			}
		}

		let mut members: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
		for node in &nodes {
			let Some(parent) = &node.group else {
				continue;
			};
			if *parent == node.id {
				return Err(GraphError::SelfGroup(node.id.clone()));
			}
			let Some(&parent_idx) = index.get(parent) else {
				return Err(GraphError::UnknownGroupParent {
					child: node.id.clone(),
					parent: parent.clone(),
				});
			};
			if nodes[parent_idx].group.is_some() {
				return Err(GraphError::NestedGroup {
					child: node.id.clone(),
					parent: parent.clone(),
				});
			}
			members
				.entry(parent.clone())
				.or_default()
				.push(node.id.clone());
		}

		let mut successors: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
		for edge in &edges {
			for endpoint in [&edge.source, &edge.target] {
				if !index.contains_key(endpoint) {
					return Err(GraphError::UnknownEdgeEndpoint {
						from: edge.source.clone(),
						to: edge.target.clone(),
						missing: endpoint.clone(),
					});
				}
			}
			let targets = successors.entry(edge.source.clone()).or_default();
			if !targets.contains(&edge.target) {
				targets.push(edge.target.clone());
			}
		}

		Ok(Self {
			nodes,
			edges,
			index,
			successors,
			members,
		})
	}

	#[cfg(test)]
	pub fn nodes(&self) -> &[WorkflowNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[WorkflowEdge] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// Targets of the node's outgoing edges, in edge declaration order.
	pub fn successors(&self, id: &str) -> &[NodeId] {
		self.successors.get(id).map(Vec::as_slice).unwrap_or_default()
	}

	/// Grouped children of a container, in node declaration order. Empty for
	/// nodes that are not containers.
	pub fn members(&self, id: &str) -> &[NodeId] {
		self.members.get(id).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn is_container(&self, id: &str) -> bool {
		self.members.contains_key(id)
	}

	/// The container a node is drawn inside of.
	pub fn parent_of(&self, id: &str) -> Option<&NodeId> {
		self.node(id).and_then(|n| n.group.as_ref())
	}

	/// The container that owns `id` for highlighting purposes: the node
	/// itself when it is a container, or its parent when it is grouped.
	pub fn owning_container(&self, id: &str) -> Option<&NodeId> {
		if let Some(&i) = self.index.get(id) {
			if self.is_container(id) {
				return Some(&self.nodes[i].id);
			}
		}
		self.parent_of(id)
	}

	/// Top-level nodes in the given placement row, in declaration order.
	pub fn top_level<'a>(
		&'a self,
		placement: Placement,
	) -> impl Iterator<Item = &'a WorkflowNode> + 'a {
		self.nodes
			.iter()
			.filter(move |n| n.group.is_none() && n.placement == placement)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::workflow::types::{AnchorSide, EdgeHints, RouteHints};

	fn hints() -> EdgeHints {
		let route = RouteHints::new(AnchorSide::Right, AnchorSide::Left);
		EdgeHints {
			desktop: route,
			mobile: route,
		}
	}

	fn sample() -> GraphDefinition {
		GraphDefinition::default()
			.node(WorkflowNode::new("a", "A"))
			.node(WorkflowNode::new("box", "Box"))
			.node(WorkflowNode::new("c1", "C1").in_group("box"))
			.node(WorkflowNode::new("c2", "C2").in_group("box"))
			.node(WorkflowNode::new("b", "B"))
			.edge("a", "box", hints())
			.edge("box", "b", hints())
			.edge("c1", "c2", hints())
	}

	#[test]
	fn builds_adjacency_and_groups() {
		let graph = WorkflowGraph::new(sample()).unwrap();

		assert_eq!(graph.successors("a"), &[NodeId::from("box")]);
		assert_eq!(graph.members("box"), &[NodeId::from("c1"), NodeId::from("c2")]);
		assert!(graph.is_container("box"));
		assert!(!graph.is_container("c1"));
		assert_eq!(graph.parent_of("c2"), Some(&NodeId::from("box")));
		assert_eq!(graph.owning_container("box"), Some(&NodeId::from("box")));
		assert_eq!(graph.owning_container("c1"), Some(&NodeId::from("box")));
		assert_eq!(graph.owning_container("a"), None);
		assert!(graph.successors("b").is_empty());
		assert!(graph.successors("missing").is_empty());
	}

	#[test]
	fn repeated_edges_list_successor_once() {
		let graph = WorkflowGraph::new(sample().edge("a", "box", hints())).unwrap();
		assert_eq!(graph.successors("a").len(), 1);
		assert_eq!(graph.edges().len(), 4);
	}

	#[test]
	fn rejects_duplicate_node() {
		let err = WorkflowGraph::new(sample().node(WorkflowNode::new("a", "again"))).unwrap_err();
		assert_eq!(err, GraphError::DuplicateNode(NodeId::from("a")));
	}

	#[test]
	fn rejects_unknown_edge_endpoint() {
		let err = WorkflowGraph::new(sample().edge("b", "nowhere", hints())).unwrap_err();
		assert_eq!(
			err,
			GraphError::UnknownEdgeEndpoint {
				from: NodeId::from("b"),
				to: NodeId::from("nowhere"),
				missing: NodeId::from("nowhere"),
			}
		);
	}

	#[test]
	fn rejects_bad_groups() {
		let err =
			WorkflowGraph::new(sample().node(WorkflowNode::new("x", "X").in_group("ghost"))).unwrap_err();
		assert!(matches!(err, GraphError::UnknownGroupParent { .. }));

		let err = WorkflowGraph::new(sample().node(WorkflowNode::new("x", "X").in_group("x"))).unwrap_err();
		assert_eq!(err, GraphError::SelfGroup(NodeId::from("x")));

		let err = WorkflowGraph::new(sample().node(WorkflowNode::new("x", "X").in_group("c1"))).unwrap_err();
		assert_eq!(
			err,
			GraphError::NestedGroup {
				child: NodeId::from("x"),
				parent: NodeId::from("c1"),
			}
		);
	}

	#[test]
	fn error_messages_name_the_nodes() {
		let err = GraphError::UnknownEdgeEndpoint {
			from: NodeId::from("a"),
			to: NodeId::from("z"),
			missing: NodeId::from("z"),
		};
		assert_eq!(err.to_string(), "edge a -> z references unknown node z");
	}
}
