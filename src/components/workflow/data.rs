use super::graph::{GraphError, WorkflowGraph};
use super::types::{
	AnchorSide::{Bottom, Left, Right, Top},
	CardVariant, EdgeHints, GraphDefinition, NodeIcon, Placement, RouteHints, WorkflowNode,
};

/// Forward step: left-to-right on desktop, top-to-bottom on mobile.
fn forward() -> EdgeHints {
	EdgeHints {
		desktop: RouteHints::new(Right, Left),
		mobile: RouteHints::new(Bottom, Top),
	}
}

/// The learning-experience design workflow shown on the home page.
pub fn learning_workflow() -> Result<WorkflowGraph, GraphError> {
	let definition = GraphDefinition::default()
		.node(
			WorkflowNode::new("expert-review", "Expert Review")
				.icon(NodeIcon::UserCheck)
				.variant(CardVariant::Feedback)
				.placement(Placement::Above),
		)
		.node(
			WorkflowNode::new("define-goals", "Define Goals & Pedagogies")
				.icon(NodeIcon::Target)
				.description("Set learning objectives and choose pedagogical approaches")
				.tip("New to the topic? AI can help you research content and apply learning design best practices.")
				.outputs(&["learning-goals.md"]),
		)
		.node(WorkflowNode::new(
			"content-experience-container",
			"Content & Experience Creation",
		))
		.node(
			WorkflowNode::new("develop-content", "Develop Core Content")
				.icon(NodeIcon::FileText)
				.description("Create materials and quizzes aligned with learning goals")
				.tip("Give AI credible sources and learner personas to improve content quality.")
				.inputs(&["learning-goals.md"])
				.outputs(&["content.md", "quiz.md"])
				.variant(CardVariant::Compact)
				.in_group("content-experience-container"),
		)
		.node(
			WorkflowNode::new("design-experience", "Design the Experience")
				.icon(NodeIcon::Sparkles)
				.description("Describe vision for the learning experience")
				.tip("Save time by asking AI to draft product requirements. Share examples to help it understand your vision.")
				.inputs(&["content.md", "quiz.md"])
				.outputs(&["requirements.md"])
				.variant(CardVariant::Compact)
				.in_group("content-experience-container"),
		)
		.node(
			WorkflowNode::new("build", "Build")
				.icon(NodeIcon::Code)
				.description("Put everything together to create the final experience")
				.tip("Use AI to audit accessibility and enhance the learning experience.")
				.inputs(&["content.md", "quiz.md", "requirements.md"])
				.outputs(&["Interactive Learning Experience"]),
		)
		.node(
			WorkflowNode::new("learner-feedback", "Learner Feedback")
				.icon(NodeIcon::MessageCircle)
				.variant(CardVariant::Feedback)
				.placement(Placement::Below),
		)
		.edge("define-goals", "content-experience-container", forward())
		.edge("develop-content", "design-experience", forward())
		.edge("content-experience-container", "build", forward())
		.edge(
			"develop-content",
			"expert-review",
			EdgeHints {
				desktop: RouteHints::new(Top, Left).start_offset(-200.0),
				mobile: RouteHints::new(Bottom, Top).start_offset(100.0),
			},
		)
		.edge(
			"expert-review",
			"content-experience-container",
			EdgeHints {
				desktop: RouteHints::new(Bottom, Top).curveness(0.3),
				mobile: RouteHints::new(Top, Bottom).curveness(0.3),
			},
		)
		.edge(
			"build",
			"expert-review",
			EdgeHints {
				desktop: RouteHints::new(Top, Right).curveness(0.8),
				mobile: RouteHints::new(Right, Right)
					.curveness(0.8)
					.start_offset(100.0),
			},
		)
		.edge(
			"build",
			"learner-feedback",
			EdgeHints {
				desktop: RouteHints::new(Bottom, Right).curveness(0.8),
				mobile: RouteHints::new(Right, Right)
					.curveness(0.8)
					.start_offset(100.0),
			},
		)
		.edge(
			"learner-feedback",
			"content-experience-container",
			EdgeHints {
				desktop: RouteHints::new(Top, Bottom).curveness(0.3),
				mobile: RouteHints::new(Top, Bottom).curveness(0.3),
			},
		);

	WorkflowGraph::new(definition)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::workflow::types::NodeId;

	#[test]
	fn bundled_workflow_is_valid() {
		let graph = learning_workflow().unwrap();
		assert_eq!(graph.nodes().len(), 7);
		assert_eq!(graph.edges().len(), 8);
		assert_eq!(
			graph.members("content-experience-container"),
			&[NodeId::from("develop-content"), NodeId::from("design-experience")]
		);
		assert_eq!(
			graph.successors("content-experience-container"),
			&[NodeId::from("build")]
		);
	}

	#[test]
	fn rows_hold_top_level_nodes_only() {
		let graph = learning_workflow().unwrap();
		let flow: Vec<_> = graph
			.top_level(Placement::Flow)
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(flow, ["define-goals", "content-experience-container", "build"]);
		assert_eq!(graph.top_level(Placement::Above).count(), 1);
		assert_eq!(graph.top_level(Placement::Below).count(), 1);
	}
}
