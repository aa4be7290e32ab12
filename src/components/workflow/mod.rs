mod anchor;
mod component;
mod data;
mod graph;
mod highlight;
mod render;
mod state;
mod theme;
mod types;

pub use component::WorkflowDiagram;
pub use data::learning_workflow;
