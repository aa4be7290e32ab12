use log::debug;

use super::types::NodeId;

/// The single node currently under the pointer, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
	#[default]
	Idle,
	Hovering(NodeId),
}

impl HoverState {
	/// Pointer entered `node`. Always wins over the previous hover.
	pub fn enter(&mut self, node: NodeId) {
		debug!("hover enter {node}");
		*self = Self::Hovering(node);
	}

	/// Pointer left `node`. Returns `false` and keeps the current state when
	/// `node` is not the hovered one, which happens when the leave of the
	/// previous element arrives after the enter of the next.
	pub fn leave(&mut self, node: &NodeId) -> bool {
		if self.hovered() != Some(node) {
			debug!("ignoring stale leave from {node}");
			return false;
		}
		debug!("hover leave {node}");
		*self = Self::Idle;
		true
	}

	pub fn hovered(&self) -> Option<&NodeId> {
		match self {
			Self::Idle => None,
			Self::Hovering(node) => Some(node),
		}
	}

	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn id(s: &str) -> NodeId {
		NodeId::from(s)
	}

	#[test]
	fn starts_idle() {
		let state = HoverState::default();
		assert!(state.is_idle());
		assert_eq!(state.hovered(), None);
	}

	#[test]
	fn enter_then_leave_same_node() {
		let mut state = HoverState::default();
		state.enter(id("a"));
		assert_eq!(state.hovered(), Some(&id("a")));
		assert!(state.leave(&id("a")));
		assert!(state.is_idle());
	}

	#[test]
	fn last_enter_wins() {
		let mut state = HoverState::default();
		state.enter(id("a"));
		state.enter(id("b"));
		assert_eq!(state, HoverState::Hovering(id("b")));
	}

	#[test]
	fn stale_leave_keeps_current_hover() {
		let mut state = HoverState::default();
		state.enter(id("a"));
		assert!(!state.leave(&id("b")));
		assert_eq!(state, HoverState::Hovering(id("a")));
	}

	#[test]
	fn leave_while_idle_is_ignored() {
		let mut state = HoverState::default();
		assert!(!state.leave(&id("a")));
		assert!(state.is_idle());
	}

	#[test]
	fn quick_move_between_neighbours() {
		// enter(b) can arrive before leave(a) when the pointer crosses a shared border.
		let mut state = HoverState::default();
		state.enter(id("a"));
		state.enter(id("b"));
		state.leave(&id("a"));
		assert_eq!(state.hovered(), Some(&id("b")));
	}
}
