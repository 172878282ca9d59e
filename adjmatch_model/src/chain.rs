use crate::graph::NodeId;

/// Edge-chaining interaction state: idle, or chaining from an active node.
///
/// Drives the only path through which a drawing surface feeds edges into a
/// [`crate::GraphModel`]: selecting a node while idle starts a chain,
/// selecting a further node continues it and hands back the previous head
/// so the caller can emit the edge, and releasing the chaining modifier
/// (or clicking empty space) resets to idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainBuilder {
    active: Option<NodeId>,
}

impl ChainBuilder {
    /// Creates an idle builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `node` the active chain head and returns the previous head,
    /// if any. A returned head is the caller's cue to emit an edge from it
    /// to `node`; selecting the same node twice returns it, and the
    /// resulting self-edge is rejected downstream by the graph model.
    pub fn start_or_continue(&mut self, node: NodeId) -> Option<NodeId> {
        self.active.replace(node)
    }

    /// Returns to idle. Must also be called by owners after removing the
    /// active node, since the builder holds only a handle.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// The current chain head, if chaining.
    #[must_use]
    pub const fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// True while a chain is in progress.
    #[must_use]
    pub const fn is_chaining(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_selection_starts_a_chain_without_an_edge() {
        let mut chain = ChainBuilder::new();
        assert!(!chain.is_chaining());

        let prev = chain.start_or_continue(NodeId::new(0));
        assert_eq!(prev, None);
        assert_eq!(chain.active(), Some(NodeId::new(0)));
    }

    #[test]
    fn further_selections_hand_back_the_previous_head() {
        let mut chain = ChainBuilder::new();
        chain.start_or_continue(NodeId::new(0));

        let prev = chain.start_or_continue(NodeId::new(1));
        assert_eq!(prev, Some(NodeId::new(0)));
        assert_eq!(chain.active(), Some(NodeId::new(1)));

        let prev = chain.start_or_continue(NodeId::new(2));
        assert_eq!(prev, Some(NodeId::new(1)));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut chain = ChainBuilder::new();
        chain.start_or_continue(NodeId::new(3));
        chain.reset();

        assert!(!chain.is_chaining());
        assert_eq!(chain.start_or_continue(NodeId::new(4)), None);
    }
}
