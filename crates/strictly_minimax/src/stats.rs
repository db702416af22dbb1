//! Node counters for a search.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How much of the game tree a search visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, the root included.
    nodes: u64,
    /// Boards evaluated that were terminal.
    terminals: u64,
}

impl SearchStats {
    pub(crate) fn record_node(&mut self) {
        self.nodes += 1;
    }

    pub(crate) fn record_terminal(&mut self) {
        self.terminals += 1;
    }

    /// Adds another search's counts to this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nodes, {} terminal", self.nodes, self.terminals)
    }
}
