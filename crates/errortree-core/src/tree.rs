//! Structural statistics for an error tree.

use serde::{Deserialize, Serialize};

use crate::node::Unwrap;

/// Summary statistics for a traversed tree.
///
/// Shared subtrees are counted once per path that reaches them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of visited nodes.
    pub nodes: u64,
    /// Nodes with no children.
    pub leaves: u64,
    /// Nodes wrapping a single child.
    pub single_wrappers: u64,
    /// Multi-error nodes.
    pub multi_wrappers: u64,
    /// Absent children encountered (`None` slots).
    pub absent_children: u64,
    /// Maximum depth reached, in edges from the root.
    pub max_depth: u32,
    /// Branches cut short by the depth limit or cycle detection.
    pub pruned_branches: u64,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited node and its shape.
    pub fn record_node(&mut self, shape: &Unwrap<'_>, depth: u32) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        match shape {
            Unwrap::Leaf => self.leaves += 1,
            Unwrap::Single(child) => {
                self.single_wrappers += 1;
                if child.is_none() {
                    self.absent_children += 1;
                }
            }
            Unwrap::Multi(children) => {
                self.multi_wrappers += 1;
                self.absent_children += children.iter().filter(|c| c.is_none()).count() as u64;
            }
        }
    }

    /// Record a pruned branch.
    pub fn record_pruned(&mut self) {
        self.pruned_branches += 1;
    }

    /// Fold the stats of a separately walked subtree into this one.
    pub fn merge(&mut self, other: &TreeStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.single_wrappers += other.single_wrappers;
        self.multi_wrappers += other.multi_wrappers;
        self.absent_children += other.absent_children;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.pruned_branches += other.pruned_branches;
    }
}
