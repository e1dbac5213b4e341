//! Per-branch traversal guard: depth limit and cycle detection.

use errortree_core::{ErrorNode, NodeKey, TraversalConfig};
use indexmap::IndexSet;

/// Result of stepping onto a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    /// The node may be visited.
    Visit,
    /// The node lies beyond the depth limit.
    TooDeep,
    /// The node is one of its own ancestors.
    Cycle,
}

impl Entry {
    pub(crate) fn is_pruned(self) -> bool {
        self != Entry::Visit
    }
}

/// Saved position in an [`Ancestry`], restored after each sibling branch.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    depth: u32,
    len: usize,
}

/// The chain of nodes from the root down to the node being visited.
///
/// The path is an insertion-ordered set: membership checks stay O(1) on long
/// chains, and rewinding truncates back to a saved length.
#[derive(Debug, Clone)]
pub(crate) struct Ancestry<'c> {
    config: &'c TraversalConfig,
    depth: u32,
    path: IndexSet<NodeKey>,
}

impl<'c> Ancestry<'c> {
    pub(crate) fn new(config: &'c TraversalConfig) -> Self {
        Self {
            config,
            depth: 0,
            path: IndexSet::new(),
        }
    }

    /// Depth of the next node to be entered.
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    /// Step onto `node`, making it an ancestor of whatever is entered next.
    pub(crate) fn enter(&mut self, node: &dyn ErrorNode) -> Entry {
        if self.config.exceeds_depth(self.depth) {
            tracing::debug!(depth = self.depth, "depth limit reached, pruning branch");
            return Entry::TooDeep;
        }

        if self.config.detect_cycles {
            let key = NodeKey::of(node);
            if !self.path.insert(key) {
                tracing::debug!(depth = self.depth, node = %node, "cycle detected, pruning branch");
                return Entry::Cycle;
            }
        }

        self.depth += 1;
        Entry::Visit
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            depth: self.depth,
            len: self.path.len(),
        }
    }

    pub(crate) fn rewind(&mut self, mark: Mark) {
        self.depth = mark.depth;
        self.path.truncate(mark.len);
    }
}
