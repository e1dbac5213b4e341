//! Structural statistics walk.

use rayon::prelude::*;

use errortree_core::{ErrorNode, TreeStats, Unwrap};

use crate::ancestry::Ancestry;
use crate::matcher::TreeMatcher;

impl TreeMatcher {
    /// Walk `err`'s tree and count its nodes by shape.
    ///
    /// Uses the same depth limit, cycle guard and fan-out as the matching
    /// algorithms, so `stats(err).nodes` equals the number of nodes
    /// `scan(err, &Target::any())` returns.
    pub fn stats(&self, err: Option<&dyn ErrorNode>) -> TreeStats {
        let mut stats = TreeStats::new();
        if let Some(root) = err {
            let mut ancestry = Ancestry::new(&self.config);
            self.stats_node(root, &mut ancestry, &mut stats);
        }
        stats
    }

    fn stats_node(
        &self,
        mut node: &dyn ErrorNode,
        ancestry: &mut Ancestry<'_>,
        stats: &mut TreeStats,
    ) {
        loop {
            let depth = ancestry.depth();
            if ancestry.enter(node).is_pruned() {
                stats.record_pruned();
                return;
            }

            let shape = node.unwrap_node();
            stats.record_node(&shape, depth);

            match shape {
                Unwrap::Multi(children) => {
                    self.stats_children(&children, ancestry, stats);
                    return;
                }
                Unwrap::Single(Some(child)) => node = child,
                Unwrap::Single(None) | Unwrap::Leaf => return,
            }
        }
    }

    fn stats_children(
        &self,
        children: &[Option<&dyn ErrorNode>],
        ancestry: &mut Ancestry<'_>,
        stats: &mut TreeStats,
    ) {
        if self.config.should_parallelize(children.len()) {
            let base: &Ancestry<'_> = ancestry;
            let subtrees = children
                .par_iter()
                .map(|child| {
                    let mut branch = base.clone();
                    let mut subtree = TreeStats::new();
                    if let Some(child) = *child {
                        self.stats_node(child, &mut branch, &mut subtree);
                    }
                    subtree
                })
                .reduce(TreeStats::new, |mut acc, subtree| {
                    acc.merge(&subtree);
                    acc
                });
            stats.merge(&subtrees);
            return;
        }

        let mark = ancestry.mark();
        for &child in children.iter().flatten() {
            self.stats_node(child, ancestry, stats);
            ancestry.rewind(mark);
        }
    }
}

/// Count the nodes of `err`'s tree using the default
/// [`TraversalConfig`](errortree_core::TraversalConfig).
pub fn tree_stats(err: Option<&dyn ErrorNode>) -> TreeStats {
    TreeMatcher::new().stats(err)
}
