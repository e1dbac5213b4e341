//! Conjunctive matching: every branch of the tree must reach the target.
//!
//! Unlike a plain "is" check, which is satisfied by any node along any
//! branch, `exactly_is` follows each branch until it either matches or runs
//! out, and succeeds only if all branches match. For example, this tree
//! matches `target` because every branch reaches it:
//!
//! ```text
//! err
//! ├── target
//! ├── wrap
//! │   └── multi
//! │       ├── target
//! │       └── target
//! └── multi
//!     ├── wrap
//!     │   └── target
//!     └── target
//! ```

use rayon::prelude::*;

use errortree_core::{ErrorNode, Unwrap};

use crate::ancestry::Ancestry;
use crate::matcher::TreeMatcher;
use crate::predicate::is_match;

impl TreeMatcher {
    /// Report whether every branch of `err`'s tree matches `target`.
    ///
    /// An absent target matches only an absent error. An empty multi-error
    /// does not match anything.
    pub fn exactly_is(
        &self,
        err: Option<&dyn ErrorNode>,
        target: Option<&dyn ErrorNode>,
    ) -> bool {
        let Some(target) = target else {
            return err.is_none();
        };
        let Some(root) = err else {
            return false;
        };

        let mut ancestry = Ancestry::new(&self.config);
        self.exactly_is_node(root, target, &mut ancestry)
    }

    fn exactly_is_node(
        &self,
        mut node: &dyn ErrorNode,
        target: &dyn ErrorNode,
        ancestry: &mut Ancestry<'_>,
    ) -> bool {
        loop {
            if ancestry.enter(node).is_pruned() {
                return false;
            }
            if is_match(node, target) {
                return true;
            }

            match node.unwrap_node() {
                Unwrap::Multi(children) => {
                    return self.all_children_match(&children, target, ancestry);
                }
                Unwrap::Single(Some(child)) => node = child,
                Unwrap::Single(None) | Unwrap::Leaf => return false,
            }
        }
    }

    fn all_children_match(
        &self,
        children: &[Option<&dyn ErrorNode>],
        target: &dyn ErrorNode,
        ancestry: &mut Ancestry<'_>,
    ) -> bool {
        if children.is_empty() {
            return false;
        }

        tracing::trace!(
            children = children.len(),
            depth = ancestry.depth(),
            "exactly_is: descending into multi-error"
        );

        if self.config.should_parallelize(children.len()) {
            let base: &Ancestry<'_> = ancestry;
            return children.par_iter().all(|child| {
                let mut branch = base.clone();
                child.is_some_and(|child| self.exactly_is_node(child, target, &mut branch))
            });
        }

        let mark = ancestry.mark();
        children.iter().all(|child| {
            let matched = child.is_some_and(|child| self.exactly_is_node(child, target, ancestry));
            ancestry.rewind(mark);
            matched
        })
    }
}

/// Report whether every branch of `err`'s tree matches `target`, using the
/// default [`TraversalConfig`](errortree_core::TraversalConfig).
///
/// A node matches when it equals `target` or its
/// [`matches`](ErrorNode::matches) predicate accepts `target`.
pub fn exactly_is(err: Option<&dyn ErrorNode>, target: Option<&dyn ErrorNode>) -> bool {
    TreeMatcher::new().exactly_is(err, target)
}
