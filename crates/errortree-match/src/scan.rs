//! Exhaustive matching: collect every node assignable to a target type.
//!
//! Scanning never stops early. For example, scanning this tree for the
//! type shared by `a`..`e` returns `[a, b, c, d, e]`:
//!
//! ```text
//! err
//! ├── a
//! ├── wrap
//! │   └── multi
//! │       ├── b
//! │       └── c
//! └── multi
//!     ├── wrap
//!     │   └── d
//!     └── e
//! ```
//!
//! Nodes are reported in depth-first pre-order, once per visit. A
//! wrapper or multi-error that is itself assignable is reported before its
//! children.

use rayon::prelude::*;

use errortree_core::{ErrorNode, Target, TargetError, Unwrap};

use crate::ancestry::Ancestry;
use crate::matcher::TreeMatcher;
use crate::predicate::assignable;

impl TreeMatcher {
    /// Find all nodes in `err`'s tree assignable to `target`.
    ///
    /// The target is validated before anything else, so an invalid target
    /// is rejected even when `err` is absent.
    pub fn try_scan<'a, T>(
        &self,
        err: Option<&'a dyn ErrorNode>,
        target: &Target<T>,
    ) -> Result<Vec<&'a T>, TargetError>
    where
        T: ?Sized + Sync + 'static,
    {
        if let Err(err) = target.validate() {
            tracing::debug!(target_type = %target.descriptor().name, "scan: rejecting target");
            return Err(err);
        }

        let mut matched = Vec::new();
        if let Some(root) = err {
            let mut ancestry = Ancestry::new(&self.config);
            self.scan_node(root, target, &mut ancestry, &mut matched);
        }
        Ok(matched)
    }

    /// Find all nodes in `err`'s tree assignable to `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` describes a concrete type that is not an error
    /// node. Such a target can never match and indicates a bug at the call
    /// site; use [`try_scan`](TreeMatcher::try_scan) to get an error instead.
    pub fn scan<'a, T>(&self, err: Option<&'a dyn ErrorNode>, target: &Target<T>) -> Vec<&'a T>
    where
        T: ?Sized + Sync + 'static,
    {
        match self.try_scan(err, target) {
            Ok(matched) => matched,
            Err(err) => panic!("{err}"),
        }
    }

    fn scan_node<'a, T>(
        &self,
        mut node: &'a dyn ErrorNode,
        target: &Target<T>,
        ancestry: &mut Ancestry<'_>,
        matched: &mut Vec<&'a T>,
    ) where
        T: ?Sized + Sync + 'static,
    {
        loop {
            if ancestry.enter(node).is_pruned() {
                return;
            }
            if let Some(found) = assignable(node, target) {
                matched.push(found);
            }

            match node.unwrap_node() {
                Unwrap::Multi(children) => {
                    self.scan_children(&children, target, ancestry, matched);
                    return;
                }
                Unwrap::Single(Some(child)) => node = child,
                Unwrap::Single(None) | Unwrap::Leaf => return,
            }
        }
    }

    fn scan_children<'a, T>(
        &self,
        children: &[Option<&'a dyn ErrorNode>],
        target: &Target<T>,
        ancestry: &mut Ancestry<'_>,
        matched: &mut Vec<&'a T>,
    ) where
        T: ?Sized + Sync + 'static,
    {
        tracing::trace!(
            children = children.len(),
            depth = ancestry.depth(),
            "scan: descending into multi-error"
        );

        if self.config.should_parallelize(children.len()) {
            let base: &Ancestry<'_> = ancestry;
            // Collected per child so results keep the sequential order.
            let per_child: Vec<Vec<&'a T>> = children
                .par_iter()
                .map(|child| {
                    let mut branch = base.clone();
                    let mut found = Vec::new();
                    if let Some(child) = *child {
                        self.scan_node(child, target, &mut branch, &mut found);
                    }
                    found
                })
                .collect();
            matched.extend(per_child.into_iter().flatten());
            return;
        }

        let mark = ancestry.mark();
        for &child in children.iter().flatten() {
            self.scan_node(child, target, ancestry, matched);
            ancestry.rewind(mark);
        }
    }
}

/// Find all nodes in `err`'s tree assignable to `target`, using the default
/// [`TraversalConfig`](errortree_core::TraversalConfig).
///
/// # Panics
///
/// Panics if `target` is neither an interface nor an error type.
pub fn scan<'a, T>(err: Option<&'a dyn ErrorNode>, target: &Target<T>) -> Vec<&'a T>
where
    T: ?Sized + Sync + 'static,
{
    TreeMatcher::new().scan(err, target)
}

/// Like [`scan`], but reports an invalid target as an error.
pub fn try_scan<'a, T>(
    err: Option<&'a dyn ErrorNode>,
    target: &Target<T>,
) -> Result<Vec<&'a T>, TargetError>
where
    T: ?Sized + Sync + 'static,
{
    TreeMatcher::new().try_scan(err, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("leaf")
        }
    }

    impl Error for Leaf {}
    impl ErrorNode for Leaf {}

    #[test]
    fn test_absent_root() {
        assert!(scan(None, &Target::<Leaf>::concrete()).is_empty());
    }

    #[test]
    fn test_invalid_target_with_absent_root() {
        let result = try_scan(None, &errortree_core::target_of!(String));
        assert!(matches!(result, Err(TargetError::NotErrorCapable { .. })));
    }

    #[test]
    fn test_error_type_target_never_violates_contract() {
        let found = try_scan(Some(&Leaf), &errortree_core::target_of!(Leaf));
        assert_eq!(found.map(|nodes| nodes.len()), Ok(1));
    }

    #[test]
    #[should_panic(expected = "target must be interface or implement error")]
    fn test_invalid_target_panics() {
        scan(Some(&Leaf), &errortree_core::target_of!(u8));
    }
}
