//! Node-level match rules.

use errortree_core::{ErrorNode, Target};

/// Check whether `node` matches `target` on its own, ignoring its children.
///
/// A node matches when the target compares equal to it (skipped for targets
/// whose type is not comparable) or when the node's custom predicate
/// accepts the target.
pub fn is_match(node: &dyn ErrorNode, target: &dyn ErrorNode) -> bool {
    target.eq_node(node) == Some(true) || node.matches(target)
}

/// View `node` as the target type if its concrete type is assignable to it.
pub fn assignable<'a, T: ?Sized + 'static>(
    node: &'a dyn ErrorNode,
    target: &Target<T>,
) -> Option<&'a T> {
    target.cast(node)
}
