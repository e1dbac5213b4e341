//! Error node capabilities and tree shape.
//!
//! An error tree is made of [`ErrorNode`] values. Each node reports its
//! shape through [`ErrorNode::unwrap_node`]: a leaf, a wrapper around one
//! (possibly absent) child, or a multi-error around an ordered list of
//! children. The shape is asked for again at every visit, so a single tree
//! may freely mix concrete node types.

use std::any::{Any, TypeId};
use std::error::Error;

/// Upcast to [`Any`] for runtime type checks on error nodes.
///
/// Implemented for every sized `'static` type, so error types never
/// implement it by hand.
pub trait AsAny: Any {
    /// Borrow this value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A point in an error tree.
///
/// All methods have defaults, so a plain leaf error only needs
/// `impl ErrorNode for MyError {}`.
///
/// Nodes must be `Send + Sync`: large multi-errors may be walked on a rayon
/// pool, and results borrowed from the tree cross threads. Errors that hold
/// shared state should use `Arc` and `Mutex` rather than `Rc` and `RefCell`.
pub trait ErrorNode: Error + AsAny + Send + Sync + 'static {
    /// Report this node's children.
    fn unwrap_node(&self) -> Unwrap<'_> {
        Unwrap::Leaf
    }

    /// Custom match predicate, consulted in place of plain equality.
    ///
    /// Called on the node being visited with the caller's target.
    fn matches(&self, _target: &dyn ErrorNode) -> bool {
        false
    }

    /// Equality offered by this value when it is used as a target.
    ///
    /// Returns `None` when values of this type are not comparable, in which
    /// case only [`ErrorNode::matches`] can accept a node. The default
    /// compares by reference identity; see [`eq_by_identity`].
    fn eq_node(&self, node: &dyn ErrorNode) -> Option<bool> {
        Some(eq_by_identity(self, node))
    }
}

impl dyn ErrorNode {
    /// Check whether the concrete type of this node is `T`.
    pub fn is<T: ErrorNode>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast this node to its concrete type.
    pub fn downcast_ref<T: ErrorNode>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// [`TypeId`] of this node's concrete type.
    pub fn concrete_type_id(&self) -> TypeId {
        Any::type_id(self.as_any())
    }
}

/// Shape of a node: how many children it exposes.
#[derive(Debug, Clone, Default)]
pub enum Unwrap<'a> {
    /// No children.
    #[default]
    Leaf,
    /// Wraps exactly one child; `None` terminates the branch.
    Single(Option<&'a dyn ErrorNode>),
    /// Multi-error: an ordered list of children, any of which may be absent.
    Multi(Vec<Option<&'a dyn ErrorNode>>),
}

impl<'a> Unwrap<'a> {
    /// A wrapper around a present child.
    pub fn single(child: &'a dyn ErrorNode) -> Self {
        Self::Single(Some(child))
    }

    /// A multi-error whose children are all present.
    pub fn multi<I>(children: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn ErrorNode>,
    {
        Self::Multi(children.into_iter().map(Some).collect())
    }

    /// Check if this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Unwrap::Leaf)
    }

    /// Check if this is a single-child wrapper.
    pub fn is_single(&self) -> bool {
        matches!(self, Unwrap::Single(_))
    }

    /// Check if this is a multi-error.
    pub fn is_multi(&self) -> bool {
        matches!(self, Unwrap::Multi(_))
    }

    /// Number of slots this node exposes, absent children included.
    pub fn child_count(&self) -> usize {
        match self {
            Unwrap::Leaf => 0,
            Unwrap::Single(_) => 1,
            Unwrap::Multi(children) => children.len(),
        }
    }
}

/// Identity of a node within a tree: its address and concrete type.
///
/// The type is part of the key because a wrapper holding a child by value
/// may share its address with that child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    addr: usize,
    type_id: TypeId,
}

impl NodeKey {
    /// Key for a node.
    pub fn of(node: &dyn ErrorNode) -> Self {
        Self::of_any(node.as_any())
    }

    /// Key for any value, as seen through `Any`.
    pub fn of_any(value: &dyn Any) -> Self {
        Self {
            addr: value as *const dyn Any as *const () as usize,
            type_id: Any::type_id(value),
        }
    }
}

/// Reference identity: `node` is the very same object as `this`.
///
/// Zero-sized error types have no distinct addresses, so two values of the
/// same zero-sized type may compare equal under this rule.
pub fn eq_by_identity<T: ErrorNode + ?Sized>(this: &T, node: &dyn ErrorNode) -> bool {
    NodeKey::of_any(this.as_any()) == NodeKey::of(node)
}

/// Value equality: `node` has concrete type `T` and equals `this`.
///
/// Intended for [`ErrorNode::eq_node`] on types that implement `PartialEq`.
pub fn eq_by_value<T: ErrorNode + PartialEq>(this: &T, node: &dyn ErrorNode) -> bool {
    node.downcast_ref::<T>().is_some_and(|other| other == this)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    struct Code(u32);

    impl fmt::Display for Code {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "code {}", self.0)
        }
    }

    impl Error for Code {}

    impl ErrorNode for Code {
        fn eq_node(&self, node: &dyn ErrorNode) -> Option<bool> {
            Some(eq_by_value(self, node))
        }
    }

    #[derive(Debug)]
    struct Opaque(&'static str);

    impl fmt::Display for Opaque {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Error for Opaque {}
    impl ErrorNode for Opaque {}

    #[test]
    fn test_unwrap_shapes() {
        let a = Code(1);
        let b = Code(2);

        assert!(Unwrap::Leaf.is_leaf());
        assert!(Unwrap::single(&a).is_single());
        assert_eq!(Unwrap::Single(None).child_count(), 1);

        let multi = Unwrap::multi([&a as &dyn ErrorNode, &b]);
        assert!(multi.is_multi());
        assert_eq!(multi.child_count(), 2);
    }

    #[test]
    fn test_identity_equality() {
        let first = Opaque("boom");
        let second = Opaque("boom");

        assert_eq!(first.eq_node(&first), Some(true));
        assert_eq!(first.eq_node(&second), Some(false));
    }

    #[test]
    fn test_value_equality() {
        let a = Code(7);
        let same = Code(7);
        let other = Code(8);

        assert_eq!(a.eq_node(&same), Some(true));
        assert_eq!(a.eq_node(&other), Some(false));
        assert_eq!(a.eq_node(&Opaque("7")), Some(false));
    }

    #[test]
    fn test_downcast() {
        let node: &dyn ErrorNode = &Code(3);
        assert!(node.is::<Code>());
        assert!(!node.is::<Opaque>());
        assert_eq!(node.downcast_ref::<Code>(), Some(&Code(3)));
        assert_eq!(node.concrete_type_id(), TypeId::of::<Code>());
    }
}
