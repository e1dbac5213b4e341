//! Scan targets: a runtime type descriptor paired with a cast.
//!
//! A [`Target<T>`] decides, per node, whether that node is assignable to `T`
//! and if so hands it back as `&T`. Prefer the narrowest target that fits:
//! [`Target::concrete`] yields the concrete error type, while
//! [`Target::any`] yields every node as `&dyn ErrorNode`.
//!
//! Whether a concrete type can be an error node is read off the type itself:
//! [`target_of!`](crate::target_of) picks [`Target::concrete`] for error
//! types and an always-invalid descriptor for anything else, so an error
//! type is never described as not error-capable.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::TargetError;
use crate::node::ErrorNode;

/// What kind of type a target describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Interface-like capability, possibly satisfied by many concrete types.
    Interface,
    /// A single concrete type.
    Concrete {
        /// Whether the type is itself an error node.
        error_capable: bool,
    },
}

/// Runtime description of a target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Human-readable type name.
    pub name: CompactString,
    /// Kind of type.
    pub kind: TargetKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<CompactString>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Check if the described type could ever match an error node.
    pub fn is_valid_target(&self) -> bool {
        !matches!(
            self.kind,
            TargetKind::Concrete {
                error_capable: false
            }
        )
    }

    /// Reject types that are neither interfaces nor error nodes.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.is_valid_target() {
            Ok(())
        } else {
            Err(TargetError::not_error_capable(self.name.clone()))
        }
    }
}

/// The type a scan searches for.
pub struct Target<T: ?Sized + 'static> {
    descriptor: TypeDescriptor,
    cast: fn(&dyn ErrorNode) -> Option<&T>,
}

fn downcast_node<T: ErrorNode>(node: &dyn ErrorNode) -> Option<&T> {
    node.downcast_ref::<T>()
}

fn downcast_value<T: Any>(node: &dyn ErrorNode) -> Option<&T> {
    node.as_any().downcast_ref::<T>()
}

fn every_node(node: &dyn ErrorNode) -> Option<&dyn ErrorNode> {
    Some(node)
}

impl<T: ErrorNode> Target<T> {
    /// Target a concrete error type.
    pub fn concrete() -> Self {
        Self {
            descriptor: TypeDescriptor::new(
                type_name::<T>(),
                TargetKind::Concrete {
                    error_capable: true,
                },
            ),
            cast: downcast_node::<T>,
        }
    }
}

impl<T: Any> Target<T> {
    /// Describe a concrete type that is not an error node.
    ///
    /// No node can ever be such a value, so scanning with this target is a
    /// contract violation and is rejected before traversal. Only reachable
    /// through [`target_of!`](crate::target_of) for types that are not
    /// [`ErrorNode`]s.
    fn non_error() -> Self {
        Self {
            descriptor: TypeDescriptor::new(
                type_name::<T>(),
                TargetKind::Concrete {
                    error_capable: false,
                },
            ),
            cast: downcast_value::<T>,
        }
    }
}

impl Target<dyn ErrorNode> {
    /// Target every node in the tree.
    pub fn any() -> Self {
        Self {
            descriptor: TypeDescriptor::new("dyn ErrorNode", TargetKind::Interface),
            cast: every_node,
        }
    }
}

impl<T: ?Sized + 'static> Target<T> {
    /// Target an interface-like capability.
    ///
    /// `view` returns the node viewed as `&T` when the node has the
    /// capability, typically by downcasting to the concrete types known to
    /// provide it.
    ///
    /// `T` must be unsized, normally a trait object such as `dyn Timeout`.
    /// Sized types are concrete and go through [`Target::concrete`] or
    /// [`target_of!`](crate::target_of); naming one here fails to compile.
    pub fn interface(
        name: impl Into<CompactString>,
        view: fn(&dyn ErrorNode) -> Option<&T>,
    ) -> Self {
        const {
            assert!(
                size_of::<&T>() > size_of::<&()>(),
                "interface targets must be unsized, e.g. `dyn Trait`"
            )
        };
        Self {
            descriptor: TypeDescriptor::new(name, TargetKind::Interface),
            cast: view,
        }
    }

    /// Get the runtime descriptor of the target type.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Check the target before any traversal.
    pub fn validate(&self) -> Result<(), TargetError> {
        self.descriptor.validate()
    }

    /// View `node` as the target type if it is assignable.
    pub fn cast<'a>(&self, node: &'a dyn ErrorNode) -> Option<&'a T> {
        (self.cast)(node)
    }
}

impl<T: ?Sized + 'static> Clone for Target<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            cast: self.cast,
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Type-directed target selection behind [`target_of!`](crate::target_of).
///
/// Method lookup on `&&Describe<T>` finds [`DescribeError`] first when
/// `T: ErrorNode` and falls back to [`DescribeValue`] otherwise.
#[doc(hidden)]
pub struct Describe<T>(PhantomData<fn() -> T>);

impl<T> Describe<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Describe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
pub trait DescribeError {
    type Output: ?Sized + 'static;
    fn target(&self) -> Target<Self::Output>;
}

impl<T: ErrorNode> DescribeError for &Describe<T> {
    type Output = T;

    fn target(&self) -> Target<T> {
        Target::concrete()
    }
}

#[doc(hidden)]
pub trait DescribeValue {
    type Output: ?Sized + 'static;
    fn target(&self) -> Target<Self::Output>;
}

impl<T: Any> DescribeValue for Describe<T> {
    type Output = T;

    fn target(&self) -> Target<T> {
        Target::non_error()
    }
}

/// Build the [`Target`] for a sized type, deciding from the type whether it
/// is an error node.
///
/// Error types yield [`Target::concrete`]. Any other type yields a target
/// that fails [`Target::validate`], so scanning for it is reported as
/// [`TargetError::NotErrorCapable`].
///
/// ```
/// use errortree_core::{TargetError, target_of};
///
/// assert_eq!(
///     target_of!(u64).validate(),
///     Err(TargetError::not_error_capable("u64"))
/// );
/// ```
#[macro_export]
macro_rules! target_of {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__private::{DescribeError as _, DescribeValue as _};
        (&&$crate::__private::Describe::<$ty>::new()).target()
    }};
}
