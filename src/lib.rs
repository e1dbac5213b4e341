//! errortree - multiple-error matching that considers the tree structure
//! of wrapped errors.
//!
//! An error may wrap nothing, wrap one child, or wrap many children (a
//! multi-error). Implement [`ErrorNode`] on your error types to describe
//! that shape, then ask:
//!
//! - [`exactly_is`] - does every branch of the tree match a target value?
//! - [`scan`] - which nodes are assignable to a target type?
//!
//! ```rust
//! use std::fmt;
//!
//! use errortree::{ErrorNode, Target, Unwrap, eq_by_value, exactly_is, scan};
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout;
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//! impl ErrorNode for Timeout {
//!     fn eq_node(&self, node: &dyn ErrorNode) -> Option<bool> {
//!         Some(eq_by_value(self, node))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Multi(Vec<Box<dyn ErrorNode>>);
//!
//! impl fmt::Display for Multi {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{} errors", self.0.len())
//!     }
//! }
//!
//! impl std::error::Error for Multi {}
//!
//! impl ErrorNode for Multi {
//!     fn unwrap_node(&self) -> Unwrap<'_> {
//!         Unwrap::multi(self.0.iter().map(|e| &**e))
//!     }
//! }
//!
//! let err = Multi(vec![Box::new(Timeout), Box::new(Timeout)]);
//! assert_eq!(scan(Some(&err), &Target::<Timeout>::concrete()).len(), 2);
//!
//! assert!(exactly_is(Some(&err), Some(&Timeout)));
//! ```

pub use errortree_core::{
    AsAny, ErrorNode, NodeKey, Target, TargetError, TargetKind, TraversalConfig,
    TraversalConfigBuilder, TraversalConfigBuilderError, TreeStats, TypeDescriptor, Unwrap,
    eq_by_identity, eq_by_value, target_of,
};
pub use errortree_match::{TreeMatcher, exactly_is, predicate, scan, tree_stats, try_scan};
