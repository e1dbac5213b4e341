//! Tree matching algorithms for errortree.
//!
//! This crate answers two questions about a tree of wrapped errors:
//!
//! - **[`exactly_is`]** - does *every* branch of the tree match a target
//!   value? Short-circuits on the first branch that does not.
//! - **[`scan`]** - which nodes of the tree are assignable to a target
//!   type? Always walks the whole tree.
//!
//! Both walk the tree depth-first. Multi-errors are visited child by
//! child, left to right.
//!
//! # Exactly-is
//!
//! ```rust,ignore
//! use errortree_match::exactly_is;
//!
//! // multi[ wrap(timeout), timeout ]
//! assert!(exactly_is(Some(&err), Some(&timeout)));
//!
//! // multi[ timeout, refused ]
//! assert!(!exactly_is(Some(&mixed), Some(&timeout)));
//! ```
//!
//! # Scan
//!
//! ```rust,ignore
//! use errortree_match::{scan, Target};
//!
//! for path_err in scan(Some(&err), &Target::<PathError>::concrete()) {
//!     println!("{}", path_err.op);
//! }
//! ```
//!
//! # Configuration
//!
//! [`TreeMatcher`] runs the same algorithms under a [`TraversalConfig`]:
//! a depth limit, cycle detection (on by default), and parallel fan-out for
//! large multi-errors via rayon. Results are identical with or without
//! parallelism.

mod ancestry;
mod exactly_is;
mod matcher;
pub mod predicate;
mod scan;
mod stats;

pub use exactly_is::exactly_is;
pub use matcher::TreeMatcher;
pub use scan::{scan, try_scan};
pub use stats::tree_stats;

// Re-export core types
pub use errortree_core::{
    ErrorNode, Target, TargetError, TargetKind, TraversalConfig, TreeStats, Unwrap, target_of,
};
