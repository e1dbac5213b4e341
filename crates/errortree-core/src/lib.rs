//! Core types and traits for errortree.
//!
//! This crate provides the fundamental pieces shared by the matching
//! algorithms: the error node capability trait, the tree shape, scan
//! targets, and traversal configuration.

mod config;
mod error;
mod node;
mod target;
mod tree;

pub use config::{TraversalConfig, TraversalConfigBuilder, TraversalConfigBuilderError};
pub use error::TargetError;
pub use node::{AsAny, ErrorNode, NodeKey, Unwrap, eq_by_identity, eq_by_value};
pub use target::{Target, TargetKind, TypeDescriptor};
pub use tree::TreeStats;

#[doc(hidden)]
pub mod __private {
    pub use crate::target::{Describe, DescribeError, DescribeValue};
}
