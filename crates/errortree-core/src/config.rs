//! Traversal configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for tree traversals.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct TraversalConfig {
    /// Maximum depth to traverse, in edges from the root (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Prune a branch when it re-enters one of its own ancestors.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub detect_cycles: bool,

    /// Recurse into the children of large multi-errors in parallel.
    #[builder(default = "false")]
    #[serde(default)]
    pub parallel: bool,

    /// Minimum number of children before a multi-error is split across threads.
    #[builder(default = "8")]
    #[serde(default = "default_parallel_min_children")]
    pub parallel_min_children: usize,
}

fn default_true() -> bool {
    true
}

fn default_parallel_min_children() -> usize {
    8
}

impl TraversalConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.parallel_min_children == Some(0) {
            return Err("parallel_min_children must be at least 1".to_string());
        }
        Ok(())
    }
}

impl TraversalConfig {
    /// Create a new traversal config builder.
    pub fn builder() -> TraversalConfigBuilder {
        TraversalConfigBuilder::default()
    }

    /// Create a config that follows the whole tree with no guards at all.
    ///
    /// A cyclic tree never terminates under this config.
    pub fn unguarded() -> Self {
        Self {
            detect_cycles: false,
            ..Self::default()
        }
    }

    /// Check if a node at `depth` lies beyond the depth limit.
    pub fn exceeds_depth(&self, depth: u32) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }

    /// Check if a multi-error with `children` children should fan out.
    pub fn should_parallelize(&self, children: usize) -> bool {
        self.parallel && children >= self.parallel_min_children.max(1)
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            detect_cycles: true,
            parallel: false,
            parallel_min_children: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = TraversalConfig::builder()
            .max_depth(4u32)
            .parallel(true)
            .parallel_min_children(2usize)
            .build()
            .unwrap();

        assert_eq!(config.max_depth, Some(4));
        assert!(config.parallel);
        assert!(config.detect_cycles);
        assert_eq!(config.parallel_min_children, 2);
    }

    #[test]
    fn test_config_builder_rejects_zero_fan_out() {
        let result = TraversalConfig::builder()
            .parallel_min_children(0usize)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_exceeds_depth() {
        let mut config = TraversalConfig::default();
        assert!(!config.exceeds_depth(u32::MAX));

        config.max_depth = Some(2);
        assert!(!config.exceeds_depth(2));
        assert!(config.exceeds_depth(3));
    }

    #[test]
    fn test_should_parallelize() {
        let mut config = TraversalConfig::default();
        assert!(!config.should_parallelize(100));

        config.parallel = true;
        assert!(!config.should_parallelize(7));
        assert!(config.should_parallelize(8));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: TraversalConfig = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(config.max_depth, Some(3));
        assert!(config.detect_cycles);
        assert!(!config.parallel);
        assert_eq!(config.parallel_min_children, 8);
    }
}
