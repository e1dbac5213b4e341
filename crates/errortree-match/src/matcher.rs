//! Configured entry point for the tree matching algorithms.

use errortree_core::TraversalConfig;

/// Runs [`exactly_is`](TreeMatcher::exactly_is), [`scan`](TreeMatcher::scan)
/// and [`stats`](TreeMatcher::stats) under one [`TraversalConfig`].
///
/// A matcher holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct TreeMatcher {
    pub(crate) config: TraversalConfig,
}

impl TreeMatcher {
    /// Create a new matcher with default config.
    pub fn new() -> Self {
        Self {
            config: TraversalConfig::default(),
        }
    }

    /// Create a new matcher with custom config.
    pub fn with_config(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// Get the traversal config.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }
}
