//! Error trees built from `thiserror` enums.

use errortree_core::eq_by_value;
use errortree_match::{
    ErrorNode, Target, TraversalConfig, TreeMatcher, Unwrap, exactly_is, scan, target_of,
    tree_stats, try_scan,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum IoFailure {
    #[error("connection refused")]
    Refused,
    #[error("timed out after {0}ms")]
    TimedOut(u64),
}

impl ErrorNode for IoFailure {
    fn eq_node(&self, node: &dyn ErrorNode) -> Option<bool> {
        Some(eq_by_value(self, node))
    }

    fn matches(&self, target: &dyn ErrorNode) -> bool {
        // Any timeout stands in for any other.
        matches!(
            (self, target.downcast_ref::<IoFailure>()),
            (IoFailure::TimedOut(_), Some(IoFailure::TimedOut(_)))
        )
    }
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("fetching {url}")]
    Request { url: String, cause: IoFailure },
    #[error("{} requests failed", .0.len())]
    Batch(Vec<FetchError>),
    #[error("cancelled")]
    Cancelled,
}

impl ErrorNode for FetchError {
    fn unwrap_node(&self) -> Unwrap<'_> {
        match self {
            FetchError::Request { cause, .. } => Unwrap::single(cause),
            FetchError::Batch(errors) => Unwrap::multi(errors.iter().map(|e| e as &dyn ErrorNode)),
            FetchError::Cancelled => Unwrap::Leaf,
        }
    }
}

fn request(url: &str, cause: IoFailure) -> FetchError {
    FetchError::Request {
        url: url.to_string(),
        cause,
    }
}

#[test]
fn test_batch_of_timeouts_is_exactly_timeout() {
    let err = FetchError::Batch(vec![
        request("a", IoFailure::TimedOut(100)),
        FetchError::Batch(vec![request("b", IoFailure::TimedOut(250))]),
    ]);

    assert!(exactly_is(Some(&err), Some(&IoFailure::TimedOut(1))));
    assert!(!exactly_is(Some(&err), Some(&IoFailure::Refused)));
}

#[test]
fn test_mixed_batch_is_not_exactly_anything() {
    let err = FetchError::Batch(vec![
        request("a", IoFailure::TimedOut(100)),
        request("b", IoFailure::Refused),
        FetchError::Cancelled,
    ]);

    assert!(!exactly_is(Some(&err), Some(&IoFailure::TimedOut(100))));
    assert!(!exactly_is(Some(&err), Some(&IoFailure::Refused)));
}

#[test]
fn test_scan_collects_every_failure() {
    let err = FetchError::Batch(vec![
        request("a", IoFailure::TimedOut(100)),
        FetchError::Cancelled,
        FetchError::Batch(vec![request("b", IoFailure::Refused)]),
    ]);

    let failures = scan(Some(&err), &Target::<IoFailure>::concrete());
    assert_eq!(
        failures,
        vec![&IoFailure::TimedOut(100), &IoFailure::Refused]
    );

    let fetches = scan(Some(&err), &Target::<FetchError>::concrete());
    let labels: Vec<String> = fetches.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "3 requests failed",
            "fetching a",
            "cancelled",
            "1 requests failed",
            "fetching b",
        ]
    );
}

#[test]
fn test_stats_match_any_scan() {
    let err = FetchError::Batch(vec![
        request("a", IoFailure::Refused),
        FetchError::Cancelled,
    ]);

    let stats = tree_stats(Some(&err));
    assert_eq!(stats.nodes, 4);
    assert_eq!(stats.leaves, 2);
    assert_eq!(stats.single_wrappers, 1);
    assert_eq!(stats.multi_wrappers, 1);
    assert_eq!(stats.max_depth, 2);
    assert_eq!(scan(Some(&err), &Target::any()).len() as u64, stats.nodes);
}

#[test]
fn test_configured_matcher() {
    let config = TraversalConfig::builder().max_depth(1u32).build().unwrap();
    let matcher = TreeMatcher::with_config(config);

    let err = FetchError::Batch(vec![request("a", IoFailure::Refused)]);
    assert!(
        matcher
            .scan(Some(&err), &Target::<IoFailure>::concrete())
            .is_empty()
    );
    assert_eq!(matcher.stats(Some(&err)).pruned_branches, 1);
}

#[test]
fn test_enum_targets_are_error_capable() {
    let err = FetchError::Batch(vec![request("a", IoFailure::Refused)]);

    assert_eq!(try_scan(Some(&err), &target_of!(IoFailure)).unwrap().len(), 1);
    assert_eq!(try_scan(Some(&err), &target_of!(FetchError)).unwrap().len(), 2);
    assert!(try_scan(Some(&err), &target_of!(u64)).is_err());
}
