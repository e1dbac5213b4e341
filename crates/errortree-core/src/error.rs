//! Error types for matching operations.

use compact_str::CompactString;
use thiserror::Error;

/// Errors raised by a misused matching call.
///
/// Ordinary non-matches are never reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Scan target is a concrete type that is not an error node.
    #[error("errortree: target must be interface or implement error, got `{type_name}`")]
    NotErrorCapable { type_name: CompactString },
}

impl TargetError {
    /// Create a not-error-capable error for a type name.
    pub fn not_error_capable(type_name: impl Into<CompactString>) -> Self {
        Self::NotErrorCapable {
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_error_capable_message() {
        let err = TargetError::not_error_capable("i32");
        assert!(matches!(err, TargetError::NotErrorCapable { .. }));
        assert!(err.to_string().contains("`i32`"));
    }
}
