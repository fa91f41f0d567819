use thiserror::Error;

use crate::types::BuildError;

/// Unified error type covering rule construction and record loading.
///
/// Returned by convenience entry points such as `RuleSet::from_json`.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[cfg(feature = "serde")]
    #[error("invalid rule records: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_is_transparent() {
        let err: Error = BuildError::MissingField {
            rule: "ssh".into(),
            field: "ports",
        }
        .into();
        assert_eq!(err.to_string(), "rule 'ssh' has no ports");
    }
}
