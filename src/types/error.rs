use thiserror::Error;

use crate::parse::ParseError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("rule '{rule}' has no {field}")]
    MissingField { rule: String, field: &'static str },

    #[error("invalid {field} in rule '{rule}': {source}")]
    InvalidRange {
        rule: String,
        field: &'static str,
        #[source]
        source: ParseError,
    },
}
