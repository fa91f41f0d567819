use thiserror::Error;
use winnow::error::ContextError;

/// Errors produced when parsing a port or address list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The list does not match the range grammar.
    #[error("parse error: {reason} at offset {offset} in {input:?}")]
    Syntax {
        input: String,
        offset: usize,
        reason: String,
    },

    /// A well-formed range whose start is after its end.
    #[error("parse error: inverted range {start}-{end}")]
    InvertedRange { start: String, end: String },
}

impl ParseError {
    pub(crate) fn inverted(start: impl ToString, end: impl ToString) -> Self {
        Self::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

impl From<winnow::error::ParseError<&str, ContextError>> for ParseError {
    fn from(err: winnow::error::ParseError<&str, ContextError>) -> Self {
        let reason = err.inner().to_string();
        Self::Syntax {
            input: (*err.input()).to_owned(),
            offset: err.offset(),
            reason: if reason.is_empty() {
                "unexpected input".to_owned()
            } else {
                reason
            },
        }
    }
}
