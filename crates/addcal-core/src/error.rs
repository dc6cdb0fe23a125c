//! Link generation error types.

use thiserror::Error;

/// Result type for link generation.
pub type LinkResult<T> = Result<T, LinkError>;

/// Errors that can occur while building links or buttons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The event record lacks a field needed to build any link.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// The requested provider is not available for this operation.
    #[error("unknown calendar provider: {0}")]
    UnknownProvider(String),

    /// A start or end value could not be parsed as a date-time.
    #[error("invalid date-time: {input:?}")]
    InvalidTimeFormat { input: String },
}

impl LinkError {
    /// Returns true for the recoverable "no link" outcomes.
    ///
    /// Missing fields and unknown providers are expected results callers check
    /// for; an unparseable date-time is a hard input error.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. } | Self::UnknownProvider(_)
        )
    }
}
