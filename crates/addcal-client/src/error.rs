//! Client error types.

use std::fmt;

use addcal_core::LinkError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Event file could not be read or parsed.
    Event(String),
    /// No link could be built for the event.
    Link(LinkError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Event(msg) => write!(f, "event error: {}", msg),
            Self::Link(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Link(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LinkError> for ClientError {
    fn from(err: LinkError) -> Self {
        Self::Link(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn link_errors_display_unchanged() {
        let err = ClientError::from(LinkError::UnknownProvider("aol".into()));
        assert_eq!(err.to_string(), "unknown calendar provider: aol");
        assert!(err.source().is_some());
    }

    #[test]
    fn string_errors_have_no_source() {
        let err = ClientError::Event("failed to read party.toml: not found".into());
        assert_eq!(err.to_string(), "event error: failed to read party.toml: not found");
        assert!(err.source().is_none());
        assert!(ClientError::Config("bad".into()).source().is_none());
    }
}
