use ic_types::ConfigError;
use thiserror::Error;

/// Errors raised while talking to the backend or interpreting its replies.
///
/// Pages never show these to the user (apart from the sign-in form); they
/// are logged and the previous state is kept.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Endpoint could not be built
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// Network or protocol failure before a status was received
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Operation requires a signed-in user
    #[error("not signed in")]
    NotSignedIn,
}

impl PortalError {
    /// Status code for HTTP failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortalError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Whether the failure means the user no longer has a usable session.
    pub fn is_session_lost(&self) -> bool {
        matches!(self, PortalError::NotSignedIn) || self.is_unauthorized()
    }
}

/// Result type alias for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lost_on_rejected_or_missing_session() {
        let http = |status| PortalError::Http {
            status,
            body: String::new(),
        };
        assert!(http(401).is_session_lost());
        assert!(http(403).is_session_lost());
        assert!(PortalError::NotSignedIn.is_session_lost());
        assert!(!http(503).is_session_lost());
        assert_eq!(http(404).status(), Some(404));
    }
}
