//! Error types shared by the backend client and the session stores.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a call to the backend API.
///
/// Every variant is terminal for the action that triggered it: nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The backend answered `401 Unauthorized`. The session is no longer valid.
    #[error("backend rejected the session token")]
    Unauthorized { detail: Option<String> },

    /// The backend answered with a non-success status and a JSON error body.
    #[error("backend returned HTTP {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The response body could not be decoded.
    #[error("unexpected backend response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns whether the backend invalidated the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The `detail` field of the backend error body, when one was sent.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Failure to persist or remove the session token.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_for_status_errors() {
        let rejected = ApiError::Rejected {
            status: 400,
            detail: Some("bad credentials".to_string()),
        };
        assert_eq!(rejected.detail(), Some("bad credentials"));
        assert!(!rejected.is_unauthorized());

        let unauthorized = ApiError::Unauthorized { detail: None };
        assert_eq!(unauthorized.detail(), None);
        assert!(unauthorized.is_unauthorized());

        assert_eq!(ApiError::Transport("refused".into()).detail(), None);
        assert_eq!(ApiError::Decode("eof".into()).detail(), None);
    }
}
