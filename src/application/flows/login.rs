//! Login form submission.

use thiserror::Error;
use tracing::{info, warn};

use super::{GENERIC_FAILURE_MESSAGE, Navigation};
use crate::domain::entities::Credentials;
use crate::domain::ports::{BackendApi, SessionStore};
use crate::error::{ApiError, SessionError};

/// Shown when the backend rejects the login without a `detail`.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Why a login attempt did not produce a session.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The backend refused the credentials.
    #[error("login rejected: {}", .detail.as_deref().unwrap_or(LOGIN_FAILED_MESSAGE))]
    Rejected { detail: Option<String> },

    /// The token endpoint could not be reached or sent an unusable body.
    #[error("login request failed: {0}")]
    Backend(#[source] ApiError),

    /// The token was issued but could not be stored.
    #[error("failed to store session: {0}")]
    Session(#[from] SessionError),
}

impl LoginError {
    /// Text for the login page's error region.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail } => detail
                .clone()
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            Self::Backend(_) | Self::Session(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<ApiError> for LoginError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Unauthorized { detail } | ApiError::Rejected { detail, .. } => {
                Self::Rejected { detail }
            }
            other => Self::Backend(other),
        }
    }
}

/// Exchanges the submitted credentials for a token and stores it.
///
/// # Flow
///
/// 1. `POST /api/token` with the credentials, unvalidated
/// 2. On success, store `access_token` and navigate to [`Navigation::Home`]
/// 3. On failure, leave the store untouched
///
/// # Errors
///
/// - [`LoginError::Rejected`] if the backend refused the credentials
/// - [`LoginError::Backend`] on transport failure or an undecodable body
/// - [`LoginError::Session`] if the token could not be persisted
pub async fn submit_login(
    backend: &dyn BackendApi,
    session: &dyn SessionStore,
    credentials: &Credentials,
) -> Result<Navigation, LoginError> {
    match backend.request_token(credentials).await {
        Ok(grant) => {
            session.set_token(grant.access_token)?;
            info!(username = %credentials.username, "Login succeeded");
            Ok(Navigation::Home)
        }
        Err(e) => {
            warn!(username = %credentials.username, error = %e, "Login failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccessToken, TokenGrant};
    use crate::domain::ports::MockBackendApi;
    use crate::infrastructure::session::MemorySessionStore;

    fn grant(token: &str) -> TokenGrant {
        TokenGrant {
            access_token: AccessToken::new(token),
            token_type: Some("bearer".to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_success_stores_access_token() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_request_token()
            .withf(|c| c.username == "alice" && c.password == "s3cret")
            .times(1)
            .returning(|_| Ok(grant("tok-123")));

        let session = MemorySessionStore::new();
        let result =
            submit_login(&backend, &session, &Credentials::new("alice", "s3cret")).await;

        assert_eq!(result.unwrap(), Navigation::Home);
        assert_eq!(session.get_token(), Some(AccessToken::new("tok-123")));
    }

    #[tokio::test]
    async fn test_login_success_replaces_previous_token() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_request_token()
            .returning(|_| Ok(grant("fresh")));

        let session = MemorySessionStore::with_token("stale");
        submit_login(&backend, &session, &Credentials::default())
            .await
            .unwrap();

        assert_eq!(session.get_token(), Some(AccessToken::new("fresh")));
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_detail() {
        let mut backend = MockBackendApi::new();
        backend.expect_request_token().returning(|_| {
            Err(ApiError::Rejected {
                status: 400,
                detail: Some("bad credentials".to_string()),
            })
        });

        let session = MemorySessionStore::new();
        let err = submit_login(&backend, &session, &Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "bad credentials");
        assert!(session.get_token().is_none());
    }

    #[tokio::test]
    async fn test_login_unauthorized_without_detail_uses_fallback() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_request_token()
            .returning(|_| Err(ApiError::Unauthorized { detail: None }));

        let session = MemorySessionStore::new();
        let err = submit_login(&backend, &session, &Credentials::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::Rejected { detail: None }));
        assert_eq!(err.user_message(), LOGIN_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_transport_failure_uses_generic_message() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_request_token()
            .returning(|_| Err(ApiError::Transport("connection refused".to_string())));

        let session = MemorySessionStore::with_token("kept");
        let err = submit_login(&backend, &session, &Credentials::default())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(session.get_token(), Some(AccessToken::new("kept")));
    }

    #[tokio::test]
    async fn test_login_store_failure_is_reported() {
        use crate::domain::ports::MockSessionStore;

        let mut backend = MockBackendApi::new();
        backend
            .expect_request_token()
            .returning(|_| Ok(grant("tok")));

        let mut session = MockSessionStore::new();
        session.expect_set_token().times(1).returning(|_| {
            Err(SessionError::Io {
                path: "/read-only/session.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        });

        let err = submit_login(&backend, &session, &Credentials::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::Session(_)));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
