//! Contract of the REST backend consumed by the portal.

use async_trait::async_trait;

use crate::domain::entities::{AccessToken, Credentials, QueryAnswer, TokenGrant, UserProfile};
use crate::error::ApiError;

/// Client for the backend REST API.
///
/// The backend is an external collaborator; this crate only consumes it.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpBackend`] - `reqwest` client against a base URL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Exchanges credentials for a bearer token.
    ///
    /// `POST /api/token` with an `application/x-www-form-urlencoded` body.
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenGrant, ApiError>;

    /// Fetches the identity behind a token.
    ///
    /// `GET /api/users/me` with `Authorization: Bearer <token>`.
    async fn current_user(&self, token: &AccessToken) -> Result<UserProfile, ApiError>;

    /// Submits a query, attaching the bearer header only when a token is given.
    ///
    /// `POST /api/secure-query` with a JSON `{query}` body.
    async fn secure_query(
        &self,
        query: &str,
        token: Option<AccessToken>,
    ) -> Result<QueryAnswer, ApiError>;

    /// Probes backend liveness via `GET /health`.
    async fn health(&self) -> Result<(), ApiError>;
}
