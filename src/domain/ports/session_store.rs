//! Storage seam for the bearer token.

use crate::domain::entities::AccessToken;
use crate::error::SessionError;

/// Key under which the token is persisted (cookie name, file field).
pub const SESSION_KEY: &str = "accessToken";

/// Persistent key-value slot holding at most one bearer token.
///
/// The browser equivalent is origin-scoped local storage. There is no expiry:
/// a token is only dropped on logout or when the backend answers `401`.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::MemorySessionStore`] - in-process, for tests and fakes
/// - [`crate::infrastructure::session::CookieSessionStore`] - per-request view of the browser cookie
/// - [`crate::infrastructure::session::FileSessionStore`] - JSON file used by the CLI
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any.
    ///
    /// Unreadable storage reads as "no token".
    fn get_token(&self) -> Option<AccessToken>;

    /// Replaces the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn set_token(&self, token: AccessToken) -> Result<(), SessionError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn clear_token(&self) -> Result<(), SessionError>;
}
