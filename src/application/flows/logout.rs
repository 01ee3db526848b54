//! Logout control.

use tracing::info;

use super::Navigation;
use crate::domain::ports::SessionStore;
use crate::error::SessionError;

/// Ends the session, or sends a guest to the login page.
///
/// With a stored token the token is cleared and the user lands on
/// [`Navigation::Home`]; without one the control acts as a login link.
///
/// # Errors
///
/// Returns [`SessionError`] if the token could not be removed.
pub fn logout(session: &dyn SessionStore) -> Result<Navigation, SessionError> {
    if session.get_token().is_none() {
        return Ok(Navigation::Login);
    }

    session.clear_token()?;
    info!("Logged out");
    Ok(Navigation::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session::MemorySessionStore;

    #[test]
    fn test_logout_clears_token_and_goes_home() {
        let session = MemorySessionStore::with_token("tok");

        assert_eq!(logout(&session).unwrap(), Navigation::Home);
        assert!(session.get_token().is_none());
    }

    #[test]
    fn test_logout_without_token_goes_to_login() {
        let session = MemorySessionStore::new();

        assert_eq!(logout(&session).unwrap(), Navigation::Login);
        assert_eq!(Navigation::Login.path(), "/login");
    }
}
