//! Bearer token and the credentials exchanged for it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token issued by the backend.
///
/// The value is never printed through `Debug` so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Successful body of `POST /api/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: AccessToken,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Username and password as typed into the login form.
///
/// Neither field is validated; empty strings are sent as-is.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_hides_secrets() {
        let token = AccessToken::new("eyJhbGciOi");
        assert_eq!(format!("{:?}", token), "AccessToken(***)");

        let creds = Credentials::new("alice", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_token_grant_ignores_extra_fields() {
        let grant: TokenGrant = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"bearer","expires_in":1800}"#,
        )
        .unwrap();

        assert_eq!(grant.access_token.as_str(), "abc");
        assert_eq!(grant.token_type.as_deref(), Some("bearer"));
        assert_eq!(grant.access_token.bearer(), "Bearer abc");
    }
}
