//! Cookie-backed session store for the web frontend.
//!
//! The browser keeps the token in the `accessToken` cookie, the server-side
//! analogue of origin-scoped local storage. A [`CookieSessionStore`] is built
//! per request from the incoming `Cookie` header; flows read and mutate it like
//! any other store, and the handler then turns the recorded change into a
//! single `Set-Cookie` header.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error};
use url::form_urlencoded;

use crate::domain::entities::AccessToken;
use crate::domain::ports::{SESSION_KEY, SessionStore};
use crate::error::SessionError;

/// Attributes of the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    /// `Max-Age` of a freshly stored token, in seconds.
    pub max_age_seconds: u64,
    /// Adds the `Secure` attribute. Enable when served over HTTPS.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            max_age_seconds: 30 * 24 * 60 * 60,
            secure: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Stored,
    Cleared,
}

#[derive(Debug, Default)]
struct CookieState {
    token: Option<AccessToken>,
    change: Option<Change>,
}

/// Per-request view of the browser's session cookie.
#[derive(Debug, Default)]
pub struct CookieSessionStore {
    state: Mutex<CookieState>,
}

impl CookieSessionStore {
    /// Reads the `accessToken` cookie from the request headers.
    ///
    /// # Cookie Parsing
    ///
    /// - Every `Cookie` header is considered (HTTP/2 may split them)
    /// - Pairs are separated by semicolons; other cookies are ignored
    /// - Values are percent-decoded; an empty value means no token
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|pair| {
                let (name, value) = form_urlencoded::parse(pair.trim().as_bytes()).next()?;
                (name == SESSION_KEY && !value.is_empty()).then(|| AccessToken::new(value))
            });

        Self {
            state: Mutex::new(CookieState {
                token,
                change: None,
            }),
        }
    }

    /// Builds the `Set-Cookie` value for the change recorded so far.
    ///
    /// Returns `None` when the flows left the session untouched.
    pub fn set_cookie_header(&self, settings: &CookieSettings) -> Option<HeaderValue> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let cookie = match (state.change?, state.token.as_ref()) {
            (Change::Stored, Some(token)) => {
                let value: String =
                    form_urlencoded::byte_serialize(token.as_str().as_bytes()).collect();
                format!(
                    "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax{}",
                    SESSION_KEY,
                    value,
                    settings.max_age_seconds,
                    secure_suffix(settings)
                )
            }
            _ => format!(
                "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax{}",
                SESSION_KEY,
                secure_suffix(settings)
            ),
        };

        match HeaderValue::from_str(&cookie) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Failed to build session cookie: {}", e);
                None
            }
        }
    }

    /// Appends the pending `Set-Cookie` header, if any, to `response`.
    pub fn apply(&self, mut response: Response, settings: &CookieSettings) -> Response {
        if let Some(cookie) = self.set_cookie_header(settings) {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        response
    }
}

fn secure_suffix(settings: &CookieSettings) -> &'static str {
    if settings.secure { "; Secure" } else { "" }
}

impl SessionStore for CookieSessionStore {
    fn get_token(&self) -> Option<AccessToken> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    fn set_token(&self, token: AccessToken) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.token = Some(token);
        state.change = Some(Change::Stored);
        debug!("Session cookie will be set");
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.token = None;
        state.change = Some(Change::Cleared);
        debug!("Session cookie will be expired");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_reads_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; accessToken=abc.def.ghi; lang=en");
        let store = CookieSessionStore::from_headers(&headers);

        assert_eq!(store.get_token(), Some(AccessToken::new("abc.def.ghi")));
    }

    #[test]
    fn test_missing_or_empty_cookie_means_no_token() {
        assert!(
            CookieSessionStore::from_headers(&HeaderMap::new())
                .get_token()
                .is_none()
        );
        assert!(
            CookieSessionStore::from_headers(&headers_with_cookie("accessToken="))
                .get_token()
                .is_none()
        );
        assert!(
            CookieSessionStore::from_headers(&headers_with_cookie("auth_token=xyz"))
                .get_token()
                .is_none()
        );
    }

    #[test]
    fn test_untouched_session_emits_no_header() {
        let store = CookieSessionStore::from_headers(&headers_with_cookie("accessToken=abc"));
        assert!(store.set_cookie_header(&CookieSettings::default()).is_none());
    }

    #[test]
    fn test_stored_token_cookie_attributes() {
        let store = CookieSessionStore::default();
        store.set_token(AccessToken::new("tok")).unwrap();

        let settings = CookieSettings {
            max_age_seconds: 60,
            secure: true,
        };
        let header = store.set_cookie_header(&settings).unwrap();

        assert_eq!(
            header.to_str().unwrap(),
            "accessToken=tok; Path=/; Max-Age=60; HttpOnly; SameSite=Lax; Secure"
        );
    }

    #[test]
    fn test_cleared_token_expires_cookie() {
        let store = CookieSessionStore::from_headers(&headers_with_cookie("accessToken=abc"));
        store.clear_token().unwrap();

        assert!(store.get_token().is_none());
        let header = store
            .set_cookie_header(&CookieSettings::default())
            .unwrap();
        assert!(header.to_str().unwrap().starts_with("accessToken=; "));
        assert!(header.to_str().unwrap().contains("Max-Age=0"));
    }

    #[test]
    fn test_token_value_is_percent_encoded_and_decoded() {
        let store = CookieSessionStore::default();
        store.set_token(AccessToken::new("a;b=c")).unwrap();
        let header = store
            .set_cookie_header(&CookieSettings::default())
            .unwrap();
        let raw = header.to_str().unwrap();
        assert!(raw.starts_with("accessToken=a%3Bb%3Dc;"));

        let pair = raw.split(';').next().unwrap().to_string();
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&pair).unwrap());
        let reread = CookieSessionStore::from_headers(&headers);
        assert_eq!(reread.get_token(), Some(AccessToken::new("a;b=c")));
    }
}
