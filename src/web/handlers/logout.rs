//! Logout handler.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::flows::{Navigation, logout};
use crate::infrastructure::session::CookieSessionStore;
use crate::state::AppState;

/// Ends the session and redirects.
///
/// # Endpoint
///
/// `POST /logout`
///
/// # Responses
///
/// - **303 See Other** to `/` with an expired session cookie when logged in
/// - **303 See Other** to `/login` otherwise
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = CookieSessionStore::from_headers(&headers);

    let target = logout(&session).unwrap_or_else(|e| {
        tracing::error!("Failed to end session: {}", e);
        Navigation::Home
    });

    session.apply(Redirect::to(target.path()).into_response(), &state.cookie)
}
