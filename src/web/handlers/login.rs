//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::flows::submit_login;
use crate::domain::entities::Credentials;
use crate::infrastructure::session::CookieSessionStore;
use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username and password form
/// - Error region, filled after a failed attempt
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {
        username: String::new(),
        error: None,
    }
}

/// Handles the login form.
///
/// # Endpoint
///
/// `POST /login` with `application/x-www-form-urlencoded` `username`, `password`
///
/// # Responses
///
/// - **303 See Other** to `/` with the session cookie on success
/// - **200 OK** with the login page and the error text on failure
pub async fn login_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(credentials): Form<Credentials>,
) -> Response {
    let session = CookieSessionStore::from_headers(&headers);

    let response = match submit_login(state.backend.as_ref(), &session, &credentials).await {
        Ok(target) => Redirect::to(target.path()).into_response(),
        Err(e) => LoginTemplate {
            username: credentials.username,
            error: Some(e.user_message()),
        }
        .into_response(),
    };

    session.apply(response, &state.cookie)
}
