//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::application::flows::{DashboardView, PROCESSING_MESSAGE, SessionControl, load_dashboard};
use crate::infrastructure::session::CookieSessionStore;
use crate::state::AppState;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - Greeting and the login/logout control
/// - Query form
/// - Response panel: answer markup, error text, or placeholder
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub greeting: String,
    pub logged_in: bool,
    pub control_label: &'static str,
    pub query: String,
    /// Pre-rendered answer, see [`crate::application::render::format_response`].
    pub answer_html: Option<String>,
    pub error: Option<String>,
    pub processing: &'static str,
}

impl DashboardTemplate {
    pub fn from_view(view: &DashboardView) -> Self {
        Self {
            greeting: view.greeting.clone(),
            logged_in: view.control == SessionControl::Logout,
            control_label: view.control.label(),
            query: String::new(),
            answer_html: None,
            error: None,
            processing: PROCESSING_MESSAGE,
        }
    }
}

/// Renders the dashboard for the current session.
///
/// # Endpoint
///
/// `GET /`
///
/// Visitors without a session see the guest view. A session rejected by the
/// backend has its cookie expired in the same response.
pub async fn dashboard_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = CookieSessionStore::from_headers(&headers);
    let view = load_dashboard(state.backend.as_ref(), &session).await;

    session.apply(
        DashboardTemplate::from_view(&view).into_response(),
        &state.cookie,
    )
}
