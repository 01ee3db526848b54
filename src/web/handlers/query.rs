//! Query submission handler.

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use super::dashboard::DashboardTemplate;
use crate::application::flows::{load_dashboard, submit_query};
use crate::application::render::format_response;
use crate::domain::entities::QueryRequest;
use crate::infrastructure::session::CookieSessionStore;
use crate::state::AppState;

/// Submits a query and renders the dashboard with the result.
///
/// # Endpoint
///
/// `POST /query` with `application/x-www-form-urlencoded` `query`
///
/// The query runs first so that a `401` clears the session before the header
/// is rendered; the dashboard then shows the guest view.
pub async fn query_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<QueryRequest>,
) -> Response {
    let session = CookieSessionStore::from_headers(&headers);
    let backend = state.backend.as_ref();

    let outcome = submit_query(backend, &session, &request).await;
    let view = load_dashboard(backend, &session).await;

    let mut page = DashboardTemplate::from_view(&view);
    page.query = request.query;
    match outcome {
        Ok(answer) => page.answer_html = Some(format_response(&answer.response, state.render_mode)),
        Err(e) => page.error = Some(e.user_message()),
    }

    session.apply(page.into_response(), &state.cookie)
}
