//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, login_page_handler, login_submit_handler, logout_handler, query_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Login and dashboard pages.
///
/// No route requires a session: visitors without one get the guest dashboard.
///
/// # Endpoints
///
/// - `GET  /`       - Dashboard with greeting and query form
/// - `POST /query`  - Submit a query, dashboard with the response panel
/// - `POST /logout` - End the session
/// - `GET  /login`  - Login page
/// - `POST /login`  - Exchange credentials for a session
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/query", post(query_handler))
        .route("/logout", post(logout_handler))
        .route("/login", get(login_page_handler).post(login_submit_handler))
}
