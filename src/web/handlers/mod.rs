//! Page and probe handlers for the web frontend.

mod dashboard;
mod health;
mod login;
mod logout;
mod query;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use health::{HealthResponse, ReadyResponse, health_handler, ready_handler};
pub use login::{LoginTemplate, login_page_handler, login_submit_handler};
pub use logout::logout_handler;
pub use query::query_handler;
