//! Shared state injected into every web handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::render::RenderMode;
use crate::domain::ports::BackendApi;
use crate::infrastructure::session::CookieSettings;

/// Application state cloned into each request.
///
/// Holds no session data: the token travels with each request in the
/// browser cookie.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub render_mode: RenderMode,
    pub cookie: CookieSettings,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendApi>, render_mode: RenderMode, cookie: CookieSettings) -> Self {
        Self {
            backend,
            render_mode,
            cookie,
            started_at: Instant::now(),
        }
    }
}
