#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use secureinfo_concierge::application::render::RenderMode;
use secureinfo_concierge::domain::entities::{
    AccessToken, Credentials, QueryAnswer, TokenGrant, UserProfile,
};
use secureinfo_concierge::domain::ports::BackendApi;
use secureinfo_concierge::error::ApiError;
use secureinfo_concierge::infrastructure::session::CookieSettings;
use secureinfo_concierge::routes::router;
use secureinfo_concierge::state::AppState;
use std::sync::{Arc, Mutex};
use url::Url;

type LoginReply = Box<dyn Fn(&Credentials) -> Result<TokenGrant, ApiError> + Send + Sync>;
type UserReply = Box<dyn Fn(&AccessToken) -> Result<UserProfile, ApiError> + Send + Sync>;
type QueryReply = Box<dyn Fn(&str) -> Result<QueryAnswer, ApiError> + Send + Sync>;

/// Scripted in-process backend for page tests.
///
/// Unscripted calls fail with a transport error. Tokens passed to
/// `secure_query` are recorded.
#[derive(Default)]
pub struct FakeBackend {
    login: Option<LoginReply>,
    user: Option<UserReply>,
    query: Option<QueryReply>,
    healthy: bool,
    pub query_tokens: Mutex<Vec<Option<String>>>,
    pub user_calls: Mutex<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_login(
        mut self,
        reply: impl Fn(&Credentials) -> Result<TokenGrant, ApiError> + Send + Sync + 'static,
    ) -> Self {
        self.login = Some(Box::new(reply));
        self
    }

    pub fn on_user(
        mut self,
        reply: impl Fn(&AccessToken) -> Result<UserProfile, ApiError> + Send + Sync + 'static,
    ) -> Self {
        self.user = Some(Box::new(reply));
        self
    }

    pub fn on_query(
        mut self,
        reply: impl Fn(&str) -> Result<QueryAnswer, ApiError> + Send + Sync + 'static,
    ) -> Self {
        self.query = Some(Box::new(reply));
        self
    }

    pub fn healthy(mut self) -> Self {
        self.healthy = true;
        self
    }

    pub fn recorded_query_tokens(&self) -> Vec<Option<String>> {
        self.query_tokens.lock().unwrap().clone()
    }

    pub fn user_call_count(&self) -> usize {
        *self.user_calls.lock().unwrap()
    }
}

fn unscripted() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenGrant, ApiError> {
        match &self.login {
            Some(reply) => reply(credentials),
            None => Err(unscripted()),
        }
    }

    async fn current_user(&self, token: &AccessToken) -> Result<UserProfile, ApiError> {
        *self.user_calls.lock().unwrap() += 1;
        match &self.user {
            Some(reply) => reply(token),
            None => Err(unscripted()),
        }
    }

    async fn secure_query(
        &self,
        query: &str,
        token: Option<AccessToken>,
    ) -> Result<QueryAnswer, ApiError> {
        self.query_tokens
            .lock()
            .unwrap()
            .push(token.map(|t| t.as_str().to_string()));
        match &self.query {
            Some(reply) => reply(query),
            None => Err(unscripted()),
        }
    }

    async fn health(&self) -> Result<(), ApiError> {
        if self.healthy {
            Ok(())
        } else {
            Err(unscripted())
        }
    }
}

pub fn grant(token: &str) -> TokenGrant {
    TokenGrant {
        access_token: AccessToken::new(token),
        token_type: Some("bearer".to_string()),
    }
}

pub fn john_doe() -> UserProfile {
    UserProfile {
        username: "jdoe".to_string(),
        full_name: Some("John Doe".to_string()),
    }
}

pub fn answer(text: &str) -> QueryAnswer {
    QueryAnswer {
        response: text.to_string(),
    }
}

pub fn create_test_state(backend: Arc<FakeBackend>, render_mode: RenderMode) -> AppState {
    AppState::new(
        backend,
        render_mode,
        CookieSettings {
            max_age_seconds: 3600,
            secure: false,
        },
    )
}

pub fn create_test_server(backend: Arc<FakeBackend>) -> TestServer {
    create_test_server_with_mode(backend, RenderMode::Escaped)
}

pub fn create_test_server_with_mode(backend: Arc<FakeBackend>, mode: RenderMode) -> TestServer {
    let app = router(create_test_state(backend, mode), "static");
    TestServer::new(app).unwrap()
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}", addr)).unwrap()
}
