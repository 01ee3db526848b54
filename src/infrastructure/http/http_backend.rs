//! `reqwest` implementation of [`BackendApi`].

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{
    AccessToken, Credentials, QueryAnswer, QueryRequest, TokenGrant, UserProfile,
};
use crate::domain::ports::BackendApi;
use crate::error::ApiError;

/// Error body returned by the backend on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// HTTP client for the backend REST API.
///
/// No retries and no backoff. A request timeout is only applied when one is
/// configured; otherwise a hung request waits indefinitely.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a client rooted at `base_url`.
    ///
    /// Endpoint paths are resolved relative to the base, so a base of
    /// `https://host/app` targets `https://host/app/api/token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying client cannot be built.
    pub fn new(mut base_url: Url, timeout: Option<Duration>) -> Result<Self, ApiError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("invalid endpoint {}: {}", path, e)))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenGrant, ApiError> {
        let url = self.endpoint("api/token")?;
        debug!("Requesting token for user {}", credentials.username);

        let response = self
            .client
            .post(url)
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        decode(response).await
    }

    async fn current_user(&self, token: &AccessToken) -> Result<UserProfile, ApiError> {
        let url = self.endpoint("api/users/me")?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(transport_error)?;

        decode(response).await
    }

    async fn secure_query(
        &self,
        query: &str,
        token: Option<AccessToken>,
    ) -> Result<QueryAnswer, ApiError> {
        let url = self.endpoint("api/secure-query")?;

        let mut request = self.client.post(url).json(&QueryRequest::new(query));
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.bearer());
        }

        let response = request.send().await.map_err(transport_error)?;

        decode(response).await
    }

    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint("health")?;

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: None,
            })
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    warn!("Backend request failed: {}", e);
    ApiError::Transport(e.to_string())
}

/// Maps a backend response onto the success type or an [`ApiError`].
///
/// - 2xx: body must decode as `T`, otherwise [`ApiError::Decode`]
/// - 401: [`ApiError::Unauthorized`], with `detail` if the body carries one
/// - other statuses with a JSON body: [`ApiError::Rejected`]
/// - other statuses without a JSON body: [`ApiError::Decode`]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body = response.bytes().await.ok();
    let error_body = body
        .as_deref()
        .and_then(|bytes| serde_json::from_slice::<ErrorBody>(bytes).ok());

    debug!("Backend answered {}", status);

    match (status, error_body) {
        (StatusCode::UNAUTHORIZED, body) => Err(ApiError::Unauthorized {
            detail: body.and_then(|b| b.detail).and_then(detail_text),
        }),
        (status, Some(body)) => Err(ApiError::Rejected {
            status: status.as_u16(),
            detail: body.detail.and_then(detail_text),
        }),
        (status, None) => Err(ApiError::Decode(format!(
            "HTTP {} without a JSON error body",
            status.as_u16()
        ))),
    }
}

/// Renders a `detail` value as text.
///
/// Strings are used verbatim; structured details (validation error lists)
/// are shown as their JSON text.
fn detail_text(detail: Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_text() {
        assert_eq!(detail_text(json!("bad credentials")).as_deref(), Some("bad credentials"));
        assert_eq!(detail_text(Value::Null), None);
        assert_eq!(
            detail_text(json!([{"msg": "field required"}])).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let backend =
            HttpBackend::new(Url::parse("http://localhost:8000/app").unwrap(), None).unwrap();

        assert_eq!(backend.base_url().as_str(), "http://localhost:8000/app/");
        assert_eq!(
            backend.endpoint("api/token").unwrap().as_str(),
            "http://localhost:8000/app/api/token"
        );
    }

    #[test]
    fn test_root_base_url() {
        let backend = HttpBackend::new(Url::parse("http://localhost:8000").unwrap(), None).unwrap();

        assert_eq!(
            backend.endpoint("api/users/me").unwrap().as_str(),
            "http://localhost:8000/api/users/me"
        );
    }
}
