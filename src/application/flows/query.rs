//! Query form submission.

use thiserror::Error;
use tracing::{info, warn};

use super::GENERIC_FAILURE_MESSAGE;
use crate::domain::entities::{QueryAnswer, QueryRequest};
use crate::domain::ports::{BackendApi, SessionStore};
use crate::error::ApiError;

/// Placeholder shown while a query is in flight.
pub const PROCESSING_MESSAGE: &str = "Processing your query...";

/// Shown when the backend rejects a query without a `detail`.
pub const QUERY_FAILED_MESSAGE: &str = "An error occurred while processing your query.";

/// Why a query produced no answer.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The backend refused the query. `session_expired` is set on `401`, after
    /// which the token has been cleared.
    #[error("query rejected: {}", .detail.as_deref().unwrap_or(QUERY_FAILED_MESSAGE))]
    Rejected {
        detail: Option<String>,
        session_expired: bool,
    },

    /// The query endpoint could not be reached or sent an unusable body.
    #[error("query request failed: {0}")]
    Backend(#[source] ApiError),
}

impl QueryError {
    /// Text for the response panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| QUERY_FAILED_MESSAGE.to_string()),
            Self::Backend(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn session_expired(&self) -> bool {
        matches!(
            self,
            Self::Rejected {
                session_expired: true,
                ..
            }
        )
    }
}

/// Sends the query, with the stored token as bearer credential when present.
///
/// A missing token does not block the request; it is sent without an
/// `Authorization` header and the backend decides.
///
/// # Errors
///
/// - [`QueryError::Rejected`] on a backend error status; on `401` the token is
///   cleared first
/// - [`QueryError::Backend`] on transport failure or an undecodable body; the
///   store is left untouched
pub async fn submit_query(
    backend: &dyn BackendApi,
    session: &dyn SessionStore,
    request: &QueryRequest,
) -> Result<QueryAnswer, QueryError> {
    let token = session.get_token();
    let had_token = token.is_some();

    match backend.secure_query(&request.query, token).await {
        Ok(answer) => Ok(answer),
        Err(ApiError::Unauthorized { detail }) => {
            if had_token {
                info!("Session token rejected by query endpoint, clearing it");
                if let Err(e) = session.clear_token() {
                    warn!("Failed to clear rejected session: {}", e);
                }
            }
            Err(QueryError::Rejected {
                detail,
                session_expired: true,
            })
        }
        Err(ApiError::Rejected { status, detail }) => {
            warn!(status, "Query rejected by backend");
            Err(QueryError::Rejected {
                detail,
                session_expired: false,
            })
        }
        Err(e) => {
            warn!("Error submitting query: {}", e);
            Err(QueryError::Backend(e))
        }
    }
}
