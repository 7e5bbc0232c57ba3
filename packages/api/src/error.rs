use serde::Deserialize;
use thiserror::Error;

use crate::client::HttpResponse;

/// Error body shape the backend uses for 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail);
        ApiError::Status {
            status: response.status,
            detail,
        }
    }

    /// Message fit for display: the server-supplied detail when present,
    /// otherwise the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
