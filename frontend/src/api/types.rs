use rust_i18n::t;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmPasswordResetRequest {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResetTokenResponse {
    pub valid: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Failure body returned by the accounts API, e.g. `{ "detail": "..." }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const SERVER_ERROR: &str = "SERVER_ERROR";

/// Generic localized message shown when the server gives no usable detail.
pub fn generic_error_message() -> String {
    t!("errors.generic").to_string()
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: VALIDATION_ERROR.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    /// Builds the error for a non-2xx response. The server's `detail` is
    /// surfaced verbatim; anything else collapses to `fallback`.
    pub fn from_response_body(body: &str, fallback: impl Into<String>) -> Self {
        let details = serde_json::from_str::<Value>(body).ok();
        let detail = details
            .as_ref()
            .and_then(|value| serde_json::from_value::<DetailResponse>(value.clone()).ok())
            .and_then(|parsed| parsed.detail)
            .filter(|detail| !detail.trim().is_empty());
        Self {
            error: detail.unwrap_or_else(|| fallback.into()),
            code: SERVER_ERROR.to_string(),
            details,
        }
    }
}
