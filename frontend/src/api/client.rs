use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};

use crate::{api::types::ApiError, config};

/// Characters left untouched when a value is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Joins `path` (which must start with `/`) onto the resolved base URL.
    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Maps a non-2xx response onto an [`ApiError`], keeping the server's
    /// `detail` when it sent one.
    pub(super) async fn error_from_response(response: Response, fallback: String) -> ApiError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("Failed to read error body (status {}): {}", status, err);
                String::new()
            }
        };
        let error = ApiError::from_response_body(&body, fallback);
        log::warn!("Request failed with status {}: {}", status, error.error);
        error
    }

    pub(super) fn transport_error(err: reqwest::Error, fallback: String) -> ApiError {
        log::warn!("Request failed: {}", err);
        ApiError::request_failed(fallback)
    }
}

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
