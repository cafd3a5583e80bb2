use rust_i18n::t;

use super::{
    client::{encode_path_segment, ApiClient},
    types::{
        generic_error_message, ApiError, ConfirmPasswordResetRequest,
        RequestPasswordResetRequest, VerifyResetTokenResponse,
    },
};

impl ApiClient {
    /// Asks the backend to email a reset link. Any 2xx counts as success and
    /// the body is ignored; the backend answers the same way whether or not
    /// the address belongs to an account.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/password-reset/request/").await;
        log::debug!("POST {}", url);
        let response = self
            .http_client()
            .post(&url)
            .json(&RequestPasswordResetRequest {
                email: email.to_string(),
            })
            .send()
            .await
            .map_err(|e| Self::transport_error(e, generic_error_message()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, generic_error_message()).await)
        }
    }

    pub async fn verify_reset_token(
        &self,
        token: &str,
    ) -> Result<VerifyResetTokenResponse, ApiError> {
        let fallback = || t!("reset_password.invalid.expired_fallback").to_string();
        let url = self
            .endpoint(&format!(
                "/auth/password-reset/verify/{}/",
                encode_path_segment(token)
            ))
            .await;
        log::debug!("GET {}", url);
        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error(e, fallback()))?;

        if response.status().is_success() {
            response.json().await.map_err(|e| {
                log::warn!("Failed to parse token verification response: {}", e);
                ApiError::request_failed(fallback())
            })
        } else {
            Err(Self::error_from_response(response, fallback()).await)
        }
    }

    pub async fn confirm_password_reset(
        &self,
        request: ConfirmPasswordResetRequest,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/password-reset/confirm/").await;
        log::debug!("POST {}", url);
        let response = self
            .http_client()
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::transport_error(e, generic_error_message()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, generic_error_message()).await)
        }
    }
}
