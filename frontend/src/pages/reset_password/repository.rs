use crate::api::{ApiClient, ApiError, ConfirmPasswordResetRequest, VerifyResetTokenResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn verify_token(&self, token: String) -> Result<VerifyResetTokenResponse, ApiError> {
        self.client.verify_reset_token(&token).await
    }

    pub async fn reset_password(
        &self,
        request: ConfirmPasswordResetRequest,
    ) -> Result<(), ApiError> {
        self.client.confirm_password_reset(request).await
    }
}
