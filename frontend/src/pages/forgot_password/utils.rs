use crate::api::ApiError;
use rust_i18n::t;

/// Client-side guard in front of the browser's own `type="email"` check.
pub fn validate_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ApiError::validation(t!("errors.email_required")));
    }
    Ok(email.to_string())
}
