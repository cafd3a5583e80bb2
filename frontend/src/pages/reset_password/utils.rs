use crate::api::ApiError;
use rust_i18n::t;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Fair,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// One point each for: 6+ chars, 8+ chars, an uppercase ASCII letter,
    /// a digit, and any character outside `[A-Za-z0-9]`.
    pub fn evaluate(password: &str) -> Self {
        if password.is_empty() {
            return PasswordStrength::Empty;
        }
        let length = password.chars().count();
        let checks = [
            length >= 6,
            length >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        match checks.iter().filter(|passed| **passed).count() {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    /// Number of filled meter segments, out of four.
    pub fn level(&self) -> u8 {
        match self {
            PasswordStrength::Empty => 0,
            PasswordStrength::Weak => 1,
            PasswordStrength::Fair => 2,
            PasswordStrength::Medium => 3,
            PasswordStrength::Strong => 4,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PasswordStrength::Empty => String::new(),
            PasswordStrength::Weak => t!("reset_password.strength.weak").to_string(),
            PasswordStrength::Fair => t!("reset_password.strength.fair").to_string(),
            PasswordStrength::Medium => t!("reset_password.strength.medium").to_string(),
            PasswordStrength::Strong => t!("reset_password.strength.strong").to_string(),
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "bg-border",
            PasswordStrength::Weak => "bg-status-error-text",
            PasswordStrength::Fair => "bg-status-warning-text",
            PasswordStrength::Medium => "bg-status-info-text",
            PasswordStrength::Strong => "bg-status-success-text",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            PasswordStrength::Empty | PasswordStrength::Weak => "text-status-error-text",
            PasswordStrength::Fair => "text-status-warning-text",
            PasswordStrength::Medium => "text-status-info-text",
            PasswordStrength::Strong => "text-status-success-text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Nothing typed into the confirmation field yet.
    Pending,
    Matches,
    Mismatch,
}

pub fn password_match(new_password: &str, confirm_password: &str) -> PasswordMatch {
    if confirm_password.is_empty() {
        PasswordMatch::Pending
    } else if confirm_password == new_password {
        PasswordMatch::Matches
    } else {
        PasswordMatch::Mismatch
    }
}

pub fn validate_new_password(new_password: &str, confirm_password: &str) -> Result<(), ApiError> {
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(t!("reset_password.too_short")));
    }
    if new_password != confirm_password {
        return Err(ApiError::validation(t!("reset_password.passwords_mismatch")));
    }
    Ok(())
}
