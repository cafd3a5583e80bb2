pub mod forgot_password;
pub mod reset_password;

pub use forgot_password::ForgotPasswordPage;
pub use reset_password::ResetPasswordPage;
