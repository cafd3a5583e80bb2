use super::{
    repository::ResetPasswordRepository,
    utils::{self, PasswordMatch, PasswordStrength},
};
use crate::api::{ApiClient, ApiError, ConfirmPasswordResetRequest, VerifyResetTokenResponse};
use leptos::*;
use rust_i18n::t;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetAccount {
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetPhase {
    Verifying,
    Invalid(String),
    Ready(ResetAccount),
    Completed,
}

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub token: Signal<String>,
    pub phase: RwSignal<ResetPhase>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Resolves to the checked token together with the backend's answer.
    pub verify_action: Action<String, (String, Result<VerifyResetTokenResponse, ApiError>)>,
    pub submit_action: Action<ConfirmPasswordResetRequest, Result<(), ApiError>>,
}

impl ResetPasswordViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }

    pub fn strength(&self) -> Signal<PasswordStrength> {
        let new_password = self.new_password;
        Signal::derive(move || new_password.with(|p| PasswordStrength::evaluate(p)))
    }

    pub fn match_state(&self) -> Signal<PasswordMatch> {
        let new_password = self.new_password;
        let confirm_password = self.confirm_password;
        Signal::derive(move || {
            new_password.with(|new| confirm_password.with(|confirm| utils::password_match(new, confirm)))
        })
    }

    pub fn set_new_password(&self, value: String) {
        self.new_password.set(value);
        self.error.set(None);
    }

    pub fn set_confirm_password(&self, value: String) {
        self.confirm_password.set(value);
        self.error.set(None);
    }

    pub fn toggle_show_password(&self) {
        self.show_password.update(|shown| *shown = !*shown);
    }

    /// Checks the token with the backend. An empty token is rejected locally.
    pub fn start_verification(&self, token: String) {
        if token.trim().is_empty() {
            self.phase
                .set(ResetPhase::Invalid(t!("reset_password.invalid.fallback").to_string()));
            return;
        }
        self.phase.set(ResetPhase::Verifying);
        self.verify_action.dispatch(token);
    }

    pub fn apply_verification(&self, result: Result<VerifyResetTokenResponse, ApiError>) {
        let phase = match result {
            Ok(resp) if resp.valid => ResetPhase::Ready(ResetAccount {
                username: resp.username.unwrap_or_default(),
                email: resp.email.unwrap_or_default(),
            }),
            Ok(resp) => ResetPhase::Invalid(
                resp.detail
                    .filter(|detail| !detail.trim().is_empty())
                    .unwrap_or_else(|| t!("reset_password.invalid.fallback").to_string()),
            ),
            Err(err) => ResetPhase::Invalid(err.error),
        };
        self.phase.set(phase);
    }

    /// Applies the latest verification answer unless it belongs to a token
    /// the route has since moved away from.
    pub fn apply_latest_verification(&self) {
        if let Some((checked, result)) = self.verify_action.value().get() {
            if checked == self.token.get_untracked() {
                self.apply_verification(result);
            }
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let new_password = self.new_password.get_untracked();
        let confirm_password = self.confirm_password.get_untracked();
        if let Err(err) = utils::validate_new_password(&new_password, &confirm_password) {
            self.error.set(Some(err.error));
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(ConfirmPasswordResetRequest {
            token: self.token.get_untracked(),
            new_password,
            confirm_password,
        });
    }

    pub fn apply_submit_result(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.error.set(None);
                self.new_password.set(String::new());
                self.confirm_password.set(String::new());
                self.phase.set(ResetPhase::Completed);
            }
            Err(err) => self.error.set(Some(err.error)),
        }
    }

    pub fn apply_latest_submit_result(&self) {
        if let Some(result) = self.submit_action.value().get() {
            self.apply_submit_result(result);
        }
    }
}

pub fn use_reset_password_view_model(token: Signal<String>) -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));

    let repo_for_verify = repository.clone();
    let verify_action = create_action(move |token: &String| {
        let repo = repo_for_verify.clone();
        let token = token.clone();
        async move {
            let result = repo.verify_token(token.clone()).await;
            (token, result)
        }
    });

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &ConfirmPasswordResetRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.reset_password(request).await }
    });

    let vm = ResetPasswordViewModel {
        token,
        phase: create_rw_signal(ResetPhase::Verifying),
        new_password: create_rw_signal(String::new()),
        confirm_password: create_rw_signal(String::new()),
        show_password: create_rw_signal(false),
        error: create_rw_signal(None),
        verify_action,
        submit_action,
    };

    create_effect(move |_| {
        vm.start_verification(token.get());
    });

    create_effect(move |_| vm.apply_latest_verification());
    create_effect(move |_| vm.apply_latest_submit_result());

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{wait_for_value, with_local_runtime, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    const TOKEN: &str = "3f2b8c1e-9a4d-4e6f-b1c2-7d8e9f0a1b2c";

    fn view_model() -> ResetPasswordViewModel {
        use_reset_password_view_model(Signal::derive(|| "reset-token".to_string()))
    }

    fn ready(vm: &ResetPasswordViewModel) {
        vm.apply_verification(Ok(VerifyResetTokenResponse {
            valid: true,
            username: Some("manager".into()),
            email: Some("manager@easystock.test".into()),
            detail: None,
        }));
    }

    #[test]
    fn starts_verifying() {
        with_runtime(|| {
            let vm = view_model();
            assert_eq!(vm.phase.get(), ResetPhase::Verifying);
            assert!(!vm.show_password.get());
        });
    }

    #[test]
    fn valid_token_moves_to_ready_with_account() {
        with_runtime(|| {
            let vm = view_model();
            ready(&vm);
            assert_eq!(
                vm.phase.get(),
                ResetPhase::Ready(ResetAccount {
                    username: "manager".into(),
                    email: "manager@easystock.test".into(),
                })
            );
        });
    }

    #[test]
    fn invalid_flag_uses_detail_or_fallback() {
        with_runtime(|| {
            let vm = view_model();
            vm.apply_verification(Ok(VerifyResetTokenResponse {
                valid: false,
                username: None,
                email: None,
                detail: Some("Link already used".into()),
            }));
            assert_eq!(vm.phase.get(), ResetPhase::Invalid("Link already used".into()));

            vm.apply_verification(Ok(VerifyResetTokenResponse {
                valid: false,
                username: None,
                email: None,
                detail: None,
            }));
            assert_eq!(
                vm.phase.get(),
                ResetPhase::Invalid("This link is invalid".into())
            );
        });
    }

    #[test]
    fn verification_error_marks_link_invalid() {
        with_runtime(|| {
            let vm = view_model();
            vm.apply_verification(Err(ApiError::from_response_body(
                "",
                "This link is invalid or has expired",
            )));
            assert_eq!(
                vm.phase.get(),
                ResetPhase::Invalid("This link is invalid or has expired".into())
            );
        });
    }

    #[test]
    fn empty_token_is_invalid_without_request() {
        with_runtime(|| {
            let vm = view_model();
            vm.start_verification("  ".into());
            assert_eq!(
                vm.phase.get(),
                ResetPhase::Invalid("This link is invalid".into())
            );
            assert!(vm.verify_action.input().get().is_none());
        });
    }

    #[test]
    fn short_password_is_rejected_locally() {
        with_runtime(|| {
            let vm = view_model();
            ready(&vm);
            vm.set_new_password("abc".into());
            vm.set_confirm_password("abc".into());
            vm.submit();
            assert_eq!(
                vm.error.get().as_deref(),
                Some("Password must be at least 6 characters")
            );
            assert!(vm.submit_action.input().get().is_none());
        });
    }

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        with_runtime(|| {
            let vm = view_model();
            ready(&vm);
            vm.set_new_password("Secret12".into());
            vm.set_confirm_password("Secret13".into());
            vm.submit();
            assert_eq!(vm.error.get().as_deref(), Some("Passwords do not match"));
            assert_eq!(vm.match_state().get(), PasswordMatch::Mismatch);
            assert!(vm.submit_action.input().get().is_none());
        });
    }

    #[test]
    fn editing_a_field_clears_error() {
        with_runtime(|| {
            let vm = view_model();
            vm.error.set(Some("Passwords do not match".into()));
            vm.set_confirm_password("Secret12".into());
            assert!(vm.error.get().is_none());
        });
    }

    #[test]
    fn successful_submit_completes_and_clears_fields() {
        with_runtime(|| {
            let vm = view_model();
            ready(&vm);
            vm.set_new_password("Secret12".into());
            vm.set_confirm_password("Secret12".into());
            vm.apply_submit_result(Ok(()));
            assert_eq!(vm.phase.get(), ResetPhase::Completed);
            assert!(vm.new_password.get().is_empty());
            assert!(vm.confirm_password.get().is_empty());
        });
    }

    #[test]
    fn failed_submit_keeps_form_with_error() {
        with_runtime(|| {
            let vm = view_model();
            ready(&vm);
            vm.apply_submit_result(Err(ApiError::from_response_body(
                r#"{"detail":"Token has expired"}"#,
                "fallback",
            )));
            assert!(matches!(vm.phase.get(), ResetPhase::Ready(_)));
            assert_eq!(vm.error.get().as_deref(), Some("Token has expired"));
        });
    }

    #[test]
    fn strength_tracks_new_password() {
        with_runtime(|| {
            let vm = view_model();
            assert_eq!(vm.strength().get(), PasswordStrength::Empty);
            vm.set_new_password("Abcdefg1!".into());
            assert_eq!(vm.strength().get(), PasswordStrength::Strong);
        });
    }

    #[test]
    fn toggle_show_password_flips() {
        with_runtime(|| {
            let vm = view_model();
            vm.toggle_show_password();
            assert!(vm.show_password.get());
            vm.toggle_show_password();
            assert!(!vm.show_password.get());
        });
    }

    #[test]
    fn verification_for_previous_token_is_ignored() {
        with_runtime(|| {
            let token = create_rw_signal("new-token".to_string());
            let vm = use_reset_password_view_model(token.into());
            let account = Ok(VerifyResetTokenResponse {
                valid: true,
                username: Some("manager".into()),
                email: Some("manager@easystock.test".into()),
                detail: None,
            });

            vm.verify_action
                .value()
                .set(Some(("old-token".into(), account.clone())));
            vm.apply_latest_verification();
            assert_eq!(vm.phase.get(), ResetPhase::Verifying);

            vm.verify_action
                .value()
                .set(Some(("new-token".into(), account)));
            vm.apply_latest_verification();
            assert!(matches!(vm.phase.get(), ResetPhase::Ready(_)));
        });
    }

    #[tokio::test]
    async fn verify_then_submit_posts_confirmation_once() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/api/auth/password-reset/verify/{}/", TOKEN));
                then.status(200).json_body(json!({
                    "valid": true,
                    "username": "manager",
                    "email": "manager@easystock.test"
                }));
            })
            .await;
        let confirm = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/auth/password-reset/confirm/")
                    .json_body(json!({
                        "token": TOKEN,
                        "new_password": "Secret12!",
                        "confirm_password": "Secret12!"
                    }));
                then.status(200).json_body(json!({ "detail": "Password changed" }));
            })
            .await;
        let api = ApiClient::new_with_base_url(server.url("/api"));

        with_local_runtime(
            move || provide_context(api),
            || async {
                let vm = use_reset_password_view_model(Signal::derive(|| TOKEN.to_string()));
                vm.start_verification(TOKEN.to_string());
                wait_for_value(vm.verify_action.value()).await;
                vm.apply_latest_verification();
                assert_eq!(
                    vm.phase.get_untracked(),
                    ResetPhase::Ready(ResetAccount {
                        username: "manager".into(),
                        email: "manager@easystock.test".into(),
                    })
                );

                vm.set_new_password("Secret12!".into());
                vm.set_confirm_password("Secret12!".into());
                vm.submit();
                assert!(vm.pending().get_untracked());
                vm.submit();

                wait_for_value(vm.submit_action.value()).await;
                vm.apply_latest_submit_result();
                assert_eq!(vm.phase.get_untracked(), ResetPhase::Completed);
            },
        )
        .await;

        assert_eq!(confirm.hits_async().await, 1);
    }
}
