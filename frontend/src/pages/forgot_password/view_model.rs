use super::{repository::ForgotPasswordRepository, utils};
use crate::api::{ApiClient, ApiError};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<bool>,
    pub submit_action: Action<String, Result<(), ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }

    /// Submit stays disabled while a request is in flight or the field is empty.
    pub fn submit_disabled(&self) -> Signal<bool> {
        let pending = self.submit_action.pending();
        let email = self.email;
        Signal::derive(move || pending.get() || email.with(String::is_empty))
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match utils::validate_email(&self.email.get_untracked()) {
            Ok(email) => {
                self.error.set(None);
                self.submit_action.dispatch(email);
            }
            Err(err) => self.error.set(Some(err.error)),
        }
    }

    pub fn apply_result(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.error.set(None);
                self.success.set(true);
            }
            Err(err) => {
                self.success.set(false);
                self.error.set(Some(err.error));
            }
        }
    }

    /// Applies the most recent submit outcome, if any.
    pub fn apply_latest_result(&self) {
        if let Some(result) = self.submit_action.value().get() {
            self.apply_result(result);
        }
    }

    /// Back from the confirmation to an empty form.
    pub fn send_again(&self) {
        self.email.set(String::new());
        self.error.set(None);
        self.success.set(false);
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(false);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |value: &String| {
        let repo = repo_for_submit.clone();
        let email = value.clone();
        async move { repo.request_reset(email).await }
    });

    let vm = ForgotPasswordViewModel {
        email,
        error,
        success,
        submit_action,
    };

    create_effect(move |_| vm.apply_latest_result());

    vm
}
