use super::{
    components::{form::RequestResetForm, sent::ResetLinkSent},
    view_model::use_forgot_password_view_model,
};
use crate::components::layout::AuthShell;
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let email = vm.email;
    let error = vm.error;
    let success = vm.success;
    let pending = vm.pending();
    let disabled = vm.submit_disabled();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let handle_send_again = Callback::new(move |_| vm.send_again());

    let title = t!("forgot_password.title").to_string();
    let subtitle = t!("forgot_password.subtitle").to_string();

    view! {
        <AuthShell title=title subtitle=subtitle>
            {move || {
                if success.get() {
                    view! { <ResetLinkSent email=email on_send_again=handle_send_again/> }
                        .into_view()
                } else {
                    view! {
                        <RequestResetForm
                            email=email
                            error=error
                            pending=pending
                            disabled=disabled
                            on_submit=handle_submit
                        />
                    }
                        .into_view()
                }
            }}
        </AuthShell>
    }
}
