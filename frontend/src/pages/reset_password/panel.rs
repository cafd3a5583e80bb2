use super::{
    components::{
        form::NewPasswordForm,
        status::{InvalidLink, ResetCompleted, VerifyingLink},
    },
    view_model::{use_reset_password_view_model, ResetPhase},
};
use crate::components::layout::AuthShell;
use leptos::*;
use rust_i18n::t;

#[component]
pub fn ResetPasswordPanel(#[prop(into)] token: Signal<String>) -> impl IntoView {
    let vm = use_reset_password_view_model(token);
    let phase = vm.phase;

    move || match phase.get() {
        ResetPhase::Verifying => view! { <VerifyingLink/> }.into_view(),
        ResetPhase::Invalid(reason) => view! { <InvalidLink reason=reason/> }.into_view(),
        ResetPhase::Ready(account) => {
            let title = t!("reset_password.title").to_string();
            let subtitle = t!(
                "reset_password.subtitle",
                username = account.username,
                email = account.email
            )
            .to_string();
            view! {
                <AuthShell title=title subtitle=subtitle>
                    <NewPasswordForm vm=vm/>
                </AuthShell>
            }
            .into_view()
        }
        ResetPhase::Completed => view! { <ResetCompleted/> }.into_view(),
    }
}
