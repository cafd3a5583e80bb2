use crate::components::{
    common::{Button, ButtonVariant},
    layout::BackToLoginLink,
};
use leptos::*;
use rust_i18n::t;

pub const SEND_AGAIN_BUTTON_ID: &str = "forgot-password-send-again";

/// Confirmation shown after any 2xx. The copy never confirms that the
/// address belongs to an account.
#[component]
pub fn ResetLinkSent(#[prop(into)] email: Signal<String>, on_send_again: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center space-y-6">
            <div class="inline-flex items-center justify-center w-16 h-16 rounded-full bg-status-success-bg">
                <svg class="w-8 h-8 text-status-success-text" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                    ></path>
                </svg>
            </div>
            <div>
                <h2 class="text-xl font-bold text-fg mb-2">{t!("forgot_password.sent_title").to_string()}</h2>
                <p class="text-sm text-fg-muted leading-relaxed">
                    {move || t!("forgot_password.sent_body", email = email.get()).to_string()}
                </p>
            </div>
            <div class="rounded-xl border border-status-warning-border bg-status-warning-bg p-4 text-left">
                <p class="text-sm font-medium text-status-warning-text">{t!("forgot_password.check_inbox").to_string()}</p>
                <p class="text-xs mt-1 text-status-warning-text">{t!("forgot_password.link_expiry").to_string()}</p>
            </div>
            <div class="space-y-3">
                <Button
                    id=SEND_AGAIN_BUTTON_ID
                    button_type="button"
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| on_send_again.call(()))
                >
                    {t!("forgot_password.send_again").to_string()}
                </Button>
                <BackToLoginLink prominent=true/>
            </div>
        </div>
    }
}
