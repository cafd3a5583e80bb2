use crate::components::layout::{AuthShell, BackToLoginLink, HeaderTone};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn VerifyingLink() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface p-4">
            <div class="text-center" role="status">
                <div class="w-16 h-16 border-4 border-action-primary-bg border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-fg-muted">{t!("reset_password.verifying").to_string()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn InvalidLink(#[prop(into)] reason: String) -> impl IntoView {
    let title = t!("reset_password.invalid.title").to_string();
    view! {
        <AuthShell title=title subtitle=reason tone=HeaderTone::Danger>
            <div class="text-center space-y-6">
                <p class="text-sm text-fg-muted">{t!("reset_password.invalid.body").to_string()}</p>
                <div class="space-y-3">
                    <a
                        href="/forgot-password"
                        class="block w-full py-3 rounded-xl text-center font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover transition-colors"
                    >
                        {t!("reset_password.invalid.request_new").to_string()}
                    </a>
                    <BackToLoginLink/>
                </div>
            </div>
        </AuthShell>
    }
}

#[component]
pub fn ResetCompleted() -> impl IntoView {
    let title = t!("reset_password.completed.title").to_string();
    let subtitle = t!("reset_password.completed.subtitle").to_string();
    view! {
        <AuthShell title=title subtitle=subtitle tone=HeaderTone::Success>
            <div class="text-center space-y-6">
                <p class="text-sm text-fg-muted">{t!("reset_password.completed.body").to_string()}</p>
                <a
                    href="/login"
                    rel="external"
                    class="block w-full py-3.5 rounded-xl text-center font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover transition-colors"
                >
                    {t!("common.sign_in").to_string()}
                </a>
            </div>
        </AuthShell>
    }
}
