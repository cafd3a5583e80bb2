use chrono::{Datelike, Utc};
use leptos::*;
use rust_i18n::t;

/// Centered card used by the signed-out account pages: a tinted header with
/// an icon, title and subtitle, then the page body, then the footer.
#[component]
pub fn AuthShell(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] subtitle: MaybeSignal<String>,
    #[prop(optional)] tone: HeaderTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface p-4">
            <div class="w-full max-w-md relative z-10">
                <div class="bg-surface-elevated rounded-3xl shadow-2xl border border-border overflow-hidden">
                    <div class=format!("px-8 py-10 text-center {}", tone.classes())>
                        <div class="inline-flex items-center justify-center w-16 h-16 bg-white/20 rounded-2xl mb-4">
                            <svg class="w-8 h-8 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=tone.icon_path()></path>
                            </svg>
                        </div>
                        <h1 class="text-2xl font-bold text-white tracking-tight mb-2">{move || title.get()}</h1>
                        <p class="text-white/80 text-sm">{move || subtitle.get()}</p>
                    </div>
                    <div class="px-8 py-8">{children()}</div>
                </div>
                <Footer/>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTone {
    #[default]
    Primary,
    Danger,
    Success,
}

impl HeaderTone {
    pub fn classes(&self) -> &'static str {
        match self {
            HeaderTone::Primary => "bg-action-primary-bg",
            HeaderTone::Danger => "bg-status-error-text",
            HeaderTone::Success => "bg-status-success-text",
        }
    }

    fn icon_path(&self) -> &'static str {
        match self {
            // key
            HeaderTone::Primary => "M15 7a2 2 0 012 2m4 0a6 6 0 01-7.743 5.743L11 17H9v2H7v2H4a1 1 0 01-1-1v-2.586a1 1 0 01.293-.707l5.964-5.964A6 6 0 1121 9z",
            // cross
            HeaderTone::Danger => "M6 18L18 6M6 6l12 12",
            // check
            HeaderTone::Success => "M5 13l4 4L19 7",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year().to_string();
    view! {
        <div class="mt-8 text-center">
            <p class="text-sm text-fg-muted">{t!("app.footer", year = year).to_string()}</p>
        </div>
    }
}

/// Full-width link back to the sign-in page, which lives outside this app.
#[component]
pub fn BackToLoginLink(#[prop(optional)] prominent: bool) -> impl IntoView {
    let class = if prominent {
        "block w-full py-3 rounded-xl text-center font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover transition-colors"
    } else {
        "inline-flex items-center gap-2 text-sm text-fg-muted hover:text-link-hover transition-colors"
    };
    view! {
        <a href="/login" rel="external" class=class>
            {t!("common.back_to_login").to_string()}
        </a>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn auth_shell_renders_header_and_children() {
        let html = render_to_string(|| {
            view! {
                <AuthShell title="Forgot password?" subtitle="Enter your email">
                    <p>"body"</p>
                </AuthShell>
            }
        });
        assert!(html.contains("Forgot password?"));
        assert!(html.contains("Enter your email"));
        assert!(html.contains("<p"));
        assert!(html.contains("body"));
        assert!(html.contains(&Utc::now().year().to_string()));
    }

    #[test]
    fn danger_tone_uses_error_palette() {
        assert_eq!(HeaderTone::Danger.classes(), "bg-status-error-text");
        assert_ne!(HeaderTone::Primary.icon_path(), HeaderTone::Danger.icon_path());
    }

    #[test]
    fn back_to_login_link_bypasses_client_router() {
        let html = render_to_string(|| view! { <BackToLoginLink/> });
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("rel=\"external\""));
        assert!(html.contains("Back to login"));
    }
}
