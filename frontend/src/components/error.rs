use leptos::*;
use rust_i18n::t;

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="flex items-start gap-3 rounded-xl border border-status-error-border bg-status-error-bg px-4 py-3 text-status-error-text"
            >
                <svg class="h-5 w-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                    ></path>
                </svg>
                <div>
                    <span class="sr-only">{t!("common.error_title").to_string()}</span>
                    <span class="text-sm">{move || message.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
