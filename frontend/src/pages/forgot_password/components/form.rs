use crate::components::{common::Button, error::ErrorAlert, layout::BackToLoginLink};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

pub const SUBMIT_BUTTON_ID: &str = "forgot-password-submit";

#[component]
pub fn RequestResetForm(
    email: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let submit_label = move || {
        if pending.get() {
            t!("forgot_password.submitting").to_string()
        } else {
            t!("forgot_password.submit").to_string()
        }
    };

    view! {
        <div class="space-y-6">
            <p class="text-center text-sm text-fg-muted">{t!("forgot_password.intro").to_string()}</p>

            <ErrorAlert message=error/>

            <form class="space-y-5" on:submit=move |ev| on_submit.call(ev)>
                <div>
                    <label for="email-address" class="block text-sm font-semibold text-fg mb-2">
                        {t!("forgot_password.email_label").to_string()}
                    </label>
                    <input
                        id="email-address"
                        name="email"
                        type="email"
                        autocomplete="email"
                        required
                        class="w-full rounded-xl border border-form-control-border bg-form-control-bg px-4 py-3 text-sm text-form-control-text placeholder-form-control-placeholder outline-none focus:ring-2 focus:ring-action-primary-focus"
                        placeholder=t!("forgot_password.email_placeholder").to_string()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <Button id=SUBMIT_BUTTON_ID disabled=disabled loading=pending>
                    {submit_label}
                </Button>
            </form>

            <div class="text-center">
                <BackToLoginLink/>
            </div>
        </div>
    }
}
