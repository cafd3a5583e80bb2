use crate::{
    components::{common::Button, error::ErrorAlert, layout::BackToLoginLink},
    pages::reset_password::{
        utils::{PasswordMatch, PasswordStrength},
        view_model::ResetPasswordViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

pub const SUBMIT_BUTTON_ID: &str = "reset-password-submit";

#[component]
pub fn NewPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let pending = vm.pending();
    let show_password = vm.show_password;
    let new_password = vm.new_password;
    let confirm_password = vm.confirm_password;
    let match_state = vm.match_state();
    let input_type = move || if show_password.get() { "text" } else { "password" };
    let toggle_label = move || {
        if show_password.get() {
            t!("reset_password.hide_password").to_string()
        } else {
            t!("reset_password.show_password").to_string()
        }
    };
    let submit_label = move || {
        if pending.get() {
            t!("reset_password.submitting").to_string()
        } else {
            t!("reset_password.submit").to_string()
        }
    };
    let new_placeholder = t!("reset_password.new_password_placeholder").to_string();
    let confirm_placeholder = t!("reset_password.confirm_password_placeholder").to_string();

    view! {
        <div class="space-y-6">
            <ErrorAlert message=vm.error/>

            <form
                class="space-y-5"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div>
                    <label for="new-password" class="block text-sm font-semibold text-fg mb-2">
                        {t!("reset_password.new_password_label").to_string()}
                    </label>
                    <div class="relative">
                        <input
                            id="new-password"
                            name="new_password"
                            type=input_type
                            autocomplete="new-password"
                            required
                            class="w-full rounded-xl border border-form-control-border bg-form-control-bg pl-4 pr-24 py-3 text-sm text-form-control-text outline-none focus:ring-2 focus:ring-action-primary-focus"
                            placeholder=new_placeholder
                            prop:value=move || new_password.get()
                            on:input=move |ev| vm.set_new_password(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-4 text-xs font-medium text-fg-muted hover:text-fg"
                            on:click=move |_| vm.toggle_show_password()
                        >
                            {toggle_label}
                        </button>
                    </div>
                    <StrengthMeter strength=vm.strength()/>
                </div>

                <div>
                    <label for="confirm-password" class="block text-sm font-semibold text-fg mb-2">
                        {t!("reset_password.confirm_password_label").to_string()}
                    </label>
                    <input
                        id="confirm-password"
                        name="confirm_password"
                        type=input_type
                        autocomplete="new-password"
                        required
                        class=move || {
                            format!(
                                "w-full rounded-xl border px-4 py-3 text-sm outline-none focus:ring-2 focus:ring-action-primary-focus {}",
                                match match_state.get() {
                                    PasswordMatch::Pending => "border-form-control-border bg-form-control-bg",
                                    PasswordMatch::Matches => "border-status-success-border bg-status-success-bg",
                                    PasswordMatch::Mismatch => "border-status-error-border bg-status-error-bg",
                                },
                            )
                        }
                        placeholder=confirm_placeholder
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| vm.set_confirm_password(event_target_value(&ev))
                    />
                    <MatchHint state=match_state/>
                </div>

                <Button id=SUBMIT_BUTTON_ID loading=pending>
                    {submit_label}
                </Button>
            </form>

            <div class="text-center">
                <BackToLoginLink/>
            </div>
        </div>
    }
}

#[component]
pub fn StrengthMeter(#[prop(into)] strength: Signal<PasswordStrength>) -> impl IntoView {
    view! {
        <Show when=move || strength.get() != PasswordStrength::Empty fallback=|| ()>
            <div class="mt-2" data-strength=move || strength.get().level()>
                <div class="flex gap-1">
                    {(1..=4u8)
                        .map(|segment| {
                            view! {
                                <div class=move || {
                                    let current = strength.get();
                                    let color = if segment <= current.level() {
                                        current.bar_class()
                                    } else {
                                        PasswordStrength::Empty.bar_class()
                                    };
                                    format!("h-1.5 flex-1 rounded-full {}", color)
                                }></div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class=move || format!("text-xs mt-1 {}", strength.get().text_class())>
                    {move || {
                        t!("reset_password.strength_label", level = strength.get().label()).to_string()
                    }}
                </p>
            </div>
        </Show>
    }
}

#[component]
pub fn MatchHint(#[prop(into)] state: Signal<PasswordMatch>) -> impl IntoView {
    move || match state.get() {
        PasswordMatch::Pending => ().into_view(),
        PasswordMatch::Matches => view! {
            <p class="text-status-success-text text-xs mt-1.5">
                {t!("reset_password.passwords_match").to_string()}
            </p>
        }
        .into_view(),
        PasswordMatch::Mismatch => view! {
            <p class="text-status-error-text text-xs mt-1.5">
                {t!("reset_password.passwords_mismatch").to_string()}
            </p>
        }
        .into_view(),
    }
}
