use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;
use rust_i18n::t;

pub mod components;
mod panel;
mod repository;
pub mod utils;
mod view_model;

pub use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let token = Signal::derive(move || {
        params.with(|p| p.get("token").cloned().unwrap_or_default())
    });
    let title = t!("reset_password.page_title").to_string();
    view! {
        <Title text=title/>
        <ResetPasswordPanel token=token/>
    }
}
