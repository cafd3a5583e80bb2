use leptos::*;
use leptos_meta::Title;
use rust_i18n::t;

pub mod components;
mod panel;
mod repository;
pub mod utils;
mod view_model;

pub use panel::ForgotPasswordPanel;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let title = t!("forgot_password.page_title").to_string();
    view! {
        <Title text=title/>
        <ForgotPasswordPanel />
    }
}
