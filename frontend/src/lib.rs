use wasm_bindgen::prelude::wasm_bindgen;

rust_i18n::i18n!("locales", fallback = "en");

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    utils::locale::apply_browser_locale();
    log::info!("Starting EasyStock account recovery frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__EASYSTOCK_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        let base_url = config::await_api_base_url().await;
        log::info!("Runtime config initialized (api_base_url={})", base_url);
    });

    router::mount_app();
}
