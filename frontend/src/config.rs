use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::browser;

/// Used when neither the page globals, `config.json` nor the build
/// environment provide an API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

const ENV_GLOBAL: &str = "__EASYSTOCK_ENV";
const CONFIG_GLOBAL: &str = "__EASYSTOCK_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes; blank values count as missing.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Base URL baked in at build time through `EASYSTOCK_API_BASE_URL`.
pub fn compile_time_base_url() -> Option<String> {
    option_env!("EASYSTOCK_API_BASE_URL").and_then(normalize_base_url)
}

fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let window = browser::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .filter(|v| !v.is_undefined() && !v.is_null())
        .find_map(|v| v.as_string())
        .and_then(|v| normalize_base_url(&v))
}

fn snapshot_from_globals() -> Option<String> {
    // window.__EASYSTOCK_ENV = { API_BASE_URL: "..." } is written by env.js
    read_global(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let _ = API_BASE_URL.set(value.to_string());
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

fn write_window_config(url: &str) {
    let Some(window) = browser::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = browser::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not available (status {})", resp.status());
        return None;
    }
    match resp.json::<RuntimeConfig>().await {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed config.json: {}", err);
            None
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize_base_url(&url))
    {
        write_window_config(&url);
        return cache_base_url(&url);
    }
    let fallback = compile_time_base_url().unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    cache_base_url(&fallback)
}
