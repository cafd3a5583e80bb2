use web_sys::Window;

/// The browser window, or `None` when running outside a wasm host
/// (server-side rendering, native tests).
pub fn window() -> Option<Window> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}
