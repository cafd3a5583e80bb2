use leptos::*;
use std::{future::Future, time::Duration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Runs `f` on a `LocalSet` with a live reactive runtime so that dispatched
/// actions can spawn their futures. `setup` runs first, e.g. to provide
/// context.
pub async fn with_local_runtime<S, F, Fut>(setup: S, f: F) -> Fut::Output
where
    S: FnOnce(),
    F: FnOnce() -> Fut,
    Fut: Future,
{
    tokio::task::LocalSet::new()
        .run_until(async move {
            let runtime = leptos::create_runtime();
            setup();
            let output = f().await;
            runtime.dispose();
            output
        })
        .await
}

/// Polls an action's value signal until the action has resolved.
pub async fn wait_for_value<T: Clone + 'static>(value: RwSignal<Option<T>>) -> Option<T> {
    for _ in 0..500 {
        if let Some(value) = value.get_untracked() {
            return Some(value);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}
