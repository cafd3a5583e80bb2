use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{ForgotPasswordPage, ResetPasswordPage},
};

pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

pub const ROUTE_PATHS: &[&str] = &["/", FORGOT_PASSWORD_PATH, "/reset-password/:token"];

/// Routes reachable without a session. Every route here is public.
pub const PUBLIC_ROUTE_PATHS: &[&str] = ROUTE_PATHS;

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=RootRedirect/>
                <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
                <Route path="/reset-password/:token" view=ResetPasswordPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=FORGOT_PASSWORD_PATH/> }
}
