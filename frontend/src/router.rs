use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::layout::AuthLayout,
    pages::{home::HomePage, login::LoginPage},
    utils::navigation::{HOME_ROUTE, LOGIN_ROUTE},
};

pub const ROUTE_PATHS: &[&str] = &[HOME_ROUTE, LOGIN_ROUTE];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path=HOME_ROUTE view=HomePage/>
                <Route path=LOGIN_ROUTE view=AuthLogin/>
            </Routes>
        </Router>
    }
}

#[component]
fn AuthLogin() -> impl IntoView {
    view! { <AuthLayout><LoginPage/></AuthLayout> }
}
