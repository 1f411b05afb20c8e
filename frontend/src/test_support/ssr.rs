use crate::api::ApiClient;
use leptos::*;
use leptos_meta::provide_meta_context;

/// Base URL for components rendered in tests; nothing should ever call it.
pub const TEST_API_BASE_URL: &str = "http://127.0.0.1:9/api";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` to HTML with the contexts the app root normally provides.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_meta_context();
        provide_context(ApiClient::new_with_base_url(TEST_API_BASE_URL));
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
