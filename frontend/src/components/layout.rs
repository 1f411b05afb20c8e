use leptos::*;

/// Centered narrow column used by the unauthenticated routes.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4 py-12 sm:px-6 lg:px-8">
            <div class="max-w-md w-full">{children()}</div>
        </div>
    }
}
