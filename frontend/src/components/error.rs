use leptos::*;

/// Global submission error. Renders nothing for `None` or a blank message.
#[component]
pub fn ErrorBanner(#[prop(into)] error: MaybeSignal<Option<String>>) -> impl IntoView {
    let message = move || error.get().filter(|msg| !msg.trim().is_empty());

    view! {
        {move || {
            message()
                .map(|msg| {
                    view! {
                        <div
                            class="p-4 bg-status-error-bg border border-status-error-border rounded-md"
                            role="alert"
                        >
                            <p class="text-sm text-status-error-text">{msg}</p>
                        </div>
                    }
                })
        }}
    }
}
