use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-elevated border border-border text-fg hover:bg-action-ghost-bg-hover shadow-sm",
            ButtonVariant::Ghost => "bg-transparent text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-xs",
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-6 py-3 text-base",
        }
    }
}

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    class: &str,
) -> String {
    let width = if full_width { "w-full" } else { "" };
    format!(
        "inline-flex items-center justify-center rounded-md font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {} {} {}",
        variant.classes(),
        size.classes(),
        width,
        class
    )
}

/// Button with a loading mode: while `loading` is set a spinner precedes the
/// label and the button is disabled, so a pending action cannot be re-fired.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, full_width, &class);
    view! {
        <button
            class=classes
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().then_some("true")
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span
                    class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
                    aria-hidden="true"
                ></span>
            </Show>
            {children()}
        </button>
    }
}
