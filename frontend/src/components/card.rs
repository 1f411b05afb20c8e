use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            CardVariant::Default => "bg-surface-elevated border border-border",
            CardVariant::Outlined => "bg-surface-elevated border-2 border-border-strong",
            CardVariant::Elevated => "bg-surface-elevated shadow-lg border border-border-subtle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn classes(&self) -> &'static str {
        match self {
            CardPadding::None => "",
            CardPadding::Sm => "p-4",
            CardPadding::Md => "p-6",
            CardPadding::Lg => "p-8",
        }
    }
}

pub fn card_classes(variant: CardVariant, padding: CardPadding, class: &str) -> String {
    ["rounded-lg", variant.classes(), padding.classes(), class]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional, into)] class: String,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_classes(variant, padding, &class) {..attributes}>
            {children()}
        </div>
    }
}
