use leptos::*;

/// Id used for the `<input>` and its label/error/helper associations.
///
/// An explicit id wins; otherwise the label is lower-cased and whitespace
/// runs become `-`, prefixed with `input-`.
pub fn input_id(id: Option<&str>, label: Option<&str>) -> String {
    if let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    match label.map(str::trim).filter(|label| !label.is_empty()) {
        Some(label) => format!(
            "input-{}",
            label
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
        ),
        None => "input-field".to_string(),
    }
}

fn control_classes(has_error: bool) -> String {
    let border = if has_error {
        "border-status-error-border focus:ring-status-error-text focus:border-status-error-border"
    } else {
        "border-form-control-border"
    };
    format!(
        "block w-full px-3 py-2 border rounded-md shadow-sm bg-form-control-bg text-form-control-text placeholder-form-control-placeholder focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border disabled:opacity-60 disabled:cursor-not-allowed {}",
        border
    )
}

/// Labelled text input with optional error and helper text.
///
/// While `error` holds a message the input is marked `aria-invalid` and
/// described by the error paragraph; otherwise it is described by the helper
/// text, if any.
#[component]
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let input_id = input_id(id.as_deref(), label.as_deref());
    let error_id = format!("{}-error", input_id);
    let helper_id = format!("{}-helper", input_id);
    let has_helper = helper_text.is_some();

    let current_error = Signal::derive(move || error.get().filter(|msg| !msg.is_empty()));
    let has_error = move || current_error.with(Option::is_some);

    let described_by = {
        let error_id = error_id.clone();
        let helper_id = helper_id.clone();
        move || {
            if has_error() {
                Some(error_id.clone())
            } else if has_helper {
                Some(helper_id.clone())
            } else {
                None
            }
        }
    };

    let helper = helper_text.map(|text| {
        let helper_id = helper_id.clone();
        move || {
            (!has_error()).then(|| {
                view! {
                    <p id=helper_id.clone() class="mt-1 text-sm text-fg-muted">
                        {text.clone()}
                    </p>
                }
            })
        }
    });

    let wrapper_class = format!("{} {}", if full_width { "w-full" } else { "" }, class);

    view! {
        <div class=wrapper_class>
            {label.map(|text| {
                view! {
                    <label for=input_id.clone() class="block text-sm font-medium text-fg mb-1">
                        {text}
                        {required.then(|| view! { <span class="text-status-error-text ml-1">"*"</span> })}
                    </label>
                }
            })}
            <input
                id=input_id.clone()
                class=move || control_classes(has_error())
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(cb) = on_input {
                        cb.call(event_target_value(&ev));
                    }
                }
                {..attributes}
            />
            {move || {
                current_error
                    .get()
                    .map(|msg| {
                        view! {
                            <p id=error_id.clone() class="mt-1 text-sm text-status-error-text" role="alert">
                                {msg}
                            </p>
                        }
                    })
            }}
            {helper}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_wins_over_label() {
        assert_eq!(input_id(Some("login-email"), Some("이메일")), "login-email");
    }

    #[test]
    fn id_is_derived_from_label() {
        assert_eq!(input_id(None, Some("Email Address")), "input-email-address");
        assert_eq!(input_id(None, Some("  Two   Spaces ")), "input-two-spaces");
        assert_eq!(input_id(Some("  "), Some("비밀번호")), "input-비밀번호");
    }

    #[test]
    fn missing_id_and_label_fall_back() {
        assert_eq!(input_id(None, None), "input-field");
    }

    #[test]
    fn error_state_switches_border_classes() {
        assert!(control_classes(true).contains("border-status-error-border"));
        assert!(control_classes(false).contains("border-form-control-border"));
    }
}
