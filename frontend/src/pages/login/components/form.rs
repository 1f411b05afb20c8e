use crate::{
    api::LoginFormData,
    components::{
        button::{Button, ButtonSize, ButtonVariant},
        error::ErrorBanner,
        input::Input,
    },
    pages::login::utils::{self, FieldErrors, LoginField},
    utils::navigation::FORGOT_PASSWORD_ROUTE,
};
use leptos::{ev::SubmitEvent, *};

/// Credential input owned by the form. Lives for one mounted form instance.
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub remember_me: RwSignal<bool>,
    pub errors: RwSignal<FieldErrors>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            remember_me: create_rw_signal(false),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }

    pub fn snapshot(&self) -> LoginFormData {
        LoginFormData {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            remember_me: self.remember_me.get_untracked(),
        }
    }

    pub fn set_email(&self, value: String) {
        self.email.set(value);
        self.clear_error(LoginField::Email);
    }

    pub fn set_password(&self, value: String) {
        self.password.set(value);
        self.clear_error(LoginField::Password);
    }

    pub fn set_remember_me(&self, value: bool) {
        self.remember_me.set(value);
        self.clear_error(LoginField::RememberMe);
    }

    fn clear_error(&self, field: LoginField) {
        if self
            .errors
            .with_untracked(|errors| errors.get(field).is_some())
        {
            self.errors.update(|errors| {
                errors.clear(field);
            });
        }
    }

    pub fn error_for(&self, field: LoginField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Recomputes the error map from the current input and returns the data
    /// only when every field passed.
    pub fn validate(&self) -> Option<LoginFormData> {
        let data = self.snapshot();
        let errors = utils::validate_credentials(&data);
        let valid = errors.is_empty();
        self.errors.set(errors);
        valid.then_some(data)
    }

    /// Validates and hands the data to `on_submit`. Returns whether the
    /// callback ran.
    pub fn submit(&self, on_submit: &Callback<LoginFormData>) -> bool {
        match self.validate() {
            Some(data) => {
                on_submit.call(data);
                true
            }
            None => false,
        }
    }
}

#[component]
pub fn LoginForm(
    #[prop(into)] on_submit: Callback<LoginFormData>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let form = LoginFormState::new();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        form.submit(&on_submit);
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=handle_submit>
            <ErrorBanner error=error />

            <Input
                id="login-email"
                label="이메일"
                full_width=true
                required=true
                value=form.email
                error=form.error_for(LoginField::Email)
                disabled=loading
                on_input=move |value: String| form.set_email(value)
                attr:type="email"
                attr:name="email"
                attr:placeholder="example@email.com"
                attr:autocomplete="email"
            />

            <Input
                id="login-password"
                label="비밀번호"
                full_width=true
                required=true
                value=form.password
                error=form.error_for(LoginField::Password)
                disabled=loading
                on_input=move |value: String| form.set_password(value)
                attr:type="password"
                attr:name="password"
                attr:placeholder="6자 이상 입력해주세요"
                attr:autocomplete="current-password"
            />

            <div class="flex items-center">
                <input
                    id="remember-me"
                    name="remember-me"
                    type="checkbox"
                    class="h-4 w-4 rounded border-form-control-border text-action-primary-bg focus:ring-action-primary-focus"
                    prop:checked=move || form.remember_me.get()
                    disabled=move || loading.get()
                    on:change=move |ev| form.set_remember_me(event_target_checked(&ev))
                />
                <label for="remember-me" class="ml-2 block text-sm text-fg">
                    "로그인 상태 유지"
                </label>
            </div>

            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Lg
                full_width=true
                loading=loading
                attr:type="submit"
            >
                "로그인"
            </Button>

            <div class="text-center text-sm">
                <a
                    href=FORGOT_PASSWORD_ROUTE
                    class="text-action-link hover:text-action-link-hover hover:underline"
                >
                    "비밀번호를 잊으셨나요?"
                </a>
            </div>
        </form>
    }
}
