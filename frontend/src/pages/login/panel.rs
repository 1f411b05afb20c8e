use crate::{
    api::LoginFormData,
    components::card::{Card, CardPadding, CardVariant},
    pages::login::{
        components::form::LoginForm,
        view_model::{use_login_view_model, LoginViewModel},
    },
    utils::navigation::REGISTER_ROUTE,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let page = use_login_view_model();

    view! { <LoginPanelView vm=page.vm on_submit=page.on_submit /> }
}

#[component]
fn LoginPanelView(
    vm: LoginViewModel,
    #[prop(into)] on_submit: Callback<LoginFormData>,
) -> impl IntoView {
    view! {
        <Title text="로그인 | LogWatch Admin" />
        <div class="space-y-6">
            <div class="text-center">
                <h1 class="text-3xl font-bold text-fg">"LogWatch Admin"</h1>
                <p class="mt-2 text-sm text-fg-muted">
                    "로그 모니터링 대시보드에 로그인하세요"
                </p>
            </div>

            <Card variant=CardVariant::Elevated padding=CardPadding::Lg>
                <div class="mb-6">
                    <h2 class="text-xl font-semibold text-fg">"로그인"</h2>
                </div>
                <LoginForm on_submit=on_submit loading=vm.loading() error=vm.error() />
            </Card>

            <Card variant=CardVariant::Default padding=CardPadding::Md>
                <p class="text-center text-sm text-fg-muted">
                    "아직 계정이 없으신가요? "
                    <a
                        href=REGISTER_ROUTE
                        class="font-medium text-action-link hover:text-action-link-hover hover:underline"
                    >
                        "회원가입"
                    </a>
                </p>
            </Card>
        </div>
    }
}
