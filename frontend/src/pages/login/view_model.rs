use super::repository::LoginRepository;
use crate::api::{ApiClient, ApiError, AuthToken, LoginFormData, LOGIN_FAILED_MESSAGE};
use crate::utils::{
    navigation::{Navigator, WindowNavigator, HOME_ROUTE},
    storage::{BrowserTokenStore, TokenStore},
};
use leptos::*;
use std::future::Future;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failure(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Settled(Settlement),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Settled(Settlement::Failure(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Page-owned submission state. Only one attempt may be in flight.
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub state: RwSignal<SubmissionState>,
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SubmissionState::Idle),
        }
    }

    /// Moves to `Submitting`. Returns `false`, leaving the state alone, when
    /// an attempt is already outstanding.
    pub fn begin(&self) -> bool {
        if self.state.with_untracked(SubmissionState::is_submitting) {
            return false;
        }
        self.state.set(SubmissionState::Submitting);
        true
    }

    pub fn settle(&self, settlement: Settlement) {
        self.state.set(SubmissionState::Settled(settlement));
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SubmissionState::is_submitting))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    /// Starts one attempt and returns the future that drives it to
    /// settlement, or `None` while another attempt is pending.
    pub fn start<S, N>(
        &self,
        flow: Rc<LoginFlow<S, N>>,
        credentials: LoginFormData,
    ) -> Option<impl Future<Output = ()>>
    where
        S: TokenStore + 'static,
        N: Navigator + 'static,
    {
        if !self.begin() {
            log::debug!("Login already in flight, ignoring submit");
            return None;
        }
        let vm = *self;
        Some(async move {
            let settlement = flow.run(credentials).await;
            vm.settle(settlement);
        })
    }
}

/// One login exchange: request, token persistence, redirect.
pub struct LoginFlow<S, N> {
    repository: LoginRepository,
    store: S,
    navigator: N,
}

impl<S: TokenStore, N: Navigator> LoginFlow<S, N> {
    pub fn new(repository: LoginRepository, store: S, navigator: N) -> Self {
        Self {
            repository,
            store,
            navigator,
        }
    }

    pub async fn run(&self, credentials: LoginFormData) -> Settlement {
        let response = match self.repository.login(&credentials).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Login failed [{}]: {}", err.code, err);
                return Settlement::Failure(err.into());
            }
        };

        if !response.success {
            log::info!("Login rejected by server");
            return Settlement::Failure(
                response
                    .message()
                    .unwrap_or(LOGIN_FAILED_MESSAGE)
                    .to_string(),
            );
        }

        if let Err(err) = self.persist_token(response.token.as_deref()) {
            log::warn!("Login succeeded but token was not stored [{}]", err.code);
            return Settlement::Failure(err.into());
        }

        log::info!("Login succeeded, redirecting to {}", HOME_ROUTE);
        self.navigator.navigate(HOME_ROUTE);
        Settlement::Success
    }

    fn persist_token(&self, token: Option<&str>) -> Result<(), ApiError> {
        match token {
            Some(raw) => {
                let token = AuthToken::parse(raw)?;
                self.store.store_token(&token)
            }
            None => Ok(()),
        }
    }
}

pub struct LoginPageModel {
    pub vm: LoginViewModel,
    pub on_submit: Callback<LoginFormData>,
}

pub fn use_login_view_model() -> LoginPageModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let flow = Rc::new(LoginFlow::new(
        repository,
        BrowserTokenStore,
        WindowNavigator,
    ));

    let vm = LoginViewModel::new();
    let on_submit = Callback::new(move |credentials: LoginFormData| {
        if let Some(task) = vm.start(flow.clone(), credentials) {
            spawn_local(task);
        }
    });

    LoginPageModel { vm, on_submit }
}
