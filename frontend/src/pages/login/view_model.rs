use super::{repository::UserRepository, utils::LoginFormState};
use crate::api::ApiClient;
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct LoginViewModel {
    pub state: RwSignal<LoginFormState>,
    pub submit_enabled: Memo<bool>,
    pub error_visible: Memo<bool>,
    repository: UserRepository,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = UserRepository::new_with_client(Rc::new(api));

    let state = create_rw_signal(LoginFormState::default());
    let submit_enabled = create_memo(move |_| state.with(LoginFormState::submit_enabled));
    let error_visible = create_memo(move |_| state.with(LoginFormState::error_visible));

    LoginViewModel {
        state,
        submit_enabled,
        error_visible,
        repository,
    }
}

impl LoginViewModel {
    pub fn set_username(&self, value: String) {
        self.state.update(|state| state.set_username(value));
    }

    pub fn set_password(&self, value: String) {
        self.state.update(|state| state.set_password(value));
    }

    /// Moves the form into the submitting state and returns the fetch that
    /// settles it, or `None` when submit is not enabled.
    pub fn start_submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        let started = self
            .state
            .try_update(LoginFormState::begin_submit)
            .unwrap_or(false);
        if !started {
            log::debug!("login submit ignored: form is not ready");
            return None;
        }

        log::debug!("login submitted, fetching current user");
        let state = self.state;
        let repo = self.repository.clone();
        Some(async move {
            let result = repo.fetch_current_user().await;
            match &result {
                Ok(user) => log::info!("fetched current user {}", user.name),
                Err(err) => log::warn!("current user fetch failed ({}): {}", err.code, err),
            }
            // The owner may have been disposed while the request was in flight.
            if state.try_update(|s| s.settle(result)).is_none() {
                log::debug!("login form disposed before the fetch settled");
            }
        })
    }

    pub fn submit(&self) {
        if let Some(task) = self.start_submit() {
            spawn_local(task);
        }
    }
}
