//! Application Context
//!
//! Session state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiResult, LoginArgs, SignupArgs};
use crate::models::User;

/// Current-user signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Logged-in user, `None` when anonymous - read
    pub current_user: ReadSignal<Option<User>>,
    /// Logged-in user - write
    set_current_user: WriteSignal<Option<User>>,
    /// Whether the session status has been fetched once
    pub checked: ReadSignal<bool>,
    set_checked: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (current_user, set_current_user) = signal(None::<User>);
        let (checked, set_checked) = signal(false);
        Self {
            current_user,
            set_current_user,
            checked,
            set_checked,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.with(Option::is_some)
    }

    /// Ask the backend who owns the session cookie
    pub fn refresh(&self, api: &ApiClient) {
        let api = api.clone();
        let ctx = *self;
        spawn_local(async move {
            match api.auth_status().await {
                Ok(user) => {
                    log::info!(
                        "Session: {}",
                        user.as_ref().map(|u| u.display_name()).unwrap_or_else(|| "anonymous".into())
                    );
                    ctx.set_current_user.set(user);
                }
                Err(e) => {
                    log::warn!("Failed to fetch session status: {}", e);
                    ctx.set_current_user.set(None);
                }
            }
            ctx.set_checked.set(true);
        });
    }

    pub async fn login(&self, api: &ApiClient, email: &str, password: &str) -> ApiResult<User> {
        let user = api.login(&LoginArgs { email, password }).await?;
        log::info!("Logged in as {}", user.display_name());
        self.set_current_user.set(Some(user.clone()));
        Ok(user)
    }

    pub async fn signup(&self, api: &ApiClient, name: &str, email: &str, password: &str) -> ApiResult<User> {
        let user = api.signup(&SignupArgs { name, email, password }).await?;
        log::info!("Account created for {}", user.display_name());
        self.set_current_user.set(Some(user.clone()));
        Ok(user)
    }

    /// Forget the user locally even if the backend call fails
    pub fn logout(&self, api: &ApiClient) {
        let api = api.clone();
        self.set_current_user.set(None);
        spawn_local(async move {
            if let Err(e) = api.logout().await {
                log::warn!("Logout request failed: {}", e);
            }
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
