//! Login and Sign-up Pages
//!
//! Both forms validate locally first, then call the backend through the
//! auth context. On success a notice is shown and the app moves to the
//! explorer after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiError};
use crate::components::FormField;
use crate::context::use_auth;
use crate::router::{use_router, Link, Route, Router};
use crate::validation::{validate_login, validate_signup, LoginErrors, SignupErrors};

/// Delay between the success notice and the redirect
const REDIRECT_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Success { title: &'static str, detail: &'static str },
    Failure { title: &'static str, detail: String },
}

fn failure_detail(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { detail: Some(detail), .. } => detail.clone(),
        _ => fallback.to_string(),
    }
}

fn redirect_to_explorer(router: Router) {
    spawn_local(async move {
        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        router.navigate(Route::Ideas);
    });
}

#[component]
fn NoticeBanner(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| match n {
            Notice::Success { title, detail } => view! {
                <div class="notice success" role="status">
                    <strong>{title}</strong>
                    <p>{detail}</p>
                </div>
            }
            .into_any(),
            Notice::Failure { title, detail } => view! {
                <div class="notice failure" role="alert">
                    <strong>{title}</strong>
                    <p>{detail}</p>
                </div>
            }
            .into_any(),
        })
    }
}

/// Hands off to the backend's OAuth redirect
#[component]
fn GoogleButton(#[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let api = use_api();
    let start = move |_| {
        let url = api.google_login_url();
        log::info!("Redirecting to Google sign-in");
        if let Err(e) = window().location().set_href(&url) {
            log::error!("Failed to redirect to {}: {:?}", url, e);
        }
    };

    view! {
        <button type="button" class="btn btn-outline btn-block" disabled=move || disabled.get() on:click=start>
            "Continue with Google"
        </button>
        <div class="divider"><span>"Or continue with email"</span></div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        let checked = validate_login(&email, &password);
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid || loading.get() {
            return;
        }

        set_loading.set(true);
        set_notice.set(None);
        let api = api.clone();
        spawn_local(async move {
            match auth.login(&api, email.trim(), &password).await {
                Ok(_) => {
                    set_notice.set(Some(Notice::Success {
                        title: "Login Successful!",
                        detail: "Welcome back! Redirecting you now...",
                    }));
                    redirect_to_explorer(router);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_notice.set(Some(Notice::Failure {
                        title: "Login Failed",
                        detail: failure_detail(&e, "Invalid credentials. Please try again."),
                    }));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="muted">"Sign in to your account"</p>
                <NoticeBanner notice=notice/>
                <GoogleButton disabled=loading/>
                <form on:submit=submit novalidate=true>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        error=Signal::derive(move || errors.get().password)
                    />
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <Link to=Route::SignUp>"Sign up"</Link>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupErrors::default());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name, email, password) = (name.get(), email.get(), password.get());
        let checked = validate_signup(&name, &email, &password, &confirm.get());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid || loading.get() {
            return;
        }

        set_loading.set(true);
        set_notice.set(None);
        let api = api.clone();
        spawn_local(async move {
            match auth.signup(&api, name.trim(), email.trim(), &password).await {
                Ok(_) => {
                    set_notice.set(Some(Notice::Success {
                        title: "Account Created Successfully!",
                        detail: "Welcome to DevHub! Redirecting you now...",
                    }));
                    redirect_to_explorer(router);
                }
                Err(e) => {
                    log::warn!("Sign-up failed: {}", e);
                    set_notice.set(Some(Notice::Failure {
                        title: "Signup Failed",
                        detail: failure_detail(&e, "Something went wrong. Please try again."),
                    }));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join DevHub"</h1>
                <p class="muted">"Create your account to get started"</p>
                <NoticeBanner notice=notice/>
                <GoogleButton disabled=loading/>
                <form on:submit=submit novalidate=true>
                    <FormField
                        id="name"
                        label="Full Name"
                        placeholder="Enter your full name"
                        value=name
                        error=Signal::derive(move || errors.get().name)
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Create a strong password"
                        value=password
                        error=Signal::derive(move || errors.get().password)
                    />
                    <FormField
                        id="confirm-password"
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                        value=confirm
                        error=Signal::derive(move || errors.get().confirm_password)
                    />
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <Link to=Route::Login>"Sign in"</Link>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_detail_prefers_backend_message() {
        let err = ApiError::Status {
            code: 401,
            reason: "Unauthorized".into(),
            detail: Some("Invalid email or password".into()),
        };
        assert_eq!(failure_detail(&err, "fallback"), "Invalid email or password");
        assert_eq!(failure_detail(&ApiError::Network("down".into()), "fallback"), "fallback");
    }
}
