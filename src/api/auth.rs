//! Auth Endpoints
//!
//! The backend tracks the login in a session cookie; these calls only
//! report who the current user is.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::User;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
}

#[derive(Deserialize)]
struct AuthStatus {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    user: Option<User>,
}

impl AuthStatus {
    fn into_user(self) -> Option<User> {
        if self.authenticated {
            self.user
        } else {
            None
        }
    }
}

impl ApiClient {
    pub async fn login(&self, args: &LoginArgs<'_>) -> ApiResult<User> {
        let resp: AuthResponse = self.send_json(Method::POST, "/login", args).await?;
        Ok(resp.user)
    }

    pub async fn signup(&self, args: &SignupArgs<'_>) -> ApiResult<User> {
        let resp: AuthResponse = self.send_json(Method::POST, "/signup", args).await?;
        Ok(resp.user)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.send_empty(Method::POST, "/auth/logout").await
    }

    /// Current session user, if any
    pub async fn auth_status(&self) -> ApiResult<Option<User>> {
        let status: AuthStatus = self.get_json("/auth/status").await?;
        Ok(status.into_user())
    }

    /// Backend route that starts the Google OAuth redirect
    pub fn google_login_url(&self) -> String {
        self.url("/auth/google")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    #[test]
    fn test_auth_status_anonymous() {
        let status: AuthStatus = decode(r#"{"status": 200, "authenticated": false, "user": null}"#).unwrap();
        assert!(status.into_user().is_none());
    }

    #[test]
    fn test_auth_status_logged_in() {
        let status: AuthStatus = decode(
            r#"{"status": 200, "authenticated": true,
                "user": {"id": "abc", "email": "a@b.co", "name": "Ana", "github_username": null}}"#,
        )
        .unwrap();
        let user = status.into_user().unwrap();
        assert_eq!(user.id, "abc");
        assert_eq!(user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_login_response_without_name() {
        let resp: AuthResponse = decode(
            r#"{"status": 200, "message": "Login successful", "user": {"id": "u", "email": "e@x.io"},
                "redirect_url": "/ideas"}"#,
        )
        .unwrap();
        assert!(resp.user.name.is_none());
    }

    #[test]
    fn test_signup_payload() {
        let args = SignupArgs { name: "Ana", email: "a@b.co", password: "Secret123" };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"name":"Ana","email":"a@b.co","password":"Secret123"}"#);
    }
}
