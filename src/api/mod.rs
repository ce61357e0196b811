//! REST API Client
//!
//! Frontend bindings to the DevHub backend, organized by domain.
//! Bodies are read as text and decoded with serde_json so a malformed
//! payload is reported as a decode error rather than a transport error.

mod error;
mod ideas;
mod comments;
mod projects;
mod auth;

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;

// Re-export all public items
pub use error::{ApiError, ApiResult};
pub use ideas::IdeaQuery;
pub use auth::{LoginArgs, SignupArgs};
pub use projects::NewProjectArgs;

/// Characters left as-is in query values and path segments (RFC 3986 unreserved)
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query value or path segment
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Shared HTTP client bound to the API base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.api_base.clone(),
        }
    }

    /// Absolute URL for an API path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        with_credentials(self.http.request(method, self.url(path)))
    }

    async fn send(builder: RequestBuilder) -> ApiResult<String> {
        let response = builder.send().await.map_err(ApiError::network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), status.canonical_reason(), &body));
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = Self::send(self.request(Method::GET, path)).await?;
        decode(&body)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::send(self.request(method, path).json(payload)).await?;
        decode(&body)
    }

    /// Send a request whose response body is not needed
    async fn send_empty(&self, method: Method, path: &str) -> ApiResult<()> {
        Self::send(self.request(method, path)).await.map(|_| ())
    }
}

/// Decode a JSON body
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// The backend keeps the login in a session cookie
#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = ApiClient::new(&Config::new("https://api.devhub.dev/", "info"));
        assert_eq!(api.url("/ideas/3/like"), "https://api.devhub.dev/ideas/3/like");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("rust web"), "rust%20web");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("v1.2_beta-~"), "v1.2_beta-~");
    }

    #[test]
    fn test_decode_reports_malformed_json() {
        let result: ApiResult<Vec<u32>> = decode("{not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
