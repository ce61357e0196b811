//! Form Validation
//!
//! Client-side checks run before a form is submitted. Each form has an
//! errors struct with one optional message per field.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static LOOSE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub type FieldError = Option<&'static str>;

fn check_email(email: &str) -> FieldError {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !LOOSE_EMAIL.is_match(email) {
        Some("Please enter a valid email")
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: FieldError,
    pub password: FieldError,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    let password = if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    };
    LoginErrors {
        email: check_email(email),
        password,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: FieldError,
    pub email: FieldError,
    pub password: FieldError,
    pub confirm_password: FieldError,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> SignupErrors {
    let name = if name.trim().is_empty() {
        Some("Name is required")
    } else if name.trim().chars().count() < 2 {
        Some("Name must be at least 2 characters")
    } else {
        None
    };

    let is_mixed = password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());
    let password_error = if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < 8 {
        Some("Password must be at least 8 characters")
    } else if !is_mixed {
        Some("Password must contain uppercase, lowercase, and number")
    } else {
        None
    };

    let confirm_password = if confirm.is_empty() {
        Some("Please confirm your password")
    } else if confirm != password {
        Some("Passwords do not match")
    } else {
        None
    };

    SignupErrors {
        name,
        email: check_email(email),
        password: password_error,
        confirm_password,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: FieldError,
    pub email: FieldError,
    pub subject: FieldError,
    pub message: FieldError,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

pub fn validate_contact(name: &str, email: &str, subject: &str, message: &str) -> ContactErrors {
    let email = if email.trim().is_empty() {
        Some("Email is required")
    } else if !STRICT_EMAIL.is_match(email.trim()) {
        Some("Please enter a valid email address")
    } else {
        None
    };
    let message = if message.trim().is_empty() {
        Some("Message is required")
    } else if message.trim().chars().count() < 10 {
        Some("Message must be at least 10 characters long")
    } else {
        None
    };

    ContactErrors {
        name: name.trim().is_empty().then_some("Name is required"),
        email,
        subject: subject.trim().is_empty().then_some("Subject is required"),
        message,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectErrors {
    pub title: FieldError,
    pub description: FieldError,
    pub repo_url: FieldError,
    pub live_url: FieldError,
}

impl ProjectErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.repo_url.is_none() && self.live_url.is_none()
    }
}

/// Absolute `http(s)` URL with a host
fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// `live_url` is optional; everything else is required
pub fn validate_project(title: &str, description: &str, repo_url: &str, live_url: &str) -> ProjectErrors {
    let repo_url = if repo_url.trim().is_empty() {
        Some("Repository URL is required")
    } else if !is_http_url(repo_url) {
        Some("Please enter a valid URL")
    } else {
        None
    };
    let live_url = (!live_url.trim().is_empty() && !is_http_url(live_url)).then_some("Please enter a valid URL");

    ProjectErrors {
        title: title.trim().is_empty().then_some("Title is required"),
        description: description.trim().is_empty().then_some("Description is required"),
        repo_url,
        live_url,
    }
}

/// Split a comma-separated tag list, dropping blanks and duplicates
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(validate_login("dev@hub.io", "secret").is_empty());

        let errors = validate_login("", "");
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));

        let errors = validate_login("dev@hub", "12345");
        assert_eq!(errors.email, Some("Please enter a valid email"));
        assert_eq!(errors.password, Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_signup_name_and_password_rules() {
        assert!(validate_signup("Ana", "ana@x.dev", "Secret123", "Secret123").is_empty());

        let errors = validate_signup(" a ", "ana@x.dev", "short1A", "short1A");
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.password, Some("Password must be at least 8 characters"));

        let errors = validate_signup("Ana", "ana@x.dev", "alllowercase1", "alllowercase1");
        assert_eq!(errors.password, Some("Password must contain uppercase, lowercase, and number"));
    }

    #[test]
    fn test_signup_confirmation() {
        let errors = validate_signup("Ana", "ana@x.dev", "Secret123", "");
        assert_eq!(errors.confirm_password, Some("Please confirm your password"));

        let errors = validate_signup("Ana", "ana@x.dev", "Secret123", "Secret124");
        assert_eq!(errors.confirm_password, Some("Passwords do not match"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_contact_validation() {
        assert!(validate_contact("Ana", "ana@x.dev", "Hello", "A long enough message").is_empty());

        let errors = validate_contact(" ", "ana @x.dev", "", "too short");
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.subject, Some("Subject is required"));
        assert_eq!(errors.message, Some("Message must be at least 10 characters long"));
    }

    #[test]
    fn test_project_validation() {
        assert!(validate_project("Cache", "LRU", "https://github.com/a/b", "").is_empty());

        let errors = validate_project("", " ", "github.com/a/b", "ftp://x");
        assert_eq!(errors.title, Some("Title is required"));
        assert_eq!(errors.description, Some("Description is required"));
        assert_eq!(errors.repo_url, Some("Please enter a valid URL"));
        assert_eq!(errors.live_url, Some("Please enter a valid URL"));
        assert_eq!(validate_project("a", "b", "", "").repo_url, Some("Repository URL is required"));
    }

    #[test]
    fn test_project_urls_must_parse() {
        let errors = validate_project("t", "d", "https://exa mple .com/<>", "http://");
        assert_eq!(errors.repo_url, Some("Please enter a valid URL"));
        assert_eq!(errors.live_url, Some("Please enter a valid URL"));
        assert_eq!(validate_project("t", "d", "mailto:dev@hub.io", "").repo_url, Some("Please enter a valid URL"));
        assert!(validate_project("t", "d", " https://github.com/a/b ", "https://demo.dev:8080/app").is_empty());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" rust, wasm,,Rust , leptos "), vec!["rust", "wasm", "leptos"]);
        assert!(parse_tags(" , ").is_empty());
    }
}
