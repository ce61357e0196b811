//! API Errors
//!
//! Transport, status and decode failures are all shown to the user the same
//! way; the variants only exist so logs can tell them apart.

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("API error: {}", status_summary(*code, reason, detail.as_deref()))]
    Status {
        code: u16,
        reason: String,
        /// `detail` (or `message`) field of a JSON error body
        detail: Option<String>,
    },
    /// Body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn from_status(code: u16, reason: Option<&str>, body: &str) -> Self {
        ApiError::Status {
            code,
            reason: reason.unwrap_or("").to_string(),
            detail: extract_detail(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { code: 401, .. })
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// `401 Unauthorized (detail)`, leaving out the parts that are missing
fn status_summary(code: u16, reason: &str, detail: Option<&str>) -> String {
    let mut summary = code.to_string();
    if !reason.is_empty() {
        summary.push(' ');
        summary.push_str(reason);
    }
    if let Some(detail) = detail {
        summary.push_str(&format!(" ({})", detail));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_detail() {
        let err = ApiError::from_status(
            401,
            Some("Unauthorized"),
            r#"{"status": 401, "detail": "Authentication required"}"#,
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "API error: 401 Unauthorized (Authentication required)");
    }

    #[test]
    fn test_status_display_without_json_body() {
        let err = ApiError::from_status(502, Some("Bad Gateway"), "<html>oops</html>");
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_message_used_when_detail_missing() {
        let err = ApiError::from_status(400, None, r#"{"message": "bad input"}"#);
        assert_eq!(err.to_string(), "API error: 400 (bad input)");
    }

    #[test]
    fn test_network_and_decode_display() {
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
        let err: Box<dyn std::error::Error> = Box::new(ApiError::Decode("eof".into()));
        assert_eq!(err.to_string(), "Invalid response: eof");
    }
}
