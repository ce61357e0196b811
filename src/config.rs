//! Build-time Configuration
//!
//! Values are baked in at compile time via environment variables.

use log::LevelFilter;

/// API base used when `DEVHUB_API_URL` is not set at build time
const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// REST API base URL without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("DEVHUB_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("DEVHUB_LOG_LEVEL").unwrap_or("info"),
        )
    }

    pub fn new(api_url: &str, log_level: &str) -> Self {
        Self {
            api_base: normalize_base(api_url),
            log_level: console_logger::parse_level(log_level),
        }
    }
}

/// Strip surrounding whitespace and any trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
