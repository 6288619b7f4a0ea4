//! Configuration and endpoint paths for the Servimav API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default API host.
pub const DEFAULT_HOST: &str = "https://api.servimav.com";

/// Timeout applied to every request issued through the client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Login endpoint path.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Registration endpoint path.
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Profile read/replace endpoint path.
pub const PROFILE_PATH: &str = "/api/profile";

/// Partial profile update (multipart) endpoint path.
pub const PROFILE_UPDATE_PATH: &str = "/api/profile/update";

/// Client configuration.
///
/// Both fields are optional: a missing `host` falls back to
/// [`DEFAULT_HOST`], and a missing `token` means no `Authorization`
/// header is injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Bearer credential sent on requests that do not set their own
    /// `Authorization` header. A token resolver supplied at build time
    /// takes precedence over this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Create an empty configuration (default host, no token).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Effective base URL: the configured host or [`DEFAULT_HOST`], with
    /// any trailing slash trimmed so paths join cleanly.
    pub fn base_url(&self) -> String {
        self.host
            .as_deref()
            .unwrap_or(DEFAULT_HOST)
            .trim_end_matches('/')
            .to_string()
    }
}

/// Join a base URL and an absolute endpoint path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults_when_host_unset() {
        assert_eq!(Config::new().base_url(), DEFAULT_HOST);
    }

    #[test]
    fn test_base_url_uses_configured_host() {
        let config = Config::new().host("https://staging.servimav.com");
        assert_eq!(config.base_url(), "https://staging.servimav.com");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = Config::new().host("https://staging.servimav.com/");
        assert_eq!(config.base_url(), "https://staging.servimav.com");
    }

    #[test]
    fn test_endpoint_url_joins_paths() {
        assert_eq!(
            endpoint_url("https://api.servimav.com", LOGIN_PATH),
            "https://api.servimav.com/api/auth/login"
        );
        assert_eq!(
            endpoint_url("https://api.servimav.com/", PROFILE_UPDATE_PATH),
            "https://api.servimav.com/api/profile/update"
        );
    }
}
