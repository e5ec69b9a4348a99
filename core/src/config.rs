//! Client configuration. The API host is the only setting.

use crate::error::ConfigError;
use crate::uri::ApiHost;

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "USERS_API_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Read `USERS_API_BASE_URL`, falling back to the public reqres host.
    pub fn from_env() -> Self {
        std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    pub fn api_host(&self) -> Result<ApiHost, ConfigError> {
        ApiHost::parse(self.api_base_url.trim())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_base_url() {
        temp_env::with_var(API_BASE_URL_ENV, Some("http://127.0.0.1:8080"), || {
            let config = ClientConfig::from_env();
            assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
            assert_eq!(config.api_host().unwrap().port(), 8080);
        });
    }

    #[test]
    fn from_env_defaults_when_unset_or_blank() {
        temp_env::with_var_unset(API_BASE_URL_ENV, || {
            assert_eq!(ClientConfig::from_env(), ClientConfig::default());
        });
        temp_env::with_var(API_BASE_URL_ENV, Some("  "), || {
            assert_eq!(ClientConfig::from_env().api_base_url, DEFAULT_API_BASE_URL);
        });
    }

    #[test]
    fn default_host_is_reqres() {
        let host = ClientConfig::default().api_host().unwrap();
        assert_eq!(host.hostname(), "reqres.in");
        assert_eq!(host.scheme(), "https");
    }
}
