//! Client configuration with environment overrides.

use std::time::Duration;

use crate::{error::FplError, Result, BASE_URL_ENV_VAR, TIMEOUT_ENV_VAR};

/// Public Fantasy Premier League host.
pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, no trailing slash. Endpoint paths are appended as-is.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("fpl-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Point the client at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults, overridden by `FPL_BASE_URL` and `FPL_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(secs) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                FplError::invalid_argument(format!(
                    "{TIMEOUT_ENV_VAR} must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("fpl-client/"));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080//");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_lookup_without_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_with_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV_VAR, "http://localhost:9000/"),
            (TIMEOUT_ENV_VAR, "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_from_lookup_blank_base_url_is_ignored() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(BASE_URL_ENV_VAR, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV_VAR, "soon")]));
        assert!(matches!(result, Err(FplError::InvalidArgument { .. })));
    }
}
