use std::time::Duration;

use pay_now_core::LOGIN_PATH;

pub const ENV_MOCK_LATENCY_MS: &str = "PAY_NOW_MOCK_LATENCY_MS";
pub const ENV_ENDPOINT: &str = "PAY_NOW_ENDPOINT";
pub const ENV_HTTP_TIMEOUT_MS: &str = "PAY_NOW_HTTP_TIMEOUT_MS";
pub const ENV_LOGIN_PATH: &str = "PAY_NOW_LOGIN_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayNowConfig {
    pub mock_latency_ms: u64,
    pub endpoint: Option<String>,
    pub http_timeout_ms: u64,
    pub login_path: String,
}

impl Default for PayNowConfig {
    fn default() -> Self {
        Self {
            mock_latency_ms: 1_000,
            endpoint: None,
            http_timeout_ms: 15_000,
            login_path: LOGIN_PATH.to_owned(),
        }
    }
}

impl PayNowConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let millis = |key: &str, fallback: u64| match get(key) {
            None => fallback,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(key, value = %raw, error = %e, "invalid duration, using default");
                fallback
            }),
        };

        Self {
            mock_latency_ms: millis(ENV_MOCK_LATENCY_MS, defaults.mock_latency_ms),
            endpoint: get(ENV_ENDPOINT),
            http_timeout_ms: millis(ENV_HTTP_TIMEOUT_MS, defaults.http_timeout_ms),
            login_path: get(ENV_LOGIN_PATH).unwrap_or(defaults.login_path),
        }
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(PayNowConfig::from_lookup(lookup(&[])), PayNowConfig::default());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let cfg = PayNowConfig::from_lookup(lookup(&[
            (ENV_MOCK_LATENCY_MS, " 250 "),
            (ENV_ENDPOINT, "http://127.0.0.1:8080/payments"),
            (ENV_HTTP_TIMEOUT_MS, "5000"),
            (ENV_LOGIN_PATH, "/sign-in"),
        ]));
        assert_eq!(cfg.mock_latency(), Duration::from_millis(250));
        assert_eq!(cfg.endpoint.as_deref(), Some("http://127.0.0.1:8080/payments"));
        assert_eq!(cfg.http_timeout_ms, 5_000);
        assert_eq!(cfg.login_path, "/sign-in");
    }

    #[test]
    fn garbage_numbers_fall_back() {
        let cfg = PayNowConfig::from_lookup(lookup(&[
            (ENV_MOCK_LATENCY_MS, "soon"),
            (ENV_ENDPOINT, "   "),
        ]));
        assert_eq!(cfg.mock_latency_ms, 1_000);
        assert_eq!(cfg.endpoint, None);
    }
}
