use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use wonder_finance_core::models::settings::{Settings, DEFAULT_TIMEOUT, DEFAULT_TRANSACTION_LIMIT};

pub const ENV_BACKEND_URL: &str = "WONDER_BACKEND_URL";
pub const ENV_SESSION_FILE: &str = "WONDER_SESSION_FILE";
pub const ENV_CURRENCY: &str = "WONDER_CURRENCY";
pub const ENV_TIMEOUT_MS: &str = "WONDER_REQUEST_TIMEOUT_MS";
pub const ENV_TRANSACTION_LIMIT: &str = "WONDER_TRANSACTION_LIMIT";

const DEFAULT_SESSION_FILE: &str = "./session.json";

/// Process configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub session_file: PathBuf,
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Call before anything reads the environment, logging included.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Load a specific env file. Variables already set are left alone.
pub fn load_dotenv_from(path: &Path) -> anyhow::Result<()> {
    dotenvy::from_path(path).with_context(|| format!("Failed to load {}", path.display()))
}

impl Config {
    /// Read the process environment; `.env` must already be loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = Settings::default();
        settings.backend_url = lookup(ENV_BACKEND_URL).filter(|u| !u.trim().is_empty());

        if let Some(currency) = lookup(ENV_CURRENCY) {
            settings
                .set_display_currency(&currency)
                .with_context(|| format!("Invalid {ENV_CURRENCY}"))?;
        }

        settings.request_timeout = match lookup(ENV_TIMEOUT_MS) {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid {ENV_TIMEOUT_MS}: {raw}"))?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        settings.transaction_limit = match lookup(ENV_TRANSACTION_LIMIT) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_TRANSACTION_LIMIT}: {raw}"))?,
            None => DEFAULT_TRANSACTION_LIMIT,
        };

        let session_file = lookup(ENV_SESSION_FILE)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string())
            .into();

        Ok(Self {
            settings,
            session_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.settings.backend_url.is_none());
        assert_eq!(config.settings.display_currency, "INR");
        assert_eq!(config.settings.request_timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.settings.transaction_limit, DEFAULT_TRANSACTION_LIMIT);
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BACKEND_URL, "http://localhost:8000/"),
            (ENV_CURRENCY, "usd"),
            (ENV_TIMEOUT_MS, "1500"),
            (ENV_TRANSACTION_LIMIT, "25"),
            (ENV_SESSION_FILE, "/tmp/s.json"),
        ]))
        .unwrap();
        assert_eq!(config.settings.base_url().unwrap(), "http://localhost:8000");
        assert_eq!(config.settings.display_currency, "USD");
        assert_eq!(config.settings.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.settings.transaction_limit, 25);
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn blank_backend_url_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[(ENV_BACKEND_URL, "  ")])).unwrap();
        assert!(config.settings.backend_url.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(Config::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[(ENV_TRANSACTION_LIMIT, "-1")])).is_err());
    }

    #[test]
    fn rejects_bad_currency() {
        assert!(Config::from_lookup(lookup(&[(ENV_CURRENCY, "RUPEES")])).is_err());
    }
}
