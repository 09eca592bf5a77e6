use crate::error::Result;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

// I keep one process-wide config, built on first use from defaults plus the environment
pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

// The node serves wallet requests one port above its peer listen port (1625)
static DEFAULT_NODE_URL: &str = "http://127.0.0.1:1626";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

// Environment variables I read on startup and again after loading a file
const NODE_URL_KEY: &str = "WALLET_NODE_URL";
const REQUEST_TIMEOUT_KEY: &str = "WALLET_REQUEST_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub node_url: String,
    pub request_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            node_url: String::from(DEFAULT_NODE_URL),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

// Only the keys present in a config file override the current values
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    node_url: Option<String>,
    request_timeout_ms: Option<u64>,
}

// The settings sit behind a lock so the CLI can adjust them after parsing flags
pub struct Config {
    inner: RwLock<Settings>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults, overridden by the process environment.
    pub fn new() -> Config {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, |key| env::var(key).ok());
        Config::from_settings(settings)
    }

    pub fn from_settings(settings: Settings) -> Config {
        Config {
            inner: RwLock::new(settings),
        }
    }

    /// Merge a TOML file into the current settings. Environment variables
    /// still win over file values.
    pub fn load_file(&self, path: &Path) -> Result<()> {
        // I let an unreadable file surface as an I/O error, a bad one as a config error
        let text = fs::read_to_string(path)?;
        let file: FileSettings = toml::from_str(&text)?;

        // A poisoned lock still holds usable settings, so I keep going with them
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(node_url) = file.node_url {
            inner.node_url = node_url;
        }
        if let Some(timeout) = file.request_timeout_ms {
            inner.request_timeout_ms = timeout;
        }
        // The environment is applied again so it keeps priority over the file
        apply_overrides(&mut inner, |key| env::var(key).ok());
        log::debug!("Loaded configuration from {}", path.display());
        Ok(())
    }

    pub fn get_node_url(&self) -> String {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.node_url.clone()
    }

    pub fn set_node_url(&self, url: String) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.node_url = url;
    }

    pub fn get_request_timeout(&self) -> Duration {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Duration::from_millis(inner.request_timeout_ms)
    }

    pub fn set_request_timeout(&self, timeout: Duration) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.request_timeout_ms = timeout.as_millis().min(u64::MAX as u128) as u64;
    }

}

// I take a lookup function instead of reading env directly so tests never touch the process env
fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(NODE_URL_KEY) {
        settings.node_url = url;
    }
    if let Some(raw) = lookup(REQUEST_TIMEOUT_KEY) {
        match raw.parse::<u64>() {
            Ok(timeout) => settings.request_timeout_ms = timeout,
            // A typo in the timeout should not stop the wallet, so I warn and keep the old value
            Err(e) => log::warn!("Ignoring {REQUEST_TIMEOUT_KEY}={raw:?}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.node_url, "http://127.0.0.1:1626");
        assert_eq!(settings.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_overrides_apply() {
        let mut settings = Settings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[
                (NODE_URL_KEY, "http://node:9000"),
                (REQUEST_TIMEOUT_KEY, "250"),
            ]),
        );
        assert_eq!(settings.node_url, "http://node:9000");
        assert_eq!(settings.request_timeout_ms, 250);
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, lookup_from(&[(REQUEST_TIMEOUT_KEY, "soon")]));
        assert_eq!(settings.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_setters() {
        let config = Config::from_settings(Settings::default());
        config.set_node_url("http://example:1".to_string());
        config.set_request_timeout(Duration::from_millis(42));
        assert_eq!(config.get_node_url(), "http://example:1");
        assert_eq!(config.get_request_timeout(), Duration::from_millis(42));
    }

    #[test]
    fn test_load_file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "node = \"http://typo:1\"").unwrap();

        let config = Config::from_settings(Settings::default());
        let result = config.load_file(file.path());
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = Config::from_settings(Settings::default());
        let result = config.load_file(Path::new("/nonexistent/wallet.toml"));
        assert!(matches!(result, Err(WalletError::Io(_))));
        // The current settings are untouched after a failed load
        assert_eq!(config.get_node_url(), "http://127.0.0.1:1626");
    }
}
