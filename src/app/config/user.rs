use crate::api::Endpoints;
use crate::app::keys::KeyConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";
pub const MIN_POLL_INTERVAL_MS: u64 = 100;
pub const MAX_VOLUME_STEP: i32 = 100;
/// Environment override for the linked flag, read after `--authorized`
pub const AUTH_ENV_VAR: &str = "SPOTIFY_AUTHORIZED";

/// Whether the backend session is linked to a streaming account.
///
/// Only the boolean `true` or the exact string `"true"` count as linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthFlag {
    Bool(bool),
    Text(String),
}

impl Default for AuthFlag {
    fn default() -> Self {
        AuthFlag::Bool(false)
    }
}

impl AuthFlag {
    pub fn is_authorized(&self) -> bool {
        match self {
            AuthFlag::Bool(b) => *b,
            AuthFlag::Text(s) => s == "true",
        }
    }
}

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Ignore poll responses that arrive after a newer one
    #[serde(default)]
    pub strict_ordering: bool,
    #[serde(default = "default_volume_step")]
    pub volume_step: i32,
    #[serde(default)]
    pub authorized: AuthFlag,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub keys: KeyConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_volume_step() -> i32 {
    10
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            strict_ordering: false,
            volume_step: default_volume_step(),
            authorized: AuthFlag::default(),
            endpoints: Endpoints::default(),
            keys: KeyConfig::default(),
        }
    }
}

impl UserConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Volume change per key press, kept within 1..=100
    pub fn volume_delta(&self) -> i32 {
        self.volume_step.clamp(1, MAX_VOLUME_STEP)
    }

    /// Linked flag from the first source that sets it:
    /// `--authorized`, then `SPOTIFY_AUTHORIZED`, then `authorized` in the file.
    pub fn resolve_authorized(&self, cli: Option<&str>, env: Option<&str>) -> bool {
        match cli.or(env) {
            Some(text) => AuthFlag::Text(text.to_string()).is_authorized(),
            None => self.authorized.is_authorized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked_in_file() -> UserConfig {
        UserConfig {
            authorized: AuthFlag::Bool(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_flag_used_without_overrides() {
        assert!(linked_in_file().resolve_authorized(None, None));
        assert!(!UserConfig::default().resolve_authorized(None, None));
    }

    #[test]
    fn test_env_overrides_config() {
        assert!(!linked_in_file().resolve_authorized(None, Some("false")));
        assert!(UserConfig::default().resolve_authorized(None, Some("true")));
        // Anything but the exact string stays unlinked
        assert!(!UserConfig::default().resolve_authorized(None, Some("1")));
    }

    #[test]
    fn test_cli_overrides_env_and_config() {
        let config = linked_in_file();
        assert!(!config.resolve_authorized(Some("false"), Some("true")));
        assert!(UserConfig::default().resolve_authorized(Some("true"), Some("false")));
    }

    #[test]
    fn test_volume_delta_is_clamped() {
        let step = |volume_step| UserConfig {
            volume_step,
            ..Default::default()
        };
        assert_eq!(step(10).volume_delta(), 10);
        assert_eq!(step(0).volume_delta(), 1);
        assert_eq!(step(-5).volume_delta(), 1);
        assert_eq!(step(i32::MIN).volume_delta(), 1);
        assert_eq!(step(i32::MAX).volume_delta(), MAX_VOLUME_STEP);
    }
}
