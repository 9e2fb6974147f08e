use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod user;

pub use user::{AuthFlag, UserConfig, AUTH_ENV_VAR};

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("spotify-kiosk")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_theme_path() -> PathBuf {
        Self::get_config_dir().join("theme.toml")
    }

    /// Load `config.toml`, writing the defaults if it doesn't exist yet.
    ///
    /// A file that fails to parse is reported and replaced by defaults in memory only.
    pub fn load_from(path: &Path) -> Result<UserConfig> {
        if !path.exists() {
            let config = UserConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, Self::default_toml()?)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "Created default config");
            return Ok(config);
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Ok(UserConfig::default())
            }
        }
    }

    pub fn default_toml() -> Result<String> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}
