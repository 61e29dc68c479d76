//! # fb-config
//!
//! Layered settings: built-in defaults, then an optional `forum.toml`, then
//! `FORUM__SECTION__KEY` environment variables (a `.env` file is honored).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use fb_core::models::{Account, ProviderKind};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "forum.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory holding one JSON file per key (file backend only)
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Console,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, e.g. "info" or "fb_store=debug"
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    /// Provider kinds the CLI will offer for social sign-in
    #[serde(default)]
    pub enabled_providers: Vec<ProviderKind>,
    /// Accounts served by the offline identity provider, keyed by kind
    #[serde(default)]
    pub accounts: BTreeMap<ProviderKind, AccountSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountSettings {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl AccountSettings {
    pub fn to_account(&self, provider: ProviderKind) -> Account {
        Account {
            uid: self.uid.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            photo_url: self.photo_url.clone(),
            provider,
        }
    }
}

impl AuthSettings {
    pub fn is_enabled(&self, kind: ProviderKind) -> bool {
        self.enabled_providers.contains(&kind)
    }
}

impl Settings {
    /// Loads `forum.toml` from the working directory, if present.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!(path = %env_file.display(), "loaded .env");
        }

        let settings: Settings = Config::builder()
            .set_default("storage.backend", "file")?
            .set_default("storage.data_dir", "./data")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "console")?
            .set_default("auth.enabled_providers", vec!["google", "github"])?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("FORUM")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.enabled_providers")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::Invalid("logging.level must not be empty".into()));
        }
        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(SettingsError::Invalid("storage.data_dir must be set".into()));
        }
        Ok(())
    }
}
