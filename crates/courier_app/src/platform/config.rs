use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use courier_engine::SubmitSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "courier.ron";
const CONFIG_PATH_ENV: &str = "COURIER_CONFIG";

/// Settings read from `courier.ron`. Every field has a default, so a partial
/// file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = SubmitSettings::default();
        Self {
            endpoint: settings.endpoint,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Where the loaded config came from. Logging is not initialized until the
/// config has been read, so load problems are carried here and logged by the
/// caller instead of at the failure site.
pub(crate) enum ConfigSource {
    /// Parsed from the file at this path.
    File(PathBuf),
    /// No config file present.
    Defaults,
    /// A file was there but could not be used; the note says why.
    DefaultsAfterError(PathBuf, String),
}

pub(crate) struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Loads the config from `courier.ron` in the working directory, or from the
/// path in `COURIER_CONFIG` when that is set.
pub(crate) fn load() -> LoadedConfig {
    load_from(&config_path(std::env::var_os(CONFIG_PATH_ENV)))
}

fn config_path(env_override: Option<OsString>) -> PathBuf {
    match env_override {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(CONFIG_FILENAME),
    }
}

fn load_from(path: &Path) -> LoadedConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::Defaults,
            };
        }
        Err(err) => {
            return LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::DefaultsAfterError(path.to_path_buf(), err.to_string()),
            };
        }
    };

    match ron::from_str(&content) {
        Ok(config) => LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        },
        Err(err) => LoadedConfig {
            config: AppConfig::default(),
            source: ConfigSource::DefaultsAfterError(path.to_path_buf(), err.to_string()),
        },
    }
}
