use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use itinera_app::config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";
const MAX_ROW_PX: u16 = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Reads `config.toml`. A missing file is not an error: defaults apply.
pub struct TomlConfigLoader {
    path: PathBuf,
    explicit: bool,
}

impl TomlConfigLoader {
    /// `~/.config/itinera/config.toml` (platform equivalent).
    pub fn new() -> Result<Self, ConfigError> {
        let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            path: config_base.join("itinera").join(CONFIG_FILE_NAME),
            explicit: false,
        })
    }

    /// A path given on the command line must exist.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            explicit: true,
        }
    }

    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.explicit && !self.path.exists() {
            debug!(target: "config", path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        validate(&config)?;
        debug!(target: "config", path = %self.path.display(), "config loaded");
        Ok(config)
    }

    /// Like `load`, but falls back to defaults on any failure.
    pub fn load_or_default(&self) -> AppConfig {
        self.load().unwrap_or_else(|e| {
            warn!(target: "config", error = %e, "falling back to default config");
            AppConfig::default()
        })
    }
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let sheet = &config.sheet;
    let positive = [
        ("sheet.flick_threshold_px", sheet.flick_threshold_px),
        ("sheet.drag_threshold_px", sheet.drag_threshold_px),
        ("sheet.max_offset_px", sheet.max_offset_px),
    ];
    for (key, value) in positive {
        if value <= 0 {
            return Err(ConfigError::Invalid {
                key,
                reason: format!("must be positive, got {value}"),
            });
        }
    }
    if sheet.row_px == 0 || sheet.row_px > MAX_ROW_PX {
        return Err(ConfigError::Invalid {
            key: "sheet.row_px",
            reason: format!("must be between 1 and {MAX_ROW_PX}, got {}", sheet.row_px),
        });
    }
    Ok(())
}
