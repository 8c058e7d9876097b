//! Configuration file support.
//!
//! Settings are read from a `worldclock.toml` file. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::RepositoryType;
use crate::error::{EngineError, EngineResult};
use crate::models::HourFormat;
use crate::services::timeline::DEFAULT_WIDTH;

/// File name searched for by [`EngineConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "worldclock.toml";

/// Engine configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub timeline: TimelineSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub selector: SelectorSettings,
}

/// Reference zone and display settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Zone identifier; the system zone (then `UTC`) when unset.
    #[serde(default)]
    pub reference_zone: Option<String>,
    #[serde(default)]
    pub hour_format: HourFormat,
}

/// Timeline shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_zone_count")]
    pub zone_count: usize,
}

/// Persisted catalog cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(rename = "type", default = "default_cache_type")]
    pub cache_type: String,
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

/// Zone selector settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorSettings {
    /// Fixed seed for reproducible selections.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_zone_count() -> usize {
    7
}

fn default_cache_type() -> String {
    "memory".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(".worldclock-cache")
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            zone_count: default_zone_count(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            cache_type: default_cache_type(),
            path: default_cache_path(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(EngineError::Config)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| EngineError::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `worldclock.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if found and parsed successfully
    /// * `Err(EngineError::Config)` if no config file found or parse error
    pub fn from_default_location() -> EngineResult<Self> {
        match Self::default_file() {
            Some(path) => Self::from_file(path),
            None => Err(EngineError::Config(format!(
                "No {} found in standard locations",
                CONFIG_FILE_NAME
            ))),
        }
    }

    /// Like [`from_default_location`](Self::from_default_location), falling
    /// back to defaults when no file exists.
    pub fn load_or_default() -> EngineResult<Self> {
        match Self::default_file() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn default_file() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> EngineResult<()> {
        if self.timeline.width == 0 || self.timeline.width % 2 != 0 {
            return Err(EngineError::InvalidWidth(self.timeline.width));
        }
        if let Some(zone) = &self.engine.reference_zone {
            if zone.trim().is_empty() {
                return Err(EngineError::Config(
                    "engine.reference_zone must not be empty".to_string(),
                ));
            }
        }
        RepositoryType::from_str(&self.cache.cache_type).map_err(EngineError::Config)?;
        Ok(())
    }

    /// Cache store type, `REPOSITORY_TYPE` taking precedence over the file.
    pub fn repository_type(&self) -> EngineResult<RepositoryType> {
        if let Some(from_env) = RepositoryType::from_env() {
            return Ok(from_env);
        }
        RepositoryType::from_str(&self.cache.cache_type).map_err(EngineError::Config)
    }
}
