//! Configuration management for the workspace assistant
//!
//! Layered loading: built-in defaults, then an optional TOML file, then
//! `WORKMATE_*` environment variables (double-underscore separator).

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path of the persisted pattern store
    pub store_path: PathBuf,
    /// Per-handler dispatch timeout in milliseconds
    pub dispatch_timeout_ms: u64,
    /// Maximum conversation turns kept in memory
    pub max_history: usize,
    /// Confidence assigned to patterns learned from corrections
    pub learned_pattern_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("learned_patterns.json"),
            dispatch_timeout_ms: 10_000,
            max_history: 200,
            learned_pattern_confidence: 0.7,
        }
    }
}

impl EngineConfig {
    /// Load configuration, layering defaults, an optional TOML file and
    /// `WORKMATE_*` environment variables. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = toml::to_string(&EngineConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("WORKMATE")
                .separator("__")
                .try_parsing(true),
        );

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            store_path = %config.store_path.display(),
            dispatch_timeout_ms = config.dispatch_timeout_ms,
            max_history = config.max_history,
            "Engine configuration loaded"
        );

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dispatch_timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.max_history == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_history".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.learned_pattern_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "learned_pattern_confidence".to_string(),
                message: "must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_no_file() {
        let config = EngineConfig::load(None).unwrap();
        assert_eq!(config.dispatch_timeout_ms, 10_000);
        assert_eq!(config.max_history, 200);
        assert!((config.learned_pattern_confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_is_fine() {
        let config = EngineConfig::load(Some(Path::new("/nonexistent/workmate.toml"))).unwrap();
        assert_eq!(config.store_path, PathBuf::from("learned_patterns.json"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "store_path = \"/tmp/patterns.json\"\nmax_history = 50"
        )
        .unwrap();

        let config = EngineConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/patterns.json"));
        assert_eq!(config.max_history, 50);
        // untouched fields keep defaults
        assert_eq!(config.dispatch_timeout_ms, 10_000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "dispatch_timeout_ms = 0").unwrap();
        assert!(EngineConfig::load(Some(file.path())).is_err());
    }
}
