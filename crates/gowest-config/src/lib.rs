//! Reporter configuration.
//!
//! The binary always runs with [`ReporterConfig::default`]. Loading from
//! TOML is available to embedders and tests.

use std::path::Path;

use gowest_core::{Algorithm, CoreError, Reporter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of indices the driver reports by default (`0..42`).
pub const DEFAULT_LIMIT: u64 = 42;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Exclusive upper bound on the reported indices
    pub limit: u64,

    /// How each value is computed
    pub algorithm: Algorithm,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            algorithm: Algorithm::default(),
        }
    }
}

impl ReporterConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;
        let parsed: Self = settings.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Load a TOML file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?;
        let parsed: Self = settings.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reporter().map(drop)
    }

    pub fn reporter(&self) -> Result<Reporter, ConfigError> {
        Ok(Reporter::new(self.limit, self.algorithm)?)
    }
}
