//! TOML configuration for the solar-term solver and balance analyzer.
//!
//! ```toml
//! [jieqi]
//! max_iterations = 10
//! tolerance_deg = 1e-4
//!
//! [balance]
//! excessive_count = 4
//!
//! [balance.thresholds]
//! strong = 1.3
//! balanced = 0.8
//! ```
//!
//! Every table and key is optional; omitted keys keep their built-in values.
//! A `[balance.stem]` or `[balance.branch]` table must give all five weights.

pub mod error;

use std::path::Path;

use bazi_base::BalanceConfig;
use bazi_search::{JieqiConfig, JieqiEngine, SearchError};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Top-level configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaziConfig {
    pub jieqi: JieqiConfig,
    pub balance: BalanceConfig,
}

impl BaziConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            tracing::warn!("Failed to read config at {:?}: {}", path, err);
            ConfigError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        let config = Self::from_toml_str(&content).inspect_err(|err| {
            tracing::warn!("Rejected config at {:?}: {}", path, err);
        })?;
        tracing::info!("Loaded config from {:?}", path);
        tracing::debug!(?config, "effective configuration");
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the built-in values.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jieqi.validate()?;
        self.balance.validate().map_err(SearchError::from)?;
        Ok(())
    }

    /// Build a solar-term engine from the `[jieqi]` settings.
    pub fn engine(&self) -> Result<JieqiEngine, ConfigError> {
        Ok(JieqiEngine::new(self.jieqi)?)
    }
}
