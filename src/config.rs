//! Algorithm configuration
//!
//! Configuration is optional. Hosts that want to bound memory or recursion
//! can load an [`AlgoConfig`] from TOML and pass it to the `*_with` variants.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_config;
use crate::error::Result;

pub use types::{AlgoConfig, TraversalConfig, DEFAULT_MAX_MATRIX_VERTICES, DEFAULT_RECURSION_LIMIT};

impl AlgoConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AlgoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject limits that would make every algorithm fail
    pub fn validate(&self) -> Result<()> {
        if self.max_matrix_vertices == 0 {
            bail_config!("max_matrix_vertices must be greater than zero");
        }
        if self.recursion_limit == 0 {
            bail_config!("recursion_limit must be greater than zero");
        }
        if self.traversal.max_visits == Some(0) {
            bail_config!("traversal.max_visits must be greater than zero");
        }
        Ok(())
    }
}
