//! Wrapper configuration
//!
//! Configuration is plain serde data and is usually loaded from TOML:
//!
//! ```toml
//! pretty = true
//! read_only = false
//! ```

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a [`ValueWrapper`](crate::ValueWrapper)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Pretty-print JSON and TOML text unless the `pretty` info overrides it
    pub pretty: bool,
    /// Reject every set format
    pub read_only: bool,
}

impl WrapperConfig {
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> DataResult<Self> {
        toml::from_str(content).map_err(|e| DataError::failed(format!("invalid wrapper config: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DataError::failed(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
