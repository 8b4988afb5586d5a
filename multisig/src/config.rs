//! Module configuration with TOML file support.

use std::path::Path;

use atomone_types::Address;
use atomone_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::error::MultisigError;

/// Host-supplied settings for the multisig module.
///
/// Load it with [`MultisigConfig::from_toml_file`] or build it directly in
/// tests, then hand it to [`Keeper::from_config`](crate::Keeper::from_config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigConfig {
    /// The only address allowed to update params.
    pub authority: Address,

    /// Human-readable prefix of account addresses.
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_address_prefix() -> String {
    "atone".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MultisigConfig {
    pub fn new(authority: impl Into<Address>) -> Self {
        Self {
            authority: authority.into(),
            address_prefix: default_address_prefix(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, MultisigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| MultisigError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, MultisigError> {
        toml::from_str(s).map_err(|e| MultisigError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, MultisigError> {
        toml::to_string_pretty(self).map_err(|e| MultisigError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), MultisigError> {
        atomone_utils::init_logging(self.log_format, &self.log_level)
            .map_err(|e| MultisigError::Config(e.to_string()))
    }
}
