#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Settings for the palette fetch.
///
/// ```toml
/// timeout_seconds = 5
/// user_agent = "my-gallery/1.0"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("user_agent", user_agent)?;
        }
        Ok(())
    }
}

impl ConfigProvider for ClientConfig {
    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}
