//! Configuration module
//!
//! Settings for the trusted-environment authentication strategy, loadable
//! from YAML with environment variable expansion and validation.

use crate::identity::DropScope;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Variable consulted when none is configured
pub const DEFAULT_VARIABLE_NAME: &str = "REMOTE_USER";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Strategy configuration
///
/// # Example
///
/// ```yaml
/// variable_name: REMOTE_USER
/// force_lowercase: true
/// drop_scope:
///   - example.com
///   - corp.example.com
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvAuthConfig {
    /// Environment entry holding the trusted identity. Default: `REMOTE_USER`
    #[serde(default = "default_variable_name")]
    pub variable_name: String,

    /// ASCII lower-case the raw value before scope processing. Default: false
    #[serde(default)]
    pub force_lowercase: bool,

    /// Scope stripping: absent, `true`, a scope, or an ordered scope list
    #[serde(default)]
    pub drop_scope: Option<DropScope>,
}

impl Default for EnvAuthConfig {
    fn default() -> Self {
        Self {
            variable_name: default_variable_name(),
            force_lowercase: false,
            drop_scope: None,
        }
    }
}

fn default_variable_name() -> String {
    DEFAULT_VARIABLE_NAME.to_string()
}

impl EnvAuthConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variable_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "variable_name cannot be empty".into(),
            ));
        }

        let scopes: &[String] = match &self.drop_scope {
            Some(DropScope::One(scope)) => std::slice::from_ref(scope),
            Some(DropScope::Many(scopes)) => {
                if scopes.is_empty() {
                    return Err(ConfigError::ValidationError(
                        "drop_scope list cannot be empty".into(),
                    ));
                }
                scopes
            }
            Some(DropScope::Any(_)) | None => &[],
        };

        for scope in scopes {
            if scope.is_empty() {
                return Err(ConfigError::ValidationError(
                    "drop_scope entries cannot be empty".into(),
                ));
            }
            if scope.starts_with('@') {
                return Err(ConfigError::ValidationError(format!(
                    "drop_scope entry '{}' must not include the '@' separator",
                    scope
                )));
            }
        }

        Ok(())
    }
}
