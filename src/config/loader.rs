//! Configuration loader with environment variable expansion

use super::{ConfigError, EnvAuthConfig};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<EnvAuthConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let expanded = Self::expand_env_vars(&content);
        let config: EnvAuthConfig = serde_yaml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }

    /// Expand `${VAR_NAME}` and `${VAR_NAME:-default}` placeholders.
    ///
    /// An unset variable without a default keeps the original placeholder.
    fn expand_env_vars(content: &str) -> String {
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}").unwrap();
        let mut result = String::with_capacity(content.len());
        let mut last = 0;

        for cap in re.captures_iter(content) {
            let full = cap.get(0).unwrap();
            result.push_str(&content[last..full.start()]);

            let name = cap.get(1).unwrap().as_str();
            match std::env::var(name) {
                Ok(value) => result.push_str(&value),
                Err(_) => match cap.get(2) {
                    Some(default) => result.push_str(default.as_str()),
                    None => result.push_str(full.as_str()),
                },
            }

            last = full.end();
        }

        result.push_str(&content[last..]);
        result
    }
}
