//! Runtime Configuration
//!
//! Everything the application needs is taken from environment variables once at
//! startup and carried around as a plain `AppConfig` value.

use crate::error::{Result, WordCountError};
use crate::session::types::ConnectionMode;
use std::path::PathBuf;

pub const ENV_IS_BOLT: &str = "IS_BOLT";
pub const ENV_INPUT_FILE: &str = "INPUT_FILE";
pub const ENV_CONNECT_URL: &str = "CONNECT_URL";
pub const ENV_PARTITIONS: &str = "WORDCOUNT_PARTITIONS";

pub const DEFAULT_APP_NAME: &str = "WordCount";
pub const DEFAULT_INPUT_FILE: &str = "data/sample.txt";
pub const DEFAULT_CONNECT_URL: &str = "sc://localhost:15002";

/// Where the corpus should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLocation {
    /// `INPUT_FILE` was set: the file must exist.
    Explicit(PathBuf),
    /// Nothing was set: use the default path if present, else the bundled sample.
    Default(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub mode: ConnectionMode,
    pub connect_url: String,
    pub input: InputLocation,
    pub target_partitions: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_bolt = lookup(ENV_IS_BOLT)
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mode = if is_bolt {
            ConnectionMode::Remote
        } else {
            ConnectionMode::Embedded
        };

        let input = match lookup(ENV_INPUT_FILE).filter(|value| !value.trim().is_empty()) {
            Some(path) => InputLocation::Explicit(PathBuf::from(path)),
            None => InputLocation::Default(PathBuf::from(DEFAULT_INPUT_FILE)),
        };

        let connect_url = lookup(ENV_CONNECT_URL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONNECT_URL.to_string());

        let target_partitions = match lookup(ENV_PARTITIONS) {
            Some(raw) => {
                let parsed: usize = raw.trim().parse().map_err(|_| {
                    WordCountError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        ENV_PARTITIONS, raw
                    ))
                })?;
                if parsed == 0 {
                    return Err(WordCountError::Config(format!(
                        "{} must be greater than zero",
                        ENV_PARTITIONS
                    )));
                }
                Some(parsed)
            }
            None => None,
        };

        Ok(Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            mode,
            connect_url,
            input,
            target_partitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_select_embedded_mode() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.mode, ConnectionMode::Embedded);
        assert_eq!(config.app_name, "WordCount");
        assert_eq!(config.connect_url, DEFAULT_CONNECT_URL);
        assert_eq!(
            config.input,
            InputLocation::Default(PathBuf::from(DEFAULT_INPUT_FILE))
        );
        assert!(config.target_partitions.is_none());
    }

    #[test]
    fn test_is_bolt_is_case_insensitive() {
        for value in ["true", "TRUE", "True", " true "] {
            let config = config_from(&[(ENV_IS_BOLT, value)]).unwrap();
            assert_eq!(config.mode, ConnectionMode::Remote, "value {:?}", value);
        }
    }

    #[test]
    fn test_is_bolt_other_values_stay_embedded() {
        for value in ["false", "1", "yes", ""] {
            let config = config_from(&[(ENV_IS_BOLT, value)]).unwrap();
            assert_eq!(config.mode, ConnectionMode::Embedded, "value {:?}", value);
        }
    }

    #[test]
    fn test_input_file_is_explicit() {
        let config = config_from(&[(ENV_INPUT_FILE, "/tmp/corpus.txt")]).unwrap();
        assert_eq!(
            config.input,
            InputLocation::Explicit(PathBuf::from("/tmp/corpus.txt"))
        );
    }

    #[test]
    fn test_partitions_must_be_positive() {
        assert!(config_from(&[(ENV_PARTITIONS, "0")]).is_err());
        assert!(config_from(&[(ENV_PARTITIONS, "many")]).is_err());

        let config = config_from(&[(ENV_PARTITIONS, "8")]).unwrap();
        assert_eq!(config.target_partitions, Some(8));
    }
}
