//! The `Config` struct and its validation.

mod env_vars;
mod persistence;

pub use env_vars::{ENV_PREFIX, resolve_symbol};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::types::LogLevel;

/// Top-level configuration, stored as `config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbosity of the debug log file.
    pub log_level: LogLevel,
    /// Tip parser settings.
    pub tip: TipSettings,
}

/// Settings for the tip command parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipSettings {
    /// Extra chat words mapped to ticker symbols, e.g. `brett: BRETT`.
    ///
    /// Built-in aliases always win over entries here.
    pub extra_currency_aliases: BTreeMap<String, String>,
}

impl Config {
    /// Check field values that serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (alias, symbol) in &self.tip.extra_currency_aliases {
            if alias.is_empty() || !alias.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::Validation(format!(
                    "tip.extra_currency_aliases: alias '{alias}' must be non-empty ASCII letters"
                )));
            }
            let valid_symbol = (2..=10).contains(&symbol.len())
                && symbol
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
            if !valid_symbol {
                return Err(ConfigError::Validation(format!(
                    "tip.extra_currency_aliases: symbol '{symbol}' for alias '{alias}' must be \
                     2-10 uppercase letters or digits"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_alias(alias: &str, symbol: &str) -> Config {
        let mut config = Config::default();
        config
            .tip
            .extra_currency_aliases
            .insert(alias.to_string(), symbol.to_string());
        config
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_valid_alias() {
        assert!(with_alias("brett", "BRETT").validate().is_ok());
        assert!(with_alias("Toshi", "TOSHI2").validate().is_ok());
    }

    #[test]
    fn test_invalid_aliases() {
        assert!(matches!(
            with_alias("", "BRETT").validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(with_alias("br3tt", "BRETT").validate().is_err());
        assert!(with_alias("brett", "brett").validate().is_err());
        assert!(with_alias("brett", "B").validate().is_err());
        assert!(with_alias("brett", "BRETTBRETTBRETT").validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("log_level: info\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.tip.extra_currency_aliases.is_empty());
    }
}
