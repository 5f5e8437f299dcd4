//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables
//! - CLI arguments (for the `diam` binary)
//!
//! ```toml
//! [dictionary]
//! path = "/etc/diam/applications.toml"
//! include_base = true
//!
//! [negotiation]
//! role = "server"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DiamError, Result};
use crate::negotiation::Role;

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Negotiation configuration
    #[serde(default)]
    pub negotiation: NegotiationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| DiamError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| DiamError::Config(format!("Failed to parse config: {e}")))
    }

    /// Default config file location (`<config dir>/diam/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("diam").join("config.toml"))
    }

    /// Load the default config file if it exists, defaults otherwise
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Apply the `DIAM_*` environment variables that are set on top of `self`
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; keys it has no value for leave `self` untouched
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(path) = lookup("DIAM_DICTIONARY") {
            self.dictionary.path = Some(PathBuf::from(path));
        }
        if let Some(val) = lookup("DIAM_BASE_APPS") {
            self.dictionary.include_base = parse_bool(&val)
                .ok_or_else(|| DiamError::Config(format!("Invalid DIAM_BASE_APPS: {val}")))?;
        }
        if let Some(role) = lookup("DIAM_ROLE") {
            self.negotiation.role = role.parse().map_err(DiamError::Config)?;
        }

        Ok(self)
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Dictionary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// TOML dictionary file with additional applications
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Start from the embedded base applications
    #[serde(default = "default_include_base")]
    pub include_base: bool,
}

fn default_include_base() -> bool {
    true
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_base: default_include_base(),
        }
    }
}

/// Negotiation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationConfig {
    /// Local role in the capabilities exchange
    #[serde(default)]
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.dictionary.include_base);
        assert!(config.dictionary.path.is_none());
        assert_eq!(config.negotiation.role, Role::Server);
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [dictionary]
            path = "/etc/diam/apps.toml"
            include_base = false

            [negotiation]
            role = "client"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.dictionary.path,
            Some(PathBuf::from("/etc/diam/apps.toml"))
        );
        assert!(!config.dictionary.include_base);
        assert_eq!(config.negotiation.role, Role::Client);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[negotiation]\nrole = \"client\"\n").unwrap();
        assert!(config.dictionary.include_base);

        let config: Config = toml::from_str("[dictionary]\n").unwrap();
        assert!(config.dictionary.include_base);
    }

    fn client_file_config() -> Config {
        Config {
            dictionary: DictionaryConfig {
                path: Some(PathBuf::from("a.toml")),
                include_base: false,
            },
            negotiation: NegotiationConfig { role: Role::Client },
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_unset_keeps_file_values() {
        let file = client_file_config();
        let config = file.clone().with_overrides(vars(&[])).unwrap();
        assert_eq!(config, file);
    }

    #[test]
    fn test_env_default_values_override_file() {
        let config = client_file_config()
            .with_overrides(vars(&[("DIAM_ROLE", "server"), ("DIAM_BASE_APPS", "true")]))
            .unwrap();

        assert_eq!(config.negotiation.role, Role::Server);
        assert!(config.dictionary.include_base);
        assert_eq!(config.dictionary.path, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_env_dictionary_path_override() {
        let config = client_file_config()
            .with_overrides(vars(&[("DIAM_DICTIONARY", "b.toml")]))
            .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("b.toml")));
        assert!(!config.dictionary.include_base);
        assert_eq!(config.negotiation.role, Role::Client);
    }

    #[test]
    fn test_env_invalid_values() {
        let err = Config::default()
            .with_overrides(vars(&[("DIAM_ROLE", "peer")]))
            .unwrap_err();
        assert!(matches!(err, DiamError::Config(_)));

        let err = Config::default()
            .with_overrides(vars(&[("DIAM_BASE_APPS", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, DiamError::Config(_)));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
