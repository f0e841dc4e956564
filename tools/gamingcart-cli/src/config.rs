//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["gamingcart.toml", ".gamingcart.toml", "gamingcart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart, accounts and session live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Account settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory, relative to the working directory unless absolute.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Slot holding the cart snapshot.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// Optional JSON product list replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_storage_dir() -> String {
    ".gamingcart".to_string()
}

fn default_cart_key() -> String {
    gaming_commerce::cart::DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            cart_key: default_cart_key(),
            catalog: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Account configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Emails that get the admin role when they register.
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.dir, ".gamingcart");
        assert_eq!(config.storage.cart_key, "cart");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.auth.admin_emails.is_empty());
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("gamingcart.toml");
        let toml = "[storage]\n\
                    dir = \"/var/lib/gamingcart\"\n\
                    cart_key = \"guest-cart\"\n\
                    \n\
                    [logging]\n\
                    format = \"json\"\n";
        std::fs::write(&toml_path, toml).unwrap();
        let config = CliConfig::load(&toml_path).unwrap();
        assert_eq!(config.storage.dir, "/var/lib/gamingcart");
        assert_eq!(config.storage.cart_key, "guest-cart");
        assert_eq!(config.logging.format, LogFormat::Json);

        let json_path = dir.path().join("gamingcart.json");
        std::fs::write(&json_path, r#"{"auth":{"admin_emails":["boss@example.com"]}}"#).unwrap();
        let config = CliConfig::load(&json_path).unwrap();
        assert_eq!(config.auth.admin_emails, vec!["boss@example.com"]);
        assert_eq!(config.storage.cart_key, "cart");
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamingcart.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }
}
