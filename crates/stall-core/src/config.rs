use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::lazy::DEFAULT_MARGIN_ROWS;
use crate::store::CART_FILE;

/// Environment variable that overrides the data directory (highest
/// precedence, used heavily by the end-to-end tests).
pub const DATA_DIR_ENV: &str = "STALL_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StallConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the cart file. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Optional catalog TOML file; the built-in demo catalog is used when
    /// unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How many rows beyond the viewport edge still trigger image loads.
    #[serde(default = "default_lazy_margin")]
    pub lazy_margin_rows: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            lazy_margin_rows: default_lazy_margin(),
        }
    }
}

fn default_lazy_margin() -> usize {
    DEFAULT_MARGIN_ROWS
}

/// Load the user config from `<config-dir>/stall/config.toml`.
///
/// A missing file yields defaults; a file that exists but does not parse
/// is an error worth surfacing rather than silently ignoring.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<StallConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(StallConfig::default());
    };

    let path = config_dir.join("stall/config.toml");
    if !path.exists() {
        return Ok(StallConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<StallConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve the data directory: `STALL_DATA_DIR` env var, then the config
/// file, then the platform data dir, then a dot directory as a last
/// resort.
#[must_use]
pub fn resolve_data_dir(config: &StallConfig) -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Some(dir) = &config.storage.data_dir {
        return dir.clone();
    }
    dirs::data_dir()
        .map_or_else(|| PathBuf::from(".stall"), |base| base.join("stall"))
}

/// Full path of the persisted cart file.
#[must_use]
pub fn cart_file_path(config: &StallConfig) -> PathBuf {
    resolve_data_dir(config).join(CART_FILE)
}

#[cfg(test)]
mod tests {
    use super::{StallConfig, UiConfig};
    use crate::lazy::DEFAULT_MARGIN_ROWS;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: StallConfig = toml::from_str("").expect("empty config parses");
        assert!(config.storage.data_dir.is_none());
        assert!(config.catalog.path.is_none());
        assert_eq!(config.ui.lazy_margin_rows, DEFAULT_MARGIN_ROWS);
    }

    #[test]
    fn partial_config_fills_in_missing_sections() {
        let config: StallConfig = toml::from_str(
            r#"
            [ui]
            lazy_margin_rows = 3
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.ui.lazy_margin_rows, 3);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn ui_defaults_match_the_loader_default() {
        assert_eq!(UiConfig::default().lazy_margin_rows, DEFAULT_MARGIN_ROWS);
    }

    #[test]
    fn data_dir_config_is_honored() {
        let config: StallConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/stall-test"
            "#,
        )
        .expect("storage config parses");
        assert_eq!(
            config.storage.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/stall-test"))
        );
    }
}
