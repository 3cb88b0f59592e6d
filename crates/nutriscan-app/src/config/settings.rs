//! Settings parser for .nutriscan/config.toml

use super::types::Settings;
use nutriscan_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const NUTRISCAN_DIR: &str = ".nutriscan";

const DEFAULT_CONFIG: &str = r#"# NutriScan Configuration

[data]
# Semicolon-separated product table; the first line is a description,
# the header is on the second line.
dataset = "nutrients_csvfile.csv"
# Serialized classifier. Loaded and checked at startup, never queried.
model = "model.pkl"
delimiter = ";"
skip_rows = 1

[ui]
# Start with the "Nutritional Insights" section open
insights_expanded = false
# Width of the product list, percent of the screen
list_ratio = 40
# "emoji" or "unicode"
icons = "emoji"
"#;

/// Path of the config file for a base directory
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(NUTRISCAN_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.nutriscan/config.toml`
///
/// A missing or unreadable file is not an error: defaults are used and the
/// problem is logged.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the `.nutriscan/` directory with a commented default config.
///
/// An existing config file is left untouched. Returns the config path.
pub fn init_config_dir(base_path: &Path) -> Result<PathBuf> {
    let nutriscan_dir = base_path.join(NUTRISCAN_DIR);

    if !nutriscan_dir.exists() {
        std::fs::create_dir_all(&nutriscan_dir)
            .map_err(|e| Error::config(format!("Failed to create .nutriscan dir: {}", e)))?;
    }

    let config_path = nutriscan_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
