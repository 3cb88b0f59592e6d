//! Configuration types for NutriScan
//!
//! Defines:
//! - `Settings` - Global application settings (.nutriscan/config.toml)
//! - `DataSettings` - Dataset and model artifact locations and CSV dialect
//! - `UiSettings` - Terminal UI preferences

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use nutriscan_core::prelude::*;

/// Application settings (.nutriscan/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the dataset and model live, and how the CSV is laid out
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataSettings {
    /// Dataset path, relative to the base directory unless absolute
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,

    /// Model artifact path, relative to the base directory unless absolute
    #[serde(default = "default_model")]
    pub model: PathBuf,

    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Lines to skip before the header row (the first line is a description)
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            model: default_model(),
            delimiter: default_delimiter(),
            skip_rows: default_skip_rows(),
        }
    }
}

impl DataSettings {
    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(Error::config_invalid(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn dataset_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.dataset)
    }

    pub fn model_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.model)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from("nutrients_csvfile.csv")
}

fn default_model() -> PathBuf {
    PathBuf::from("model.pkl")
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_skip_rows() -> usize {
    1
}

/// Icon rendering mode for the TUI.
///
/// Controls whether markers use emoji (default) or plain Unicode symbols
/// that have a predictable width in every terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Emoji,
    Unicode,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Emoji => write!(f, "emoji"),
            IconMode::Unicode => write!(f, "unicode"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start with the insights section expanded
    #[serde(default)]
    pub insights_expanded: bool,

    /// Width of the product list as a percentage of the screen (20-80)
    #[serde(default = "default_list_ratio")]
    pub list_ratio: u16,

    /// Icon mode: "emoji" (default) or "unicode"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            insights_expanded: false,
            list_ratio: default_list_ratio(),
            icons: IconMode::default(),
        }
    }
}

impl UiSettings {
    /// List ratio clamped to a usable range
    pub fn effective_list_ratio(&self) -> u16 {
        self.list_ratio.clamp(20, 80)
    }
}

fn default_list_ratio() -> u16 {
    40
}
