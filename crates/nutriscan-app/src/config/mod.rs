//! Configuration file parsing for NutriScan
//!
//! Supports:
//! - `.nutriscan/config.toml` - Dataset/model locations and UI preferences

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
