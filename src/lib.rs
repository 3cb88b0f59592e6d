//! NutriScan Library
//!
//! The binary's headless mode. Everything else lives in the workspace
//! crates: `nutriscan-core`, `nutriscan-app` and `nutriscan-tui`.

pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, write_events, HeadlessOutcome};
pub use headless::HeadlessEvent;
