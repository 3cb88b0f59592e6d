//! nutriscan-tui - Terminal UI for NutriScan
//!
//! This crate provides the ratatui-based terminal interface: the synchronous
//! event loop, the view function and the widgets that render an
//! [`nutriscan_app::AppState`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
