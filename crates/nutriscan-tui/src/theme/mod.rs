//! Centralized theme system for the TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants and badge color conversion
//! - `styles` - Semantic style builder functions
//! - `icons` - Icon glyphs with emoji and plain Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
