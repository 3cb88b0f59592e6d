//! Color palette.
//!
//! Chrome uses named terminal colors; badges use the exact RGB values of
//! the grade color tokens.

use nutriscan_core::BadgeColor;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Foreground on colored badges and highlighted rows
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

/// Terminal color for a badge token
pub fn badge(color: BadgeColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors_are_rgb() {
        assert_eq!(badge(BadgeColor::DarkGreen), Color::Rgb(0x03, 0x81, 0x41));
        assert_eq!(badge(BadgeColor::Red), Color::Rgb(0xE6, 0x3E, 0x11));
        assert_eq!(badge(BadgeColor::Gray), Color::Rgb(0x88, 0x88, 0x88));
    }
}
