//! Key hint footer
//!
//! Hints that do not fit are dropped lowest priority first; the rest keep
//! their display order. The full key list lives in the help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use nutriscan_app::state::UiMode;

use crate::theme::styles;

/// Key, action, priority (0 is kept longest)
type Hint = (&'static str, &'static str, u8);

const BROWSE_HINTS: &[Hint] = &[
    ("↑↓", "Move", 2),
    ("/", "Search", 3),
    ("a-e", "Grade", 4),
    ("x", "Clear", 7),
    ("n/t/i", "Expand", 5),
    ("J/K", "Scroll", 6),
    ("?", "Help", 1),
    ("q", "Quit", 0),
];

const SEARCH_HINTS: &[Hint] = &[
    ("Enter", "Keep", 0),
    ("Esc", "Clear", 0),
    ("Ctrl+U", "Erase", 1),
    ("↑↓", "Move", 2),
];

const HELP_HINTS: &[Hint] = &[("Esc/?", "Close", 0), ("q", "Quit", 0)];

/// Columns taken by one rendered hint, trailing gap included
fn hint_width((key, action, _): &Hint) -> usize {
    format!("[{}] {}  ", key, action).width()
}

/// Hints that fit in `width` columns, in display order
fn visible_hints(hints: &'static [Hint], width: usize) -> Vec<&'static Hint> {
    let mut by_priority: Vec<usize> = (0..hints.len()).collect();
    by_priority.sort_by_key(|&i| hints[i].2);

    // Leading space
    let mut used = 1;
    let mut keep = vec![false; hints.len()];
    for i in by_priority {
        let w = hint_width(&hints[i]);
        if used + w <= width {
            used += w;
            keep[i] = true;
        }
    }

    hints
        .iter()
        .zip(keep)
        .filter_map(|(hint, kept)| kept.then_some(hint))
        .collect()
}

/// One-line key hints for the current mode
pub struct Footer {
    mode: UiMode,
}

impl Footer {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            UiMode::Browse => BROWSE_HINTS,
            UiMode::SearchInput => SEARCH_HINTS,
            UiMode::Help => HELP_HINTS,
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action, _) in visible_hints(hints, area.width as usize) {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", action), styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_hints_follow_mode() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(Footer::new(UiMode::Browse), term.area());
        assert!(term.buffer_contains("[q] Quit"));

        term.render_widget(Footer::new(UiMode::SearchInput), term.area());
        assert!(term.buffer_contains("[Esc] Clear"));
        assert!(!term.buffer_contains("[q] Quit"));

        term.render_widget(Footer::new(UiMode::Help), term.area());
        assert!(term.buffer_contains("[Esc/?] Close"));
    }

    #[test]
    fn test_wide_footer_shows_every_browse_hint() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(Footer::new(UiMode::Browse), term.area());

        for (key, action, _) in BROWSE_HINTS {
            assert!(term.buffer_contains(&format!("[{}] {}", key, action)));
        }
    }

    #[test]
    fn test_80_column_footer_drops_whole_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(Footer::new(UiMode::Browse), term.area());

        assert!(term.buffer_contains("[q] Quit"));
        assert!(term.buffer_contains("[?] Help"));
        assert!(term.buffer_contains("[/] Search"));

        // Every hint on screen is complete
        let content = term.content();
        assert_eq!(content.matches('[').count(), content.matches(']').count());
        let shown = BROWSE_HINTS
            .iter()
            .filter(|(key, action, _)| content.contains(&format!("[{}] {}", key, action)))
            .count();
        assert_eq!(shown, content.matches('[').count());
        assert!(shown < BROWSE_HINTS.len());
    }

    #[test]
    fn test_visible_hints_keep_display_order() {
        let kept = visible_hints(BROWSE_HINTS, 30);
        let keys: Vec<&str> = kept.iter().map(|(key, _, _)| *key).collect();
        assert_eq!(keys, vec!["?", "q"]);
    }
}
