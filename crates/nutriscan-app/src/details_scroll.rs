//! Details panel scroll state
//!
//! Shared by the handler layer (scroll commands) and the TUI layer, which
//! reports the content and viewport sizes while rendering.

/// Vertical scroll position of the details panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsScroll {
    /// Current offset from the top, in rows
    pub offset: usize,
    /// Total rendered rows (set during render)
    pub total_lines: usize,
    /// Rows that fit in the panel (set during render)
    pub visible_lines: usize,
}

impl DetailsScroll {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows, stopping at the last full page
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// True when rows below the viewport are hidden
    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}
