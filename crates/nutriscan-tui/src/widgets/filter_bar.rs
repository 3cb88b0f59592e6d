//! Grade toggles and search box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use nutriscan_app::ProductFilter;
use nutriscan_core::Grade;

use crate::theme::{icons::IconSet, styles};

/// Filter bar: one badge per grade, then the search query
pub struct FilterBar<'a> {
    filter: &'a ProductFilter,
    /// Products per grade in the whole catalog
    counts: [usize; 5],
    searching: bool,
    icons: IconSet,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a ProductFilter, counts: [usize; 5], icons: IconSet) -> Self {
        Self {
            filter,
            counts,
            searching: false,
            icons,
        }
    }

    /// Show the search box as focused, with a cursor
    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn grade_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("Grades ", styles::text_secondary())];
        for (grade, count) in Grade::ALL.iter().zip(self.counts) {
            let text = format!(" {} {} ", grade.upper(), count);
            let style = if self.filter.is_grade_selected(*grade) {
                styles::badge(grade.color())
            } else {
                styles::badge_text(grade.color()).remove_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn search_spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![
            Span::raw(" "),
            Span::raw(self.icons.search()),
            Span::raw(" "),
        ];

        let query = self.filter.search();
        if query.is_empty() && !self.searching {
            spans.push(Span::styled("Search product name (/)", styles::text_muted()));
        } else {
            spans.push(Span::styled(query, styles::text_primary()));
        }
        if self.searching {
            spans.push(Span::styled("_", styles::keybinding()));
        }
        spans
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.searching).title(" Filters ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.grade_spans());
        spans.push(Span::styled("│", styles::text_muted()));
        spans.extend(self.search_spans());

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
