//! Full-body panels for load failures and empty filter results

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

pub const NO_MATCH_MESSAGE: &str =
    "No products found matching your filters. Please adjust your search criteria.";
pub const FORMAT_HINT: &str =
    "The dataset file should be semicolon-separated (;) and contain nutrition grade information.";

/// Shown instead of the list and details when the dataset failed to load
pub struct DatasetErrorPanel<'a> {
    path: &'a Path,
    message: &'a str,
    icons: IconSet,
}

impl<'a> DatasetErrorPanel<'a> {
    pub fn new(path: &'a Path, message: &'a str, icons: IconSet) -> Self {
        Self {
            path,
            message,
            icons,
        }
    }
}

impl Widget for DatasetErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        let lines = vec![
            Line::from(vec![
                Span::raw(self.icons.error()),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "Failed to load the dataset. Please ensure '{}' is present in the application directory.",
                        file_name
                    ),
                    styles::status_red(),
                ),
            ]),
            Line::raw(""),
            Line::styled(FORMAT_HINT, styles::text_secondary()),
            Line::raw(""),
            Line::styled(self.message.to_string(), styles::text_muted()),
            Line::raw(""),
            Line::styled("Press q to quit.", styles::text_muted()),
        ];

        let block = styles::glass_block(false).title(" Dataset ");
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Informational panel for a filter that matches nothing
pub struct NoMatchPanel {
    icons: IconSet,
}

impl NoMatchPanel {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for NoMatchPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::raw(self.icons.warning()),
                Span::raw(" "),
                Span::styled(NO_MATCH_MESSAGE, styles::status_yellow()),
            ]),
            Line::raw(""),
            Line::styled(
                "Press x to clear grade filters or / then Esc to clear the search.",
                styles::text_muted(),
            ),
        ];

        let block = styles::glass_block(false).title(" No Results ");
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
