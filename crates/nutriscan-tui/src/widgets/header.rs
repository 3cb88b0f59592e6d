//! Header bar widget
//!
//! Title on the first row; dataset and model status on the second.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use nutriscan_app::{DatasetStatus, ModelStatus};

use crate::theme::{icons::IconSet, palette, styles};

pub const TITLE: &str = "NutriScan - Nutrition Grade Analysis System";

/// Main header showing the title and load status
pub struct MainHeader<'a> {
    dataset: &'a DatasetStatus,
    model: &'a ModelStatus,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(dataset: &'a DatasetStatus, model: &'a ModelStatus, icons: IconSet) -> Self {
        Self {
            dataset,
            model,
            icons,
        }
    }

    fn title_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::raw(self.icons.app()),
            Span::raw(" "),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn status_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];

        match self.dataset {
            DatasetStatus::Loaded(catalog) => {
                spans.push(Span::styled(
                    format!("{} products", catalog.len()),
                    styles::text_primary(),
                ));
                if catalog.dropped() > 0 {
                    spans.push(Span::styled(
                        format!(" ({} rows without a grade skipped)", catalog.dropped()),
                        styles::text_muted(),
                    ));
                }
            }
            DatasetStatus::Failed { .. } => {
                spans.push(Span::styled("dataset unavailable", styles::status_red()));
            }
        }

        spans.push(Span::styled("  │  ", styles::text_muted()));

        let model_style = if self.model.is_loaded() {
            styles::status_green()
        } else {
            spans.push(Span::raw(self.icons.warning()));
            spans.push(Span::raw(" "));
            styles::status_yellow()
        };
        spans.push(Span::styled(self.model.summary(), model_style));

        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.title_line(), inner.width);
        if inner.height >= 2 {
            buf.set_line(inner.x, inner.y + 1, &self.status_line(), inner.width);
        }
    }
}
