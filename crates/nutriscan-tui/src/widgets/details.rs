//! Details panel for the selected product
//!
//! Left column: product information and the nutrient table.
//! Right column: analysis badges, the health assessment and insights.
//! The columns stack into one scrolling page on narrow terminals.
//!
//! Long text is wrapped here rather than by the paragraph so the row count
//! reported to [`DetailsScroll`] matches what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use nutriscan_app::details_scroll::DetailsScroll;
use nutriscan_app::state::SectionToggles;
use nutriscan_core::{InsightKind, NutritionScoreDisplay, ProductReport, NO_INSIGHTS};

use crate::theme::{icons::IconSet, palette, styles};

/// Below this width the two columns are stacked
const MIN_SIDE_BY_SIDE_WIDTH: u16 = 70;

/// Label column width of the nutrient table
const NUTRIENT_LABEL_WIDTH: usize = 16;

pub struct ProductDetails<'a> {
    report: &'a ProductReport<'a>,
    sections: SectionToggles,
    icons: IconSet,
}

impl<'a> ProductDetails<'a> {
    pub fn new(report: &'a ProductReport<'a>, sections: SectionToggles, icons: IconSet) -> Self {
        Self {
            report,
            sections,
            icons,
        }
    }

    /// Collapsible section header, e.g. "▸ 📝 View Ingredients [n]"
    fn section_header(
        &self,
        expanded: bool,
        icon: &'static str,
        title: &'static str,
        key: &'static str,
    ) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.disclosure(expanded), styles::text_muted()),
            Span::raw(" "),
            Span::raw(icon),
            Span::raw(" "),
            Span::styled(title, styles::text_primary()),
            Span::styled(format!(" [{}]", key), styles::keybinding()),
        ])
    }

    fn info_lines(&self, width: usize) -> Vec<Line<'a>> {
        let report = self.report;
        let mut lines = vec![
            Line::styled("Product Information", styles::heading()),
            Line::from(vec![
                Span::styled("Category: ", styles::text_secondary()),
                Span::styled(report.category, styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("Country:  ", styles::text_secondary()),
                Span::styled(report.country, styles::text_primary()),
            ]),
        ];

        if let Some(ingredients) = report.ingredients {
            let expanded = self.sections.ingredients;
            lines.push(self.section_header(
                expanded,
                self.icons.ingredients(),
                "View Ingredients",
                "n",
            ));
            if expanded {
                lines.extend(wrapped(ingredients, width, styles::text_secondary()));
            }
        }

        if !report.additives.is_empty() {
            let expanded = self.sections.additives;
            lines.push(self.section_header(
                expanded,
                self.icons.additives(),
                "View Additives",
                "t",
            ));
            if expanded {
                lines.extend(report.additives.iter().map(|additive| {
                    Line::styled(format!("  - {}", additive), styles::text_secondary())
                }));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Nutritional Values (per 100g)",
            styles::heading(),
        ));
        for row in &report.nutrient_rows {
            let value_style = if row.value.is_some() {
                styles::text_primary()
            } else {
                styles::text_muted()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$}",
                        row.nutrient.label(),
                        width = NUTRIENT_LABEL_WIDTH
                    ),
                    styles::text_secondary(),
                ),
                Span::styled(row.display_value(), value_style),
            ]));
        }

        lines
    }

    fn badge_line(&self) -> Line<'static> {
        let report = self.report;
        let mut spans = vec![
            Span::styled(
                format!(" Grade {} ", report.grade.upper()),
                styles::badge(report.grade_color),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" Health {} ", report.health_score_label()),
                styles::badge(report.score_color),
            ),
            Span::raw(" "),
        ];

        match report.nutrition_score {
            NutritionScoreDisplay::Available { color, .. } => spans.push(Span::styled(
                format!(" Score {} ", report.nutrition_score.label()),
                styles::badge(color),
            )),
            NutritionScoreDisplay::Unavailable => spans.push(Span::styled(
                report.nutrition_score.label(),
                styles::text_muted(),
            )),
        }

        Line::from(spans)
    }

    fn analysis_lines(&self, width: usize) -> Vec<Line<'a>> {
        let report = self.report;
        let icons = self.icons;

        let mut lines = vec![
            Line::from(vec![
                Span::raw(icons.analysis()),
                Span::raw(" "),
                Span::styled("Nutrition Analysis", styles::heading()),
            ]),
            self.badge_line(),
            Line::raw(""),
            Line::from(vec![
                Span::raw(icons.assessment()),
                Span::raw(" "),
                Span::styled("Health Risk Assessment", styles::heading()),
            ]),
            Line::styled(
                report.explanation.heading(),
                styles::badge_text(report.score_color),
            ),
        ];
        lines.extend(wrapped(
            report.explanation.text,
            width,
            styles::text_secondary(),
        ));
        lines.push(Line::raw(""));

        let expanded = self.sections.insights;
        lines.push(self.section_header(
            expanded,
            icons.insights(),
            "Nutritional Insights",
            "i",
        ));
        if expanded {
            lines.push(Line::styled(
                "Key Nutritional Indicators",
                styles::text_secondary(),
            ));
            if report.insights.is_empty() {
                lines.extend(wrapped(NO_INSIGHTS, width, styles::text_muted()));
            }
            for insight in &report.insights {
                let icon = icons.insight(insight.kind);
                let indent = icon.width() + 1;
                let style = insight_style(insight.kind);
                let rows = wrap_words(&insight.to_string(), width.saturating_sub(indent));
                for (i, row) in rows.into_iter().enumerate() {
                    let lead = if i == 0 {
                        format!("{} ", icon)
                    } else {
                        " ".repeat(indent)
                    };
                    lines.push(Line::from(vec![Span::raw(lead), Span::styled(row, style)]));
                }
            }
        }

        lines
    }
}

/// Greedy word wrap to `width` columns; words wider than a row are split
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        if used > 0 && used + 1 + word.width() > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if used > 0 {
            row.push(' ');
            used += 1;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if used > 0 && used + w > width {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

fn wrapped<'l>(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'l>> {
    wrap_words(text, width)
        .into_iter()
        .map(move |row| Line::styled(row, style))
}

/// Row offset for `Paragraph::scroll`
fn scroll_offset(scroll: &DetailsScroll) -> (u16, u16) {
    (u16::try_from(scroll.offset).unwrap_or(u16::MAX), 0)
}

fn insight_style(kind: InsightKind) -> Style {
    match kind {
        InsightKind::Positive => styles::status_green(),
        InsightKind::Warning => styles::status_yellow(),
        InsightKind::Info => Style::default().fg(palette::STATUS_BLUE),
    }
}

impl StatefulWidget for ProductDetails<'_> {
    type State = DetailsScroll;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DetailsScroll) {
        let title = format!(" {} {} ", self.icons.product(), self.report.name);
        let mut block = styles::glass_block(false).title(title);
        let inner = block.inner(area);

        if inner.height == 0 || inner.width == 0 {
            block.render(area, buf);
            return;
        }
        let visible = inner.height as usize;

        if inner.width >= MIN_SIDE_BY_SIDE_WIDTH {
            let columns = Layout::horizontal([
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ])
            .spacing(2)
            .split(inner);
            let info = self.info_lines(columns[0].width as usize);
            let analysis = self.analysis_lines(columns[1].width as usize);
            state.update_content_size(info.len().max(analysis.len()), visible);

            if state.total_lines > visible {
                block = block.title_bottom(scroll_hint(state));
            }
            block.render(area, buf);

            Paragraph::new(info)
                .scroll(scroll_offset(state))
                .render(columns[0], buf);
            Paragraph::new(analysis)
                .scroll(scroll_offset(state))
                .render(columns[1], buf);
        } else {
            let width = inner.width as usize;
            let mut lines = self.info_lines(width);
            lines.push(Line::raw(""));
            lines.extend(self.analysis_lines(width));
            state.update_content_size(lines.len(), visible);

            if state.total_lines > visible {
                block = block.title_bottom(scroll_hint(state));
            }
            block.render(area, buf);

            Paragraph::new(lines)
                .scroll(scroll_offset(state))
                .render(inner, buf);
        }
    }
}

/// Bottom border hint shown while the content overflows
fn scroll_hint(scroll: &DetailsScroll) -> Line<'static> {
    let arrow = if scroll.has_more_below() { "▾" } else { "▴" };
    Line::from(vec![
        Span::styled(format!(" {} ", arrow), styles::text_muted()),
        Span::styled("[J/K]", styles::keybinding()),
        Span::styled(" scroll ", styles::text_muted()),
    ])
    .right_aligned()
}
