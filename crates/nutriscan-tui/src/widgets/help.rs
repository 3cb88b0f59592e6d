//! Help overlay: grade legend, key bindings and the usage note

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use nutriscan_core::Grade;

use crate::theme::{icons::IconSet, styles};

pub const DISCLAIMER: &str =
    "Note: This is an educational project and should not replace professional nutritional advice.";

const OVERLAY_WIDTH: u16 = 64;
const OVERLAY_HEIGHT: u16 = 23;

/// Width of the key column in the bindings table
const KEY_COLUMN_WIDTH: usize = 20;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("↑↓ / j k", "Move selection"),
    ("PgUp PgDn Home End", "Jump through the list"),
    ("/", "Search by product name"),
    ("a-e", "Toggle a grade filter"),
    ("x", "Clear grade filters"),
    ("n / t / i", "Ingredients, additives, insights"),
    ("J / K", "Scroll the details panel"),
    ("q / Esc", "Quit"),
];

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Modal listing what each grade means
pub struct HelpOverlay {
    icons: IconSet,
}

impl HelpOverlay {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn legend_line(grade: Grade) -> Line<'static> {
        let explanation = grade.explanation();
        Line::from(vec![
            Span::styled(format!(" {} ", grade.upper()), styles::badge(grade.color())),
            Span::raw("  "),
            Span::styled(format!("{:<28}", grade.quality()), styles::text_primary()),
            Span::styled(explanation.heading(), styles::text_secondary()),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled("Nutrition Grades", styles::heading())];
        lines.extend(Grade::ALL.into_iter().map(Self::legend_line));

        lines.push(Line::raw(""));
        lines.push(Line::styled("Keys", styles::heading()));
        lines.extend(KEY_BINDINGS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", key, width = KEY_COLUMN_WIDTH),
                    styles::keybinding(),
                ),
                Span::styled(*action, styles::text_secondary()),
            ])
        }));

        lines.push(Line::raw(""));
        lines.push(Line::styled(DISCLAIMER, styles::text_muted()));
        lines
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);
        Clear.render(rect, buf);

        let title = format!(" {} NutriScan Help ", self.icons.app());
        let block = styles::glass_block(true).title(title);
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(rect, buf);
    }
}
