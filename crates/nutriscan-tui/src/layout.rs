//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + title row + status row + border
const HEADER_HEIGHT: u16 = 4;
/// Filter bar: border + one row + border
const FILTER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, dataset count and model status
    pub header: Rect,
    /// Grade toggles and search box
    pub filters: Rect,
    /// Product list
    pub list: Rect,
    /// Details panel for the selected product
    pub details: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Split the screen; `list_ratio` is the list width in percent
pub fn create(area: Rect, list_ratio: u16) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(FILTER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    let body = Layout::horizontal([
        Constraint::Percentage(list_ratio),
        Constraint::Percentage(100 - list_ratio.min(100)),
    ])
    .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        filters: rows[1],
        list: body[0],
        details: body[1],
        footer: rows[3],
    }
}
