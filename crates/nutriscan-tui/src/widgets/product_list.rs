//! Product list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use nutriscan_app::FilteredView;
use nutriscan_core::Product;

use crate::theme::styles;

/// Cut `text` to at most `width` terminal columns, ending in "…" if cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Selectable list of the filtered products
pub struct ProductList<'a> {
    products: &'a [Product],
    view: &'a FilteredView,
    cursor: Option<usize>,
}

impl<'a> ProductList<'a> {
    pub fn new(products: &'a [Product], view: &'a FilteredView, cursor: Option<usize>) -> Self {
        Self {
            products,
            view,
            cursor,
        }
    }

    fn title(&self) -> String {
        format!(" Choose from {} products ", self.view.len())
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Room for the grade badge, its padding and the highlight symbol
        let label_width = (inner.width as usize).saturating_sub(6);
        let items: Vec<ListItem> = self
            .view
            .products(self.products)
            .map(|product| {
                let badge = Span::styled(
                    format!(" {} ", product.grade.upper()),
                    styles::badge(product.grade.color()),
                );
                let name = truncate_to_width(&product.name, label_width);
                ListItem::new(Line::from(vec![
                    badge,
                    Span::raw(" "),
                    Span::styled(name, styles::text_primary()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(self.cursor);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}
