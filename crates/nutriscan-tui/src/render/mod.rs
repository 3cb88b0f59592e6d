//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use nutriscan_app::state::{AppState, UiMode};
use nutriscan_app::DatasetStatus;
use nutriscan_core::ProductReport;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// The report for the selected product is rebuilt on every frame. The only
/// state written here is the details panel's content size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.effective_list_ratio());
    let icons = IconSet::new(state.settings.ui.icons);
    let searching = state.ui_mode == UiMode::SearchInput;

    frame.render_widget(
        widgets::MainHeader::new(&state.resources.dataset, &state.resources.model, icons),
        areas.header,
    );

    let counts = state.catalog().map(|c| c.grade_counts()).unwrap_or_default();
    frame.render_widget(
        widgets::FilterBar::new(state.filter(), counts, icons).searching(searching),
        areas.filters,
    );

    let body = areas.list.union(areas.details);
    if let DatasetStatus::Failed { path, message } = &state.resources.dataset {
        frame.render_widget(widgets::DatasetErrorPanel::new(path, message, icons), body);
    } else if state.is_no_match() {
        frame.render_widget(widgets::NoMatchPanel::new(icons), body);
    } else {
        frame.render_widget(
            widgets::ProductList::new(state.products(), state.view(), state.cursor()),
            areas.list,
        );
        // Hold the catalog separately so the scroll state can be borrowed mutably
        let catalog = state.resources.dataset.catalog().cloned();
        let product = catalog
            .as_deref()
            .zip(state.selected_index())
            .and_then(|(catalog, index)| catalog.products().get(index));
        if let Some(product) = product {
            let report = ProductReport::for_product(product);
            frame.render_stateful_widget(
                widgets::ProductDetails::new(&report, state.sections, icons),
                areas.details,
                &mut state.details_scroll,
            );
        }
    }

    frame.render_widget(widgets::Footer::new(state.ui_mode), areas.footer);

    if state.ui_mode == UiMode::Help {
        frame.render_widget(widgets::HelpOverlay::new(icons), area);
    }
}
