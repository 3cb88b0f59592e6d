//! Application state (Model in TEA pattern)

use nutriscan_core::{Grade, Product};

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::details_scroll::DetailsScroll;
use crate::filter::{FilteredView, ProductFilter};
use crate::message::Section;
use crate::resources::Resources;

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigating the list, single-key shortcuts active
    #[default]
    Browse,

    /// Typing into the search box
    SearchInput,

    /// Grade legend overlay
    Help,
}

/// Expanded/collapsed state of the details panel sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionToggles {
    pub ingredients: bool,
    pub additives: bool,
    pub insights: bool,
}

impl SectionToggles {
    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::Ingredients => self.ingredients,
            Section::Additives => self.additives,
            Section::Insights => self.insights,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::Ingredients => &mut self.ingredients,
            Section::Additives => &mut self.additives,
            Section::Insights => &mut self.insights,
        };
        *flag = !*flag;
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub resources: Resources,
    pub sections: SectionToggles,
    pub details_scroll: DetailsScroll,

    filter: ProductFilter,
    view: FilteredView,
    /// Label of the selected product; the view position is derived from it
    selected_label: Option<String>,
    cursor: usize,
}

impl AppState {
    pub fn new(settings: Settings, resources: Resources) -> Self {
        Self::with_filter(settings, resources, ProductFilter::default())
    }

    /// State with filters pre-applied, e.g. from command-line flags
    pub fn with_filter(settings: Settings, resources: Resources, filter: ProductFilter) -> Self {
        let sections = SectionToggles {
            insights: settings.ui.insights_expanded,
            ..SectionToggles::default()
        };
        let mut state = Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            settings,
            resources,
            sections,
            details_scroll: DetailsScroll::new(),
            filter,
            view: FilteredView::default(),
            selected_label: None,
            cursor: 0,
        };
        state.refresh_view();
        state
    }

    // ─────────────────────────────────────────────────────────
    // Catalog access
    // ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> Option<&Catalog> {
        self.resources.dataset.catalog().map(|c| c.as_ref())
    }

    /// All loaded products, empty when the dataset failed to load
    pub fn products(&self) -> &[Product] {
        self.catalog().map(Catalog::products).unwrap_or(&[])
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Dataset loaded but the filters exclude everything
    pub fn is_no_match(&self) -> bool {
        self.resources.dataset.is_loaded() && self.view.is_no_match()
    }

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────

    /// Recompute the filtered view, keeping the selected label if it survived
    pub fn refresh_view(&mut self) {
        self.view = self.filter.apply(self.products());

        let kept = self
            .selected_label
            .as_deref()
            .and_then(|label| self.view.position_of_label(self.products(), label));

        match kept {
            Some(position) => self.cursor = position,
            None => self.select_position(0),
        }
    }

    pub fn toggle_grade(&mut self, grade: Grade) {
        self.filter.toggle_grade(grade);
        self.refresh_view();
    }

    pub fn clear_grades(&mut self) {
        self.filter.clear_grades();
        self.refresh_view();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.push_search_char(c);
        self.refresh_view();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.pop_search_char();
        self.refresh_view();
    }

    pub fn clear_search(&mut self) {
        self.filter.clear_search();
        self.refresh_view();
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Position of the selection within the view
    pub fn cursor(&self) -> Option<usize> {
        self.selected_label.as_ref().map(|_| self.cursor)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    /// Catalog index of the product the details panel shows
    pub fn selected_index(&self) -> Option<usize> {
        let label = self.selected_label.as_deref()?;
        self.view.resolve_label(self.products(), label)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products().get(self.selected_index()?)
    }

    /// Store a new selection; the details panel starts from the top for a new product
    fn set_selection(&mut self, label: Option<String>, cursor: usize) {
        if label != self.selected_label {
            self.details_scroll.scroll_to_top();
        }
        self.selected_label = label;
        self.cursor = cursor;
    }

    /// Select the view entry at `position`, clamped to the view
    pub fn select_position(&mut self, position: usize) {
        if self.view.is_empty() {
            self.set_selection(None, 0);
            return;
        }

        let position = position.min(self.view.len() - 1);
        let label = self
            .view
            .catalog_index(position)
            .and_then(|i| self.products().get(i))
            .map(Product::display_label);

        // Duplicate labels collapse onto their first occurrence
        let cursor = label
            .as_deref()
            .and_then(|l| self.view.position_of_label(self.products(), l))
            .unwrap_or(position);
        self.set_selection(label, cursor);
    }

    /// Select by display label; unknown labels leave the selection unchanged
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.view.position_of_label(self.products(), label) {
            Some(position) => {
                self.set_selection(Some(label.to_string()), position);
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(cursor) = self.cursor() {
            self.select_position(self.next_distinct(cursor));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(cursor) = self.cursor() {
            self.select_position(cursor.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        self.select_position(0);
    }

    pub fn select_last(&mut self) {
        self.select_position(self.view.len().saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        if let Some(cursor) = self.cursor() {
            self.select_position(cursor + PAGE_SIZE);
        }
    }

    pub fn page_up(&mut self) {
        if let Some(cursor) = self.cursor() {
            self.select_position(cursor.saturating_sub(PAGE_SIZE));
        }
    }

    /// Next position whose label differs from the current one
    fn next_distinct(&self, cursor: usize) -> usize {
        let products = self.products();
        let labels = self.view.products(products).map(Product::display_label);
        let current = self.selected_label.as_deref();
        labels
            .enumerate()
            .skip(cursor + 1)
            .find(|(_, label)| Some(label.as_str()) != current)
            .map(|(i, _)| i)
            .unwrap_or(cursor)
    }

    // ─────────────────────────────────────────────────────────
    // Details panel
    // ─────────────────────────────────────────────────────────

    pub fn scroll_details_down(&mut self) {
        self.details_scroll.scroll_down(1);
    }

    pub fn scroll_details_up(&mut self) {
        self.details_scroll.scroll_up(1);
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
