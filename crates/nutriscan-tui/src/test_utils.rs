//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(Footer::new(UiMode::Browse), term.area());
//! assert!(term.buffer_contains("Quit"));
//! ```

use nutriscan_app::catalog::Catalog;
use nutriscan_app::config::Settings;
use nutriscan_app::resources::Resources;
use nutriscan_app::state::AppState;
use nutriscan_core::{Grade, Nutrients, Product};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Render a stateful widget to the terminal
    pub fn render_stateful_widget<W: StatefulWidget>(
        &mut self,
        widget: W,
        area: Rect,
        state: &mut W::State,
    ) {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// Five products, one per grade, in catalog order
pub fn sample_products() -> Vec<Product> {
    let mut bread = Product::new("Whole Wheat Bread", Grade::A);
    bread.category = Some("Breads".to_string());
    bread.country = Some("United States".to_string());
    bread.ingredients = Some("whole wheat flour, water, yeast, salt".to_string());
    bread.additives = vec!["en:e300".to_string(), "en:e282".to_string()];
    bread.nutrients = Nutrients {
        energy: Some(247.0),
        fat: Some(3.4),
        saturated_fat: Some(0.7),
        sugars: Some(4.1),
        salt: Some(1.1),
        proteins: Some(13.0),
        fiber: Some(7.0),
        carbohydrates: None,
    };
    bread.nutrition_score = Some(-2.0);

    let mut yogurt = Product::new("Greek Yogurt", Grade::B);
    yogurt.nutrients.proteins = Some(10.5);
    yogurt.nutrition_score = Some(1.0);

    let mut juice = Product::new("Orange Juice", Grade::C);
    juice.nutrients.sugars = Some(8.9);

    let mut chips = Product::new("Potato Chips", Grade::D);
    chips.nutrients.fat = Some(34.0);
    chips.nutrition_score = Some(18.0);

    let mut spread = Product::new("Chocolate Spread", Grade::E);
    spread.nutrients.sugars = Some(56.3);
    spread.nutrition_score = Some(26.0);

    vec![bread, yogurt, juice, chips, spread]
}

/// Resources over [`sample_products`], without a model
pub fn sample_resources() -> Resources {
    Resources::from_catalog(Catalog::from_products("products.csv", sample_products()))
}

/// Application state over [`sample_resources`]
pub fn sample_state() -> AppState {
    AppState::new(Settings::default(), sample_resources())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_sample_products_cover_all_grades() {
        let grades: Vec<Grade> = sample_products().iter().map(|p| p.grade).collect();
        assert_eq!(grades, Grade::ALL.to_vec());
    }
}
