//! Message types for the application (TEA pattern)

use nutriscan_core::Grade;

use crate::input_key::InputKey;

/// Collapsible sections of the details panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ingredients,
    Additives,
    Insights,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick, also sent on terminal resize
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,
    /// Select by display label, first occurrence wins
    SelectLabel(String),

    // ─────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────
    ToggleGrade(Grade),
    ClearGrades,
    /// Enter search input mode
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    /// Keep the query and leave search input mode
    SubmitSearch,
    /// Clear the query and leave search input mode
    CancelSearch,

    // ─────────────────────────────────────────────────────────
    // Details panel
    // ─────────────────────────────────────────────────────────
    ToggleSection(Section),
    ScrollDetailsDown,
    ScrollDetailsUp,

    /// Open the grade legend overlay
    ShowHelp,
    CloseHelp,
}
