//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.page_down();
            UpdateResult::none()
        }
        Message::SelectLabel(label) => {
            if !state.select_label(&label) {
                debug!("Label not in current view: {}", label);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleGrade(grade) => {
            state.toggle_grade(grade);
            debug!(
                "Grade filter now {:?} ({} products)",
                state.filter().grades(),
                state.view().len()
            );
            UpdateResult::none()
        }
        Message::ClearGrades => {
            state.clear_grades();
            UpdateResult::none()
        }
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput(c) => {
            state.push_search_char(c);
            UpdateResult::none()
        }
        Message::SearchBackspace => {
            state.pop_search_char();
            UpdateResult::none()
        }
        Message::ClearSearch => {
            state.clear_search();
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::message(Message::ClearSearch)
        }

        Message::ToggleSection(section) => {
            state.sections.toggle(section);
            UpdateResult::none()
        }
        Message::ScrollDetailsDown => {
            state.scroll_details_down();
            UpdateResult::none()
        }
        Message::ScrollDetailsUp => {
            state.scroll_details_up();
            UpdateResult::none()
        }

        Message::ShowHelp => {
            state.ui_mode = UiMode::Help;
            UpdateResult::none()
        }
        Message::CloseHelp => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
    }
}
