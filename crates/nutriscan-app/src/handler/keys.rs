//! Key event handlers for different UI modes

use nutriscan_core::Grade;

use crate::input_key::InputKey;
use crate::message::{Message, Section};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::Help => handle_key_help(key),
    }
}

/// Handle key events while navigating the product list
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home => Some(Message::SelectFirst),
        InputKey::End => Some(Message::SelectLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('x') => Some(Message::ClearGrades),
        InputKey::Char(c @ 'a'..='e') => Grade::from_char(c).map(Message::ToggleGrade),

        InputKey::Char('i') => Some(Message::ToggleSection(Section::Insights)),
        InputKey::Char('n') => Some(Message::ToggleSection(Section::Ingredients)),
        InputKey::Char('t') => Some(Message::ToggleSection(Section::Additives)),
        InputKey::Char('J') => Some(Message::ScrollDetailsDown),
        InputKey::Char('K') => Some(Message::ScrollDetailsUp),

        InputKey::Char('?') => Some(Message::ShowHelp),

        _ => None,
    }
}

/// Handle key events while the grade legend is open
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?') | InputKey::Esc | InputKey::Enter => Some(Message::CloseHelp),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        // Clear the query and return to browsing
        InputKey::Esc => Some(Message::CancelSearch),

        // Keep query, exit input mode
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // The list stays navigable while typing
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),

        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}
