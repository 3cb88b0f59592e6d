//! Message processing
//!
//! Runs a message through the TEA update function, following any chained
//! messages until the state settles.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::resources::Resources;
    use crate::state::UiMode;
    use nutriscan_core::{Grade, Product};

    #[test]
    fn test_key_chain_reaches_state() {
        let catalog = Catalog::from_products(
            "test.csv",
            vec![Product::new("Apple", Grade::A), Product::new("Cola", Grade::E)],
        );
        let mut state = AppState::new(Settings::default(), Resources::from_catalog(catalog));

        process_message(&mut state, Message::Key(InputKey::Char('e')));
        assert_eq!(state.view().len(), 1);

        process_message(&mut state, Message::Key(InputKey::Char('/')));
        process_message(&mut state, Message::Key(InputKey::Char('z')));
        assert!(state.is_no_match());

        // Esc clears the query through a chained ClearSearch
        process_message(&mut state, Message::Key(InputKey::Esc));
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert_eq!(state.filter().search(), "");
        assert_eq!(state.selected_label(), Some("Cola (Grade: E)"));
    }
}
