//! # Application State
//!
//! Core state for Convo. This module contains domain state only -
//! no TUI-specific types. Presentation state (scroll offsets, per-row
//! expansion, transitions) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── conversation: Conversation   // read-only message list
//! ├── theme: ThemeMode             // active colour scheme
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::ThemeMode;
use crate::core::message::Conversation;

pub struct App {
    pub conversation: Conversation,
    pub theme: ThemeMode,
    pub status_message: String,
}

impl App {
    pub fn new(conversation: Conversation, theme: ThemeMode) -> Self {
        let status_message = format!("{} messages", conversation.len());
        Self {
            conversation,
            theme,
            status_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "2 messages");
        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.theme, crate::ThemeMode::Dark);
    }
}
