//! # Actions
//!
//! Everything that changes core state becomes an `Action`.
//! User presses `t`? That's `Action::ToggleTheme`.
//! A row was expanded? That's `Action::RowToggled { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::expansion::ExpansionState;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleTheme,
    /// A row finished a toggle; `state` is the state it toggled into.
    RowToggled {
        index: usize,
        state: ExpansionState,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme.label());
            info!("Theme switched to {}", app.theme.label());
            Effect::None
        }
        Action::RowToggled { index, state } => {
            let author = app
                .conversation
                .get(index)
                .map(|m| m.author.as_str())
                .unwrap_or("?");
            let verb = if state.is_expanded() {
                "Expanded"
            } else {
                "Collapsed"
            };
            app.status_message = format!("{verb} message {} from {author}", index + 1);
            Effect::None
        }
    }
}
