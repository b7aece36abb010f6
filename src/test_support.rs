//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::ThemeMode;
use crate::core::message::{Conversation, Message};
use crate::core::state::App;

/// Two identical rows, the smallest list where toggles can leak between rows.
pub fn two_lexi_messages() -> Conversation {
    Conversation::new(vec![
        Message::new("Lexi", "Test..."),
        Message::new("Lexi", "Test..."),
    ])
}

/// Creates a test App over [`two_lexi_messages`].
pub fn test_app() -> App {
    App::new(two_lexi_messages(), ThemeMode::Dark)
}

/// One string per buffer row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// The whole buffer flattened into one string.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
