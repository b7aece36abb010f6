//! Built-in sample conversation shown when no messages file is configured.

use crate::core::message::{Conversation, Message};

const SAMPLE: &[(&str, &str)] = &[
    ("Lexi", "Test...Test...Test..."),
    (
        "Lexi",
        "List of terminal emulators I've tried:\n\
         Alacritty\n\
         foot\n\
         GNOME Terminal\n\
         iTerm2\n\
         Kitty\n\
         WezTerm\n\
         Windows Terminal",
    ),
    (
        "Lexi",
        "I think Rust is my favorite programming language.\nIt's so much fun!",
    ),
    ("Lexi", "Searching for alternatives to hand-written escape codes..."),
    (
        "Lexi",
        "Hey, take a look at ratatui, it's great!\n\
         It's a library for building rich terminal user interfaces.\n\
         You describe the whole screen every frame and it diffs the cells for you.\n\
         Less code, powerful widgets, and a friendly community :)",
    ),
    ("Lexi", "It works with crossterm on every platform :)"),
    (
        "Lexi",
        "Describing the UI as a function of state feels so natural, where has this been all my life?",
    ),
    ("Lexi", "Click a message to expand it, click again to collapse it"),
    (
        "Lexi",
        "The background fades to the primary colour while the row grows to fit the text ^_^",
    ),
    (
        "Lexi",
        "I didn't know the terminal could report mouse clicks with the exact cell",
    ),
    (
        "Lexi",
        "TestBackend is great to check quickly how a widget layout looks like",
    ),
    (
        "Lexi",
        "Rows you scroll far away from forget whether they were expanded",
    ),
    ("Lexi", "Have you tried switching to the light theme with t?"),
];

/// The static sample conversation, in display order.
pub fn sample_conversation() -> Conversation {
    Conversation::new(
        SAMPLE
            .iter()
            .map(|(author, body)| Message::new(*author, *body))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_conversation_is_not_empty() {
        let conversation = sample_conversation();
        assert_eq!(conversation.len(), SAMPLE.len());
        assert!(conversation.iter().all(|m| !m.body.trim().is_empty()));
    }

    #[test]
    fn sample_conversation_keeps_source_order() {
        let conversation = sample_conversation();
        for (message, (author, body)) in conversation.iter().zip(SAMPLE) {
            assert_eq!(message.author, *author);
            assert_eq!(message.body, *body);
        }
    }

    #[test]
    fn sample_conversation_has_multiline_bodies() {
        // Some entries must be long enough to show the expand behaviour.
        assert!(sample_conversation().iter().any(|m| m.body.lines().count() > 1));
    }
}
