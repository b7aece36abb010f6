//! # Messages
//!
//! A `Message` is an immutable author/body pair. A `Conversation` is the
//! ordered, read-only sequence the list renders: insertion order is display
//! order and nothing mutates it after construction.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub author: String,
    pub body: String,
}

impl Message {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

// ============================================================================
// Loading from JSON
// ============================================================================

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "messages I/O error: {e}"),
            LoadError::Parse(e) => write!(f, "messages parse error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse a JSON array of `{ "author": ..., "body": ... }` objects.
pub fn parse_conversation(json: &str) -> Result<Conversation, LoadError> {
    let messages: Vec<Message> = serde_json::from_str(json).map_err(LoadError::Parse)?;
    Ok(Conversation::new(messages))
}

/// Load a conversation from a JSON file on disk.
pub fn load_conversation(path: &Path) -> Result<Conversation, LoadError> {
    let contents = fs::read_to_string(path).map_err(LoadError::Io)?;
    let conversation = parse_conversation(&contents)?;
    info!(
        "Loaded {} messages from {}",
        conversation.len(),
        path.display()
    );
    Ok(conversation)
}
