//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as fields:
//! - `TitleBar`: Top status bar showing theme, status and the "↓ More" hint
//! - `EmptyState`: Placeholder page for a conversation with no messages
//! - `MessageCard`, `Avatar`: Widgets for a single row
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `MessageList`: Scrollable, virtualised conversation view that owns
//!   per-row expansion and transitions
//!
//! Each component file holds its state types, event types, rendering,
//! event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── empty_state.rs   (No-messages page)
//! ├── avatar.rs        (Framed profile picture)
//! ├── message_card.rs  (Single row: avatar, author, body; row state)
//! └── message_list.rs  (Scrollable row container)
//! ```

pub mod avatar;
pub mod empty_state;
pub mod message_card;
pub mod message_list;
mod title_bar;

pub use empty_state::EmptyState;
pub use message_card::{ItemState, MessageCard};
pub use message_list::{ListEvent, ListOptions, MessageList, MessageListState};
pub use title_bar::TitleBar;
