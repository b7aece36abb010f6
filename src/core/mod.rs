//! # Core Application Logic
//!
//! Everything Convo knows about messages, expansion and transitions.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Conversation (data)  │
//!                    │  • ExpansionState       │
//!                    │  • Tween (transitions)  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`message`]: `Message` and the read-only `Conversation`
//! - [`sample`]: the built-in sample conversation
//! - [`expansion`]: the two-state expand/collapse machine
//! - [`animation`]: time-based tweens used for colour and height transitions
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: config file loading and resolution

pub mod action;
pub mod animation;
pub mod config;
pub mod expansion;
pub mod message;
pub mod sample;
pub mod state;
