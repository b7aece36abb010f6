//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a row's colour or height is mid-transition): draws every
//!   ~16ms so the transition runs smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

pub use component::{Component, EventHandler};

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{info, warn};

use crate::ThemeMode;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::message::{Conversation, load_conversation};
use crate::core::sample::sample_conversation;
use crate::core::state::App;
use crate::tui::components::{ListEvent, ListOptions, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const ANIMATING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(mode: ThemeMode, options: ListOptions) -> Self {
        Self {
            message_list: MessageListState::new(options),
            theme: Theme::new(mode),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol reports key releases separately; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableMouseCapture);
    }
}

/// Messages from the configured file, or the built-in sample.
pub fn load_messages(config: &ResolvedConfig) -> io::Result<Conversation> {
    match &config.messages_file {
        Some(path) => load_conversation(path).map_err(io::Error::other),
        None => Ok(sample_conversation()),
    }
}

/// Route one event. Returns true when the app should quit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let action = match event {
        // Resize just needs a redraw; heights are re-measured on the next frame
        TuiEvent::Resize => return false,
        TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
        TuiEvent::ToggleTheme => Action::ToggleTheme,
        _ => match tui.message_list.handle_event(&event) {
            Some(ListEvent::Toggled { index, state }) => Action::RowToggled { index, state },
            None => return false,
        },
    };
    let effect = update(app, action);
    if tui.theme.mode != app.theme {
        tui.theme = Theme::new(app.theme);
    }
    effect == Effect::Quit
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let conversation = load_messages(&config)?;
    info!("Loaded {} messages", conversation.len());

    let mut app = App::new(conversation, config.theme);
    let mut tui = TuiState::new(app.theme, ListOptions::from(&config));

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = (|| -> io::Result<()> {
        let mut needs_redraw = true; // Force first frame

        loop {
            let now = Instant::now();
            let animating = tui.message_list.is_animating(now);
            if animating {
                needs_redraw = true;
            }

            // Only draw when something changed
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
                needs_redraw = false;
            }

            let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
            let Some(first_event) = poll_event_timeout(timeout)? else {
                continue;
            };
            needs_redraw = true;

            // Process first event + drain ALL pending events before next draw
            let mut should_quit = dispatch(&mut app, &mut tui, first_event);
            while !should_quit && let Some(event) = poll_event_immediate()? {
                should_quit = dispatch(&mut app, &mut tui, event);
            }

            if should_quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    })();

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}
