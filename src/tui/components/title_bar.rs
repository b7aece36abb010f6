//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the active theme
//! - Display status messages (e.g., "13 messages", "Expanded message 2 from Lexi")
//! - Show how many rows are currently expanded
//! - Show "↓ More" indicator when there's content below the viewport
//!
//! TitleBar is purely presentational. It receives all data as props:
//! - `theme_label`, `status_message`: Core App state
//! - `expanded_count`, `has_unseen_content`: TUI state (list rows, scroll position)
//!
//! ## Conditional Formatting
//!
//! 1. **Everything**: `"Convo (theme: dark) | 13 messages | 2 expanded | ↓ More"`
//! 2. **Nothing expanded**: `"Convo (theme: dark) | 13 messages"`
//! 3. **No status**: `"Convo (theme: dark)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar {
    pub theme_label: &'static str,
    pub status_message: String,
    pub expanded_count: usize,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
    pub style: Style,
}

impl TitleBar {
    pub fn new(
        theme_label: &'static str,
        status_message: String,
        expanded_count: usize,
        has_unseen_content: bool,
    ) -> Self {
        Self {
            theme_label,
            status_message,
            expanded_count,
            has_unseen_content,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> String {
        let mut parts = vec![format!("Convo (theme: {})", self.theme_label)];
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        if self.expanded_count > 0 {
            parts.push(format!("{} expanded", self.expanded_count));
        }
        if self.has_unseen_content {
            parts.push("↓ More".to_string());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.text(), self.style), area);
    }
}
