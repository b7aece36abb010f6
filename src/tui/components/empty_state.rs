//! # Empty State Component
//!
//! Shown in place of the list when the conversation has no messages.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct EmptyState<'a> {
    pub theme: &'a Theme,
}

impl<'a> EmptyState<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for EmptyState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = &self.theme.palette;
        let muted = Style::new().fg(palette.outline);

        let text_lines = vec![
            Line::from(Span::styled(
                "No messages yet",
                Style::new()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Convo", muted)),
            Line::from(Span::styled(format!("v{}", env!("CARGO_PKG_VERSION")), muted)),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(text_lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_empty_state_is_centered() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        terminal
            .draw(|f| EmptyState::new(&theme).render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[3].contains("No messages yet"));
        assert!(lines[4].contains("Convo"));
        assert!(lines[0].trim().is_empty());
        assert!(!lines[3].starts_with('N'));
    }
}
