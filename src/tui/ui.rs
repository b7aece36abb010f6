use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EmptyState, MessageList, TitleBar};

const HELP_TEXT: &str = "↑/↓ select · Enter/click toggle · t theme · q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    frame.render_widget(Block::new().style(tui.theme.screen()), frame.area());

    // Main area - empty page OR message list
    if app.conversation.is_empty() {
        tui.message_list.has_unseen_content = false;
        EmptyState::new(&tui.theme).render(frame, main_area);
    } else {
        MessageList::new(&mut tui.message_list, &app.conversation, &tui.theme, now)
            .render(frame, main_area);
    }

    // Title bar (after the list so it reflects this frame's scroll position)
    TitleBar::new(
        app.theme.label(),
        app.status_message.clone(),
        tui.message_list.expanded_count(),
        tui.message_list.has_unseen_content,
    )
    .style(
        Style::new()
            .fg(tui.theme.palette.primary)
            .add_modifier(Modifier::BOLD),
    )
    .render(frame, title_area);

    draw_help_line(frame, help_area, tui);
}

fn draw_help_line(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let style = Style::new().fg(tui.theme.palette.outline);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(HELP_TEXT, style))), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeMode;
    use crate::core::message::Conversation;
    use crate::test_support::{buffer_lines, buffer_text, test_app};
    use crate::tui::components::ListOptions;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_shows_both_rows() {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(app.theme, ListOptions::default());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].contains("Convo (theme: dark) | 2 messages"));
        assert_eq!(lines.iter().filter(|l| l.contains("Lexi")).count(), 2);
        assert!(lines[15].contains("q quit"));
    }

    #[test]
    fn test_draw_ui_empty_conversation() {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let app = App::new(Conversation::default(), ThemeMode::Light);
        let mut tui = TuiState::new(app.theme, ListOptions::default());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No messages yet"));
        assert!(text.contains("0 messages"));
        assert!(!text.contains("↓ More"));
    }

    #[test]
    fn test_draw_ui_fills_screen_background() {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(app.theme, ListOptions::default());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(59, 0)].bg, tui.theme.palette.background);
        assert_eq!(buf[(59, 15)].bg, tui.theme.palette.background);
    }
}
