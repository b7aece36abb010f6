//! # Avatar Component
//!
//! A small round frame drawn in the primary colour around a drawable
//! resource. Drawables are text art files under `assets/drawable/`,
//! embedded by `build.rs` and looked up by identifier.
//!
//! ```text
//! ╭───╮
//! │•ᴗ•│
//! ╰───╯
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::tui::theme::Theme;

include!(concat!(env!("OUT_DIR"), "/drawables.rs"));

/// Identifier of the avatar shown next to every message.
pub const PROFILE_PICTURE: &str = "profile_picture";

pub const AVATAR_WIDTH: u16 = 5;
pub const AVATAR_HEIGHT: u16 = 3;

/// Look up an embedded drawable by identifier.
pub fn drawable(id: &str) -> Option<&'static [&'static str]> {
    DRAWABLES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, lines)| *lines)
}

pub struct Avatar<'a> {
    pub resource: &'a str,
    /// Used for the fallback initial when the resource is missing.
    pub author: &'a str,
    pub theme: &'a Theme,
    pub is_selected: bool,
}

impl Avatar<'_> {
    fn picture(&self) -> Vec<Line<'static>> {
        match drawable(self.resource) {
            Some(lines) if !lines.is_empty() => {
                lines.iter().map(|line| Line::raw(*line)).collect()
            }
            _ => {
                let initial = self
                    .author
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().collect::<String>())
                    .unwrap_or_else(|| "?".to_string());
                vec![Line::raw(initial)]
            }
        }
    }
}

impl Widget for Avatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut border_style = Style::new().fg(self.theme.palette.primary);
        if self.is_selected {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::bordered()
            .border_type(self.theme.shapes.circle)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.picture())
            .alignment(Alignment::Center)
            .style(Style::new().fg(self.theme.palette.on_surface))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;

    #[test]
    fn profile_picture_is_embedded() {
        let lines = drawable(PROFILE_PICTURE).expect("profile_picture drawable");
        assert!(!lines.is_empty());
    }

    #[test]
    fn unknown_drawable_is_none() {
        assert!(drawable("no_such_picture").is_none());
    }

    #[test]
    fn renders_rounded_frame() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, AVATAR_WIDTH, AVATAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        Avatar {
            resource: PROFILE_PICTURE,
            author: "Lexi",
            theme: &theme,
            is_selected: false,
        }
        .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[2].ends_with('╯'));
        assert_eq!(buf[(0, 0)].fg, theme.palette.primary);
    }

    #[test]
    fn missing_resource_falls_back_to_initial() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, AVATAR_WIDTH, AVATAR_HEIGHT);
        let mut buf = Buffer::empty(area);
        Avatar {
            resource: "no_such_picture",
            author: "lexi",
            theme: &theme,
            is_selected: false,
        }
        .render(area, &mut buf);

        assert!(buffer_lines(&buf)[1].contains('L'));
    }
}
