//! # MessageCard Component
//!
//! Renders one message as an avatar, an author label and a body block.
//!
//! **Collapsed**: body cut to a single line, overflow elided.
//!   `╭───╮ Lexi`
//!   `│•ᴗ•│ ╭────────────────────────╮`
//!   `╰───╯ │ List of terminal emul…  │`
//!   `      ╰────────────────────────╯`
//!
//! **Expanded**: body wrapped with no line limit, background in the
//! primary tone.
//!
//! The card itself is a transient widget. The row's [`ItemState`]
//! (expansion plus colour and height transitions) is owned by
//! `MessageListState` and handed in as props every frame.

use std::borrow::Cow;
use std::time::Instant;

use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::core::animation::{AnimationSpec, Tween};
use crate::core::expansion::ExpansionState;
use crate::core::message::Message;
use crate::tui::components::avatar::{AVATAR_HEIGHT, AVATAR_WIDTH, Avatar, PROFILE_PICTURE};
use crate::tui::theme::Theme;

/// Blank columns between the avatar and the label+body column.
pub const AVATAR_GAP: u16 = 1;
/// Where the clickable label+body column starts, relative to the card.
pub const COLUMN_OFFSET: u16 = AVATAR_WIDTH + AVATAR_GAP;
/// Horizontal padding (per side) between the body border and its text.
const CONTENT_PAD_H: u16 = 1;
/// Columns not available to body text: avatar, gap, borders, padding.
const HORIZONTAL_OVERHEAD: u16 = COLUMN_OFFSET + 2 + CONTENT_PAD_H * 2;
/// Author row plus the body block's top and bottom border.
const VERTICAL_OVERHEAD: u16 = 1 + 2;

const ELLIPSIS: char = '…';

// ─── Row state ───────────────────────────────────────────────────────

/// Transient state of one materialised row.
#[derive(Debug, Clone)]
pub struct ItemState {
    pub expansion: ExpansionState,
    color: Tween,
    height: Option<Tween>,
    spec: AnimationSpec,
}

impl ItemState {
    pub fn new(now: Instant, spec: AnimationSpec) -> Self {
        let expansion = ExpansionState::default();
        Self {
            expansion,
            color: Tween::settled(expansion.color_target(), now, spec),
            height: None,
            spec,
        }
    }

    /// Flip the row and start the colour transition towards the new tone.
    pub fn toggle(&mut self, now: Instant) -> ExpansionState {
        let state = self.expansion.toggle();
        self.color.retarget(state.color_target(), now);
        state
    }

    /// Colour transition value: 0.0 surface, 1.0 primary.
    pub fn color_value(&self, now: Instant) -> f32 {
        self.color.value_at(now)
    }

    /// Height to draw this frame for a row whose content needs `target` rows.
    ///
    /// A changed target starts a transition from the current height; with
    /// `snap` (terminal resized) the row jumps straight to it.
    pub fn displayed_height(&mut self, target: u16, now: Instant, snap: bool) -> u16 {
        let target_f = f32::from(target);
        let spec = self.spec;
        let tween = self
            .height
            .get_or_insert_with(|| Tween::settled(target_f, now, spec));
        if snap {
            tween.snap(target_f, now);
        } else if tween.target() != target_f {
            debug!("Row height transition towards {} rows", target);
            tween.retarget(target_f, now);
        }
        tween.value_at(now).round() as u16
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.color.is_running(now) || self.height.is_some_and(|h| h.is_running(now))
    }
}

// ─── Measurement ─────────────────────────────────────────────────────

/// Columns available to body text in a card of the given width.
pub fn body_text_width(card_width: u16) -> u16 {
    card_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap the body to `width` columns.
///
/// Options mirror what `calculate_height` assumes so measured and rendered
/// line counts agree.
pub fn wrap_body(body: &str, width: u16) -> Vec<Cow<'_, str>> {
    let body = body.trim();
    if width == 0 || body.is_empty() {
        return vec![Cow::Borrowed(body)];
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(body, options)
}

/// The body lines actually displayed for a given line limit. When lines are
/// dropped the last kept line ends in an ellipsis.
pub fn visible_body_lines(body: &str, width: u16, max_lines: Option<usize>) -> Vec<String> {
    let mut lines: Vec<String> = wrap_body(body, width)
        .into_iter()
        .map(Cow::into_owned)
        .collect();

    if let Some(max) = max_lines
        && lines.len() > max
    {
        lines.truncate(max.max(1));
        if let Some(last) = lines.last_mut() {
            *last = elide(last, width);
        }
    }
    lines
}

/// Append an ellipsis, cutting the line so the result fits in `width` columns.
fn elide(line: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Height of a card's content (without list spacing) at the given width.
pub fn calculate_height(message: &Message, expansion: ExpansionState, width: u16) -> u16 {
    let text_width = body_text_width(width);
    let body_lines = if text_width == 0 {
        // Degenerate case: terminal too narrow for avatar + borders + padding.
        1
    } else {
        match expansion.max_body_lines() {
            Some(max) => wrap_body(&message.body, text_width).len().min(max).max(1),
            None => wrap_body(&message.body, text_width).len().max(1),
        }
    };
    (VERTICAL_OVERHEAD + body_lines as u16).max(AVATAR_HEIGHT)
}

// ─── Widget ──────────────────────────────────────────────────────────

pub struct MessageCard<'a> {
    pub message: &'a Message,
    pub expansion: ExpansionState,
    /// Colour transition value (0.0 surface, 1.0 primary).
    pub color_value: f32,
    pub is_selected: bool,
    pub theme: &'a Theme,
}

impl Widget for MessageCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let avatar_area = Rect::new(
            area.x,
            area.y,
            AVATAR_WIDTH.min(area.width),
            AVATAR_HEIGHT.min(area.height),
        );
        Avatar {
            resource: PROFILE_PICTURE,
            author: &self.message.author,
            theme,
            is_selected: self.is_selected,
        }
        .render(avatar_area, buf);

        let column = Rect::new(
            area.x.saturating_add(COLUMN_OFFSET),
            area.y,
            area.width.saturating_sub(COLUMN_OFFSET),
            area.height,
        );
        if column.width == 0 || column.height == 0 {
            return;
        }

        let mut author_style = theme
            .typography
            .title_small
            .fg(theme.palette.secondary);
        if self.is_selected {
            author_style = author_style.add_modifier(Modifier::REVERSED);
        }
        Line::from(Span::styled(self.message.author.as_str(), author_style))
            .render(Rect::new(column.x, column.y, column.width, 1), buf);

        let body_area = Rect::new(
            column.x,
            column.y + 1,
            column.width,
            column.height.saturating_sub(1),
        );
        if body_area.height == 0 {
            return;
        }

        let background = theme.body_background(self.color_value);
        let foreground = theme.body_foreground(self.color_value);
        let block = Block::bordered()
            .border_type(theme.shapes.medium)
            .border_style(Style::new().fg(theme.palette.outline))
            .style(Style::new().bg(background))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(body_area);
        block.render(body_area, buf);

        let lines: Vec<Line> = visible_body_lines(
            &self.message.body,
            inner.width,
            self.expansion.max_body_lines(),
        )
        .into_iter()
        .map(Line::raw)
        .collect();

        // Rows beyond `inner` are clipped while the height transition runs.
        Paragraph::new(lines)
            .style(theme.typography.body_medium.fg(foreground).bg(background))
            .render(inner, buf);
    }
}
