//! # MessageList Component
//!
//! Scrollable, virtualised view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the conversation in order, one `MessageCard` per message
//! - Materialise row state only for rows inside the viewport plus a buffer
//! - Own per-row `ItemState` (expansion + transitions), keyed by position
//! - Manage scrolling and keyboard selection
//! - Hit testing for mouse interactions
//! - Cache row heights so only changed rows are re-measured
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the `Conversation`
//! (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the state
//! (layout cache, scroll offset, row materialisation) during the render pass,
//! aligning with Ratatui's `StatefulWidget` pattern.
//!
//! ## Row lifecycle
//!
//! A row's `ItemState` is created `Collapsed` the first frame the row falls
//! inside the materialised window and is dropped when the row leaves it, so a
//! row scrolled far away comes back collapsed. With `retain_offscreen_state`
//! the state is kept for the lifetime of the list instead.

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::time::Instant;

use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::animation::AnimationSpec;
use crate::core::config::{DEFAULT_ITEM_SPACING, ResolvedConfig};
use crate::core::expansion::ExpansionState;
use crate::core::message::{Conversation, Message};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message_card::{self, COLUMN_OFFSET, ItemState, MessageCard};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Behaviour knobs for the list, taken from the resolved config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub animation: AnimationSpec,
    /// Blank rows below every card.
    pub item_spacing: u16,
    pub retain_offscreen_state: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            animation: AnimationSpec::default(),
            item_spacing: DEFAULT_ITEM_SPACING,
            retain_offscreen_state: false,
        }
    }
}

impl From<&ResolvedConfig> for ListOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            animation: config.animation,
            item_spacing: config.item_spacing,
            retain_offscreen_state: config.retain_offscreen_state,
        }
    }
}

/// Which part of a row a screen cell falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Avatar and the gap next to it. Not clickable.
    Avatar,
    /// The author label + body column. Clicking here toggles the row.
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub region: Region,
}

/// High-level events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Toggled { index: usize, state: ExpansionState },
}

/// Layout, scroll and row state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// Currently selected message index (hover or keyboard navigation)
    pub selected_index: Option<usize>,
    /// State of materialised rows, keyed by position
    pub items: HashMap<usize, ItemState>,
    /// Rows materialised by the last render
    pub materialized: Range<usize>,
    /// Screen area of the last render (for hit testing between frames)
    pub area: Rect,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Whether content continues below the viewport
    pub has_unseen_content: bool,
    pub options: ListOptions,
    item_count: usize,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl MessageListState {
    pub fn new(options: ListOptions) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            selected_index: None,
            items: HashMap::new(),
            materialized: 0..0,
            area: Rect::default(),
            viewport_height: 0,
            has_unseen_content: false,
            options,
            item_count: 0,
        }
    }

    /// Expansion of a row. Rows without state are collapsed.
    pub fn expansion(&self, index: usize) -> ExpansionState {
        self.items
            .get(&index)
            .map(|item| item.expansion)
            .unwrap_or_default()
    }

    pub fn expanded_indices(&self) -> HashSet<usize> {
        self.items
            .iter()
            .filter(|(_, item)| item.expansion.is_expanded())
            .map(|(&i, _)| i)
            .collect()
    }

    pub fn expanded_count(&self) -> usize {
        self.items
            .values()
            .filter(|item| item.expansion.is_expanded())
            .count()
    }

    /// True while any row has a colour or height transition in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.items.values().any(|item| item.is_animating(now))
    }

    /// Toggle one row. Out-of-range indices are ignored.
    pub fn toggle_at(&mut self, index: usize, now: Instant) -> Option<ExpansionState> {
        if index >= self.item_count {
            return None;
        }
        let animation = self.options.animation;
        let state = self
            .items
            .entry(index)
            .or_insert_with(|| ItemState::new(now, animation))
            .toggle(now);
        info!("Row {} toggled to {:?}", index, state);
        Some(state)
    }

    /// Map a screen cell to the row under it.
    ///
    /// Returns `None` outside the list, on the scrollbar, on spacing rows
    /// and below the last row.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if !self.area.contains(Position { x: column, y: row }) {
            return None;
        }
        let local_x = column - self.area.x;
        if local_x >= self.area.width.saturating_sub(1) {
            return None; // scrollbar
        }

        let content_y = (row - self.area.y).saturating_add(self.scroll_state.offset().y);
        let prefix = &self.layout.prefix_heights;
        let index = prefix.partition_point(|&end| end <= content_y);
        if index >= prefix.len() {
            return None;
        }

        let item_top = if index == 0 { 0 } else { prefix[index - 1] };
        let card_height = self.layout.heights[index].saturating_sub(self.options.item_spacing);
        if content_y - item_top >= card_height {
            return None;
        }

        let region = if local_x < COLUMN_OFFSET {
            Region::Avatar
        } else {
            Region::Column
        };
        Some(Hit { index, region })
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected message is fully visible.
    /// If the message is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        if idx >= self.layout.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 {
            0
        } else {
            self.layout.prefix_heights[idx - 1]
        };
        let item_bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    fn select_previous(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let idx = self
            .selected_index
            .map(|i| i.saturating_sub(1))
            .unwrap_or(self.item_count - 1);
        self.selected_index = Some(idx);
        self.scroll_to_selected();
    }

    fn select_next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let idx = match self.selected_index {
            Some(i) => (i + 1).min(self.item_count - 1),
            None => 0,
        };
        self.selected_index = Some(idx);
        self.scroll_to_selected();
    }

    /// Measure every row and rebuild prefix heights for this frame.
    fn layout_pass(&mut self, messages: &[Message], content_width: u16, now: Instant) {
        let width_changed = self.layout.content_width != content_width;
        let expanded = self.expanded_indices();
        self.layout.refresh(messages, content_width, &expanded);

        let spacing = self.options.item_spacing;
        self.layout.heights.clear();
        for (i, &target) in self.layout.target_heights.iter().enumerate() {
            let card_height = match self.items.get_mut(&i) {
                Some(item) => item.displayed_height(target, now, width_changed),
                None => target,
            };
            self.layout.heights.push(card_height.saturating_add(spacing));
        }
        self.layout.rebuild_prefix_heights();
    }

    /// Drop state of rows outside `window`. Rows above the window lose
    /// height when they collapse, so the offset moves up by the same amount
    /// to keep the visible rows in place.
    fn evict_outside(&mut self, window: &Range<usize>) -> bool {
        let evicted: Vec<usize> = self
            .items
            .keys()
            .copied()
            .filter(|i| !window.contains(i))
            .collect();
        if evicted.is_empty() {
            return false;
        }

        let spacing = self.options.item_spacing;
        let mut shift: u16 = 0;
        for &i in &evicted {
            self.items.remove(&i);
            if i < window.start
                && let (Some(&shown), Some(&collapsed)) =
                    (self.layout.heights.get(i), self.layout.collapsed_heights.get(i))
            {
                shift = shift.saturating_add(shown.saturating_sub(collapsed.saturating_add(spacing)));
            }
        }
        debug!("Evicted {} rows outside {:?}", evicted.len(), window);

        if shift > 0 {
            let offset = self.scroll_state.offset();
            self.scroll_state.set_offset(Position {
                x: offset.x,
                y: offset.y.saturating_sub(shift),
            });
        }
        true
    }
}

/// EventHandler is implemented on `MessageListState` rather than `MessageList` because:
/// 1. Event handling requires persistent state (scroll position, row state)
/// 2. `MessageList` is recreated each frame with fresh props, so it can't hold state
/// 3. The state object lives in `TuiState` and persists across the event loop
impl EventHandler for MessageListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match *event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollToTop => {
                self.scroll_state.scroll_to_top();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.scroll_state.set_offset(Position {
                    x: 0,
                    y: self.layout.total_height(),
                });
                self.clamp_scroll();
                None
            }
            TuiEvent::CursorUp => {
                self.select_previous();
                None
            }
            TuiEvent::CursorDown => {
                self.select_next();
                None
            }
            TuiEvent::ToggleSelected => {
                let index = self.selected_index?;
                // The row must be inside the window on the next frame or its
                // state is evicted before it is drawn.
                self.scroll_to_selected();
                let state = self.toggle_at(index, Instant::now())?;
                Some(ListEvent::Toggled { index, state })
            }
            TuiEvent::MouseMove(column, row) => {
                self.selected_index = self.hit_test(column, row).map(|hit| hit.index);
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let hit = self.hit_test(column, row)?;
                self.selected_index = Some(hit.index);
                if hit.region != Region::Column {
                    return None;
                }
                let state = self.toggle_at(hit.index, Instant::now())?;
                Some(ListEvent::Toggled {
                    index: hit.index,
                    state,
                })
            }
            _ => None,
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut MessageListState,
    pub conversation: &'a Conversation,
    pub theme: &'a Theme,
    /// Frame time every transition is sampled at
    pub now: Instant,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        conversation: &'a Conversation,
        theme: &'a Theme,
        now: Instant,
    ) -> Self {
        Self {
            state,
            conversation,
            theme,
            now,
        }
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let messages = self.conversation.messages();
        let now = self.now;
        let state = &mut *self.state;

        state.area = area;
        state.viewport_height = area.height;
        state.item_count = messages.len();
        if state.selected_index.is_some_and(|i| i >= messages.len()) {
            state.selected_index = None;
        }

        // 1. Measure rows and clamp the offset against the new content height
        state.layout_pass(messages, content_width, now);
        state.clamp_scroll();

        // 2. Evict rows that left the window, then materialise the ones inside it
        let mut window = state
            .layout
            .visible_range(state.scroll_state.offset().y, area.height);
        if !state.options.retain_offscreen_state && state.evict_outside(&window) {
            state.layout_pass(messages, content_width, now);
            state.clamp_scroll();
            window = state
                .layout
                .visible_range(state.scroll_state.offset().y, area.height);
        }
        let animation = state.options.animation;
        for i in window.clone() {
            let target = state.layout.target_heights[i];
            state.items.entry(i).or_insert_with(|| {
                let mut item = ItemState::new(now, animation);
                item.displayed_height(target, now, true);
                item
            });
        }
        state.materialized = window.clone();

        // 3. Render the materialised rows into a ScrollView
        let total_height = state.layout.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if window.start > 0 {
            state.layout.prefix_heights[window.start - 1]
        } else {
            0
        };
        let window_bottom = state
            .layout
            .prefix_heights
            .get(window.end.wrapping_sub(1))
            .copied()
            .unwrap_or(0);
        scroll_view.render_widget(
            Block::new().style(self.theme.screen()),
            Rect::new(0, y_offset, content_width, window_bottom.saturating_sub(y_offset)),
        );

        for i in window {
            let height = state.layout.heights[i];
            let card_height = height.saturating_sub(state.options.item_spacing);
            let item = state.items.get(&i);

            let card = MessageCard {
                message: &messages[i],
                expansion: item.map(|it| it.expansion).unwrap_or_default(),
                color_value: item.map(|it| it.color_value(now)).unwrap_or(0.0),
                is_selected: state.selected_index == Some(i),
                theme: self.theme,
            };
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, card_height));

            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);

        // Update auxiliary state
        let offset = state.scroll_state.offset().y;
        state.has_unseen_content = total_height > offset.saturating_add(area.height);
    }
}

/// Cached layout measurements.
///
/// `target_heights` are content heights for each row's current expansion
/// (no spacing, no transition). `heights` are what this frame draws,
/// spacing included.
pub struct LayoutCache {
    pub target_heights: Vec<u16>,
    /// Content height of every row when collapsed (used when rows are evicted).
    pub collapsed_heights: Vec<u16>,
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    content_width: u16,
    /// Tracks which rows are expanded so heights are invalidated on toggle.
    cached_expanded_indices: HashSet<usize>,
    /// Prefix heights hit `u16::MAX` on the last rebuild.
    saturated: bool,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            target_heights: Vec::new(),
            collapsed_heights: Vec::new(),
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            content_width: 0,
            cached_expanded_indices: HashSet::new(),
            saturated: false,
        }
    }

    /// Rows whose target height must be re-measured. `None` means all of them.
    pub fn stale_indices(
        &self,
        message_count: usize,
        content_width: u16,
        expanded_indices: &HashSet<usize>,
    ) -> Option<Vec<usize>> {
        if self.content_width != content_width || self.target_heights.len() != message_count {
            return None;
        }
        let mut stale: Vec<usize> = expanded_indices
            .symmetric_difference(&self.cached_expanded_indices)
            .copied()
            .filter(|&i| i < message_count)
            .collect();
        stale.sort_unstable();
        Some(stale)
    }

    pub fn refresh(
        &mut self,
        messages: &[Message],
        content_width: u16,
        expanded_indices: &HashSet<usize>,
    ) {
        let expansion_of = |i: usize| {
            if expanded_indices.contains(&i) {
                ExpansionState::Expanded
            } else {
                ExpansionState::Collapsed
            }
        };

        match self.stale_indices(messages.len(), content_width, expanded_indices) {
            None => {
                self.collapsed_heights = messages
                    .iter()
                    .map(|m| message_card::calculate_height(m, ExpansionState::Collapsed, content_width))
                    .collect();
                self.target_heights = messages
                    .iter()
                    .enumerate()
                    .map(|(i, m)| match expansion_of(i) {
                        ExpansionState::Collapsed => self.collapsed_heights[i],
                        expanded => message_card::calculate_height(m, expanded, content_width),
                    })
                    .collect();
            }
            Some(stale) => {
                for i in stale {
                    self.target_heights[i] = match expansion_of(i) {
                        ExpansionState::Collapsed => self.collapsed_heights[i],
                        expanded => message_card::calculate_height(&messages[i], expanded, content_width),
                    };
                }
            }
        }
        self.content_width = content_width;
        self.cached_expanded_indices = expanded_indices.clone();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn rebuild_prefix_heights(&mut self) {
        let mut overflowed = false;
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.checked_add(h).unwrap_or_else(|| {
                    overflowed = true;
                    u16::MAX
                });
                Some(*acc)
            })
            .collect();

        if overflowed && !self.saturated {
            warn!(
                "Conversation is taller than {} rows; rows past that point overlap",
                u16::MAX
            );
        }
        self.saturated = overflowed;
    }

    /// True when the total height no longer fits the scroll canvas.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Rows intersecting the viewport, plus half a viewport above and below.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end.max(start)
    }
}
