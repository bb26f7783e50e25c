// channel-term - A terminal chat client with channel, log and input panes
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::backend::{ChannelId, ChannelInfo};
use ratatui::layout::Rect;
use std::borrow::Cow;
use std::collections::HashMap;

/// Glyph shown in front of a channel with unread messages.
pub const UNREAD_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub id: ChannelId,
    /// Unmarked label, e.g. ` [acme] #general`.
    pub label: String,
    pub unread: bool,
}

impl ChannelEntry {
    #[must_use]
    pub fn from_info(info: &ChannelInfo) -> Self {
        Self { id: info.id.clone(), label: info.label(), unread: info.unread }
    }

    /// Label as painted: the marker replaces the leading padding when unread.
    #[must_use]
    pub fn display_label(&self) -> Cow<'_, str> {
        if self.unread {
            Cow::Owned(format!("{UNREAD_MARKER}{}", self.label.trim_start()))
        } else {
            Cow::Borrowed(&self.label)
        }
    }
}

/// Channel pane state: entries, selection, scroll offset and the highlighted row.
///
/// `cursor_row` is an absolute grid row inside `viewport` and always sits at
/// `viewport.y + (selected - offset)`. Navigation moves the cursor row until it
/// reaches a pane edge, then scrolls the entries underneath it.
#[derive(Debug, Default)]
pub struct ChannelList {
    entries: Vec<ChannelEntry>,
    /// O(1) lookup: channel id -> entry index. Rebuilt by `set_entries`.
    index: HashMap<ChannelId, usize>,
    selected: usize,
    offset: usize,
    cursor_row: u16,
    viewport: Rect,
}

impl ChannelList {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[ChannelEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, id: &ChannelId) -> Option<&ChannelEntry> {
        self.index.get(id).and_then(|&i| self.entries.get(i))
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&ChannelId> {
        self.entries.get(self.selected).map(|e| &e.id)
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn cursor_row(&self) -> u16 {
        self.cursor_row
    }

    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    fn top_row(&self) -> u16 {
        self.viewport.y
    }

    fn bottom_row(&self) -> u16 {
        self.viewport.bottom().saturating_sub(1).max(self.viewport.y)
    }

    fn visible_height(&self) -> usize {
        usize::from(self.viewport.height.max(1))
    }

    /// Replace all entries. The selection follows the previously selected id when it
    /// is still present, otherwise it is clamped into range.
    pub fn set_entries(&mut self, entries: Vec<ChannelEntry>) {
        let previous = self.selected_id().cloned();
        self.index = entries.iter().enumerate().map(|(i, e)| (e.id.clone(), i)).collect();
        self.entries = entries;
        if let Some(i) = previous.and_then(|id| self.index.get(&id).copied()) {
            self.selected = i;
        }
        self.reanchor();
    }

    /// Pane inner area changed; keep the selection visible.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        let relative = self.cursor_row.saturating_sub(self.viewport.y);
        self.viewport = viewport;
        self.cursor_row = viewport.y.saturating_add(relative);
        self.reanchor();
    }

    /// Restore `cursor_row - top == selected - offset` and the offset bounds after
    /// the entries or the viewport changed, keeping the cursor row where possible.
    #[allow(clippy::cast_possible_truncation)]
    fn reanchor(&mut self) {
        if self.entries.is_empty() {
            self.selected = 0;
            self.offset = 0;
            self.cursor_row = self.top_row();
            return;
        }
        let height = self.visible_height();
        self.selected = self.selected.min(self.entries.len() - 1);
        let max_offset = self.entries.len().saturating_sub(height);
        let relative =
            usize::from(self.cursor_row.saturating_sub(self.top_row())).min(height - 1);
        self.offset = self.selected.saturating_sub(relative).min(max_offset);
        self.cursor_row = self.top_row() + (self.selected - self.offset) as u16;
    }

    /// Returns the newly selected id, or `None` at the top boundary.
    pub fn move_selection_up(&mut self) -> Option<ChannelId> {
        if self.entries.is_empty() || self.selected == 0 {
            return None;
        }
        self.selected -= 1;
        self.scroll_up();
        self.selected_id().cloned()
    }

    /// Returns the newly selected id, or `None` at the bottom boundary.
    pub fn move_selection_down(&mut self) -> Option<ChannelId> {
        if self.selected + 1 >= self.entries.len() {
            return None;
        }
        self.selected += 1;
        self.scroll_down();
        self.selected_id().cloned()
    }

    fn scroll_up(&mut self) {
        if self.cursor_row <= self.top_row() {
            self.offset = self.offset.saturating_sub(1);
        } else {
            self.cursor_row -= 1;
        }
    }

    fn scroll_down(&mut self) {
        if self.cursor_row >= self.bottom_row() {
            if self.offset + 1 < self.entries.len() {
                self.offset += 1;
            }
        } else {
            self.cursor_row += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
        self.offset = 0;
        self.cursor_row = self.top_row();
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn move_to_bottom(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let height = self.visible_height();
        self.selected = self.entries.len() - 1;
        if self.entries.len() <= height {
            self.offset = 0;
            self.cursor_row = self.top_row() + self.selected as u16;
        } else {
            self.offset = self.entries.len() - height;
            self.cursor_row = self.bottom_row();
        }
    }

    /// Mark a channel unread. Returns `true` only when the marker was newly added,
    /// which is when the host should raise its notification.
    pub fn set_unread(&mut self, id: &ChannelId) -> bool {
        let Some(entry) = self.index.get(id).and_then(|&i| self.entries.get_mut(i)) else {
            tracing::debug!("set_unread: unknown channel {id}");
            return false;
        };
        if entry.unread {
            return false;
        }
        entry.unread = true;
        true
    }

    pub fn set_read(&mut self, id: &ChannelId) {
        if let Some(entry) = self.index.get(id).and_then(|&i| self.entries.get_mut(i)) {
            entry.unread = false;
        }
    }
}
