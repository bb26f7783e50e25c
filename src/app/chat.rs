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

use super::wrap::wrap_lines;
use ratatui::layout::Rect;

/// Number of wrapped lines moved per chat scroll step.
pub const DEFAULT_PAGE_STEP: usize = 10;

/// Chat pane state: messages oldest first, rendered bottom-up.
///
/// `offset` counts wrapped lines from the bottom; 0 shows the newest message on
/// the last row. Appending never touches the offset, so a reader scrolled back
/// into history is not pulled to the bottom by new arrivals.
#[derive(Debug)]
pub struct MessageLog {
    messages: Vec<String>,
    offset: usize,
    page_step: usize,
    viewport: Rect,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_STEP)
    }
}

impl MessageLog {
    pub fn new(page_step: usize) -> Self {
        Self { messages: Vec::new(), offset: 0, page_step: page_step.max(1), viewport: Rect::default() }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn append(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn append_all<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.extend(messages.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.offset = 0;
    }

    /// Replace the log contents, e.g. with the key binding listing.
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.messages = lines;
        self.offset = 0;
    }

    /// Messages wrapped to the current pane width. Not cached: the result depends
    /// on the width and is recomputed on every call.
    #[must_use]
    pub fn wrapped_lines(&self) -> Vec<String> {
        wrap_lines(&self.messages, usize::from(self.viewport.width))
    }

    /// Largest offset that still fills the pane: `max(0, total - height)`.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        if self.messages.is_empty() {
            return 0;
        }
        self.wrapped_lines().len().saturating_sub(usize::from(self.viewport.height))
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_add(self.page_step).min(self.max_offset());
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_step);
    }
}
