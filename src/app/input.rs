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

use unicode_width::UnicodeWidthChar;

/// Single-line edit buffer. The cursor is a char index in `0..=len`.
#[derive(Debug, Default)]
pub struct InputState {
    chars: Vec<char>,
    cursor: usize,
    /// Inner width of the input pane; the text is kept one column short of it
    /// so the cursor cell always fits.
    width: u16,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    #[must_use]
    pub fn display_width(&self) -> usize {
        self.chars.iter().map(|c| char_width(*c)).sum()
    }

    /// Display column of the cursor relative to the pane's inner left edge.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.chars[..self.cursor].iter().map(|c| char_width(*c)).sum()
    }

    /// Insert at the cursor. Returns `false` when the pane is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        let limit = usize::from(self.width).saturating_sub(1);
        if self.display_width() + char_width(c) > limit {
            return false;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}
