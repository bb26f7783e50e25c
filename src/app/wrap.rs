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

/// Wrap logical text items into display lines no wider than `width` columns.
///
/// Every item ends its own line, and `\n` inside an item forces a break.
/// Wide glyphs count as two columns. A glyph that can never fit (wider than
/// `width`) is dropped. With no wrapping needed, the line count equals the
/// item count.
pub fn wrap_lines<S: AsRef<str>>(items: &[S], width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let mut line = String::new();
        let mut line_width = 0usize;
        for ch in item.as_ref().chars() {
            if ch == '\n' {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                continue;
            }
            if ch == '\r' {
                continue;
            }
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if ch_width > width {
                continue;
            }
            if line_width + ch_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += ch_width;
        }
        lines.push(line);
    }

    lines
}
