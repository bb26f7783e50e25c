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

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Write `text` on `row` starting at the inner-left edge of `bounds`, clipped at
/// the right edge. Wide glyphs that would straddle the edge are not written.
/// Returns the column after the last written cell.
pub fn paint(buf: &mut Buffer, bounds: Rect, row: u16, text: &str, style: Style) -> u16 {
    if !contains_row(bounds, row) || bounds.width == 0 {
        return bounds.x;
    }
    let (x, _) = buf.set_stringn(bounds.x, row, text, usize::from(bounds.width), style);
    x
}

/// Pad `row` from `from_x` to the right edge of `bounds` with blank cells.
pub fn fill_remainder(buf: &mut Buffer, bounds: Rect, row: u16, from_x: u16, style: Style) {
    if !contains_row(bounds, row) {
        return;
    }
    for x in from_x.max(bounds.x)..bounds.right() {
        if let Some(cell) = buf.cell_mut((x, row)) {
            cell.reset();
            cell.set_char(' ').set_style(style);
        }
    }
}

/// A full row of blank cells.
pub fn blank_row(buf: &mut Buffer, bounds: Rect, row: u16, style: Style) {
    fill_remainder(buf, bounds, row, bounds.x, style);
}

fn contains_row(bounds: Rect, row: u16) -> bool {
    row >= bounds.y && row < bounds.bottom()
}
