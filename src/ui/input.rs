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

use crate::app::input::InputState;
use crate::ui::{painter, theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Paint the edit buffer on the first inner row, then invert the cell under the cursor.
#[allow(clippy::cast_possible_truncation)]
pub fn render(input: &InputState, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let y = area.y;
    let end = painter::paint(buf, area, y, &input.text(), theme::item());
    painter::fill_remainder(buf, area, y, end, theme::item());

    let column = input.cursor_column();
    if column >= usize::from(area.width) {
        return;
    }
    let x = area.x + column as u16;
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(theme::highlight());
    }
}
