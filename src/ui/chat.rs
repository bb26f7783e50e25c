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

use crate::app::chat::MessageLog;
use crate::ui::{painter, theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Paint the log bottom-up: the wrapped line `offset` lines above the newest one
/// goes on the last row, older lines above it. Rows left over at the top are
/// blanked so nothing from an earlier frame shows through.
pub fn render(log: &MessageLog, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let lines = log.wrapped_lines();
    let visible = lines.len().saturating_sub(log.offset());
    let mut rows = (area.top()..area.bottom()).rev();

    for (line, y) in lines[..visible].iter().rev().zip(rows.by_ref()) {
        let end = painter::paint(buf, area, y, line, theme::item());
        painter::fill_remainder(buf, area, y, end, theme::item());
    }
    for y in rows {
        painter::blank_row(buf, area, y, theme::item());
    }
}
