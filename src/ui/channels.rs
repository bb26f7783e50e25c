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

use crate::app::channels::ChannelList;
use crate::ui::{painter, theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Paint visible entries from `offset` down; the row at `cursor_row` is inverted.
pub fn render(list: &ChannelList, area: Rect, buf: &mut Buffer) {
    let mut entries = list.entries().iter().skip(list.offset());
    for y in area.top()..area.bottom() {
        let Some(entry) = entries.next() else {
            painter::blank_row(buf, area, y, theme::item());
            continue;
        };
        let style = if y == list.cursor_row() { theme::highlight() } else { theme::item() };
        let end = painter::paint(buf, area, y, &entry.display_label(), style);
        painter::fill_remainder(buf, area, y, end, style);
    }
}
