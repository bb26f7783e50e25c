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

use crate::app::keys::InputMode;
use crate::ui::{painter, theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Mode name centered on the first inner row.
#[allow(clippy::cast_possible_truncation)]
pub fn render(mode: InputMode, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let label = mode.label();
    let start = (area.width / 2).saturating_sub((label.width() / 2) as u16);
    let y = area.y;
    painter::fill_remainder(buf, area, y, area.x, theme::item());
    let text_area = Rect { x: area.x + start, width: area.width - start, ..area };
    painter::paint(buf, text_area, y, label, theme::item());
}
