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

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

/// Height of the bottom row (mode + input), borders included.
pub const INPUT_ROW_HEIGHT: u16 = 3;

/// Outer pane areas, borders included. Component state works on [`inner`] areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub channels: Rect,
    pub chat: Rect,
    pub mode: Rect,
    pub input: Rect,
}

/// Split `area` into the sidebar column (channels over mode) and the main column
/// (chat over input). `sidebar_width` is in twelfths of the total width.
pub fn compute(area: Rect, sidebar_width: u16) -> AppLayout {
    let sidebar = u32::from(sidebar_width.clamp(1, 11));
    let [body, bottom] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(INPUT_ROW_HEIGHT)]).areas(area);
    let columns = || {
        Layout::horizontal([Constraint::Ratio(sidebar, 12), Constraint::Ratio(12 - sidebar, 12)])
    };
    let [channels, chat] = columns().areas(body);
    let [mode, input] = columns().areas(bottom);
    AppLayout { channels, chat, mode, input }
}

/// Area inside a pane's border.
pub fn inner(area: Rect) -> Rect {
    Block::bordered().inner(area)
}
