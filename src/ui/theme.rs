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

use ratatui::style::{Color, Style};

// Pane items
pub const ITEM_FG: Color = Color::White;
pub const ITEM_BG: Color = Color::Black;

// Pane chrome
pub const BORDER: Color = Color::DarkGray;
pub const TITLE: Color = Color::White;

/// Regular text in any pane.
pub const fn item() -> Style {
    Style::new().fg(ITEM_FG).bg(ITEM_BG)
}

/// Inverted colors: selected channel row and the input cursor cell.
pub const fn highlight() -> Style {
    Style::new().fg(ITEM_BG).bg(ITEM_FG)
}
