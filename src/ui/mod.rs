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

mod channels;
mod chat;
mod input;
pub mod layout;
mod mode;
pub mod painter;
pub mod theme;

use crate::app::view::ChatView;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

pub fn render(frame: &mut Frame, view: &ChatView) {
    render_view(view, frame.buffer_mut());
}

/// Paint every pane of `view` into `buf`. Reads the view only, so painting the
/// same view twice yields the same grid.
pub fn render_view(view: &ChatView, buf: &mut Buffer) {
    let areas = view.layout();

    render_frame(buf, areas.channels, "Channels");
    channels::render(&view.channels, pane(areas.channels, buf), buf);

    render_frame(buf, areas.chat, &view.chat_title());
    chat::render(&view.log, pane(areas.chat, buf), buf);

    render_frame(buf, areas.mode, "");
    mode::render(view.mode, pane(areas.mode, buf), buf);

    render_frame(buf, areas.input, "");
    input::render(&view.input, pane(areas.input, buf), buf);
}

/// Inner area of a pane, clipped to the grid in case the view was laid out for a
/// larger terminal than the one being drawn.
fn pane(area: Rect, buf: &Buffer) -> Rect {
    layout::inner(area).intersection(buf.area)
}

fn render_frame(buf: &mut Buffer, area: Rect, title: &str) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let mut block = Block::bordered().border_style(Style::default().fg(theme::BORDER));
    if !title.is_empty() {
        block = block.title(format!(" {title} ")).title_style(Style::default().fg(theme::TITLE));
    }
    block.render(area, buf);
}
