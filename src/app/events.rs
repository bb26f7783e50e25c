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

use super::view::ViewEvent;
use super::{App, requests};
use crate::backend::{BackendEvent, ChannelId};
use crossterm::event::{Event, KeyEventKind};
use std::io::Write;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let Some(view_event) = app.view.on_key(key) {
                handle_view_event(app, view_event);
            }
        }
        Event::Resize(width, height) => app.view.on_resize(width, height),
        _ => {}
    }
}

pub fn handle_backend_event(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::ChannelsLoaded(channels) => {
            tracing::debug!("channel list refreshed: {} channels", channels.len());
            app.last_error = None;
            app.view.set_channels(channels);
            // First load: open whatever is selected. Later refreshes keep the current channel.
            if app.view.current_channel().is_none()
                && let Some(id) = app.view.channels.selected_id().cloned()
            {
                switch_channel(app, id);
            }
        }
        BackendEvent::HistoryLoaded { channel_id, messages } => {
            app.last_error = None;
            app.view.load_history(&channel_id, messages);
        }
        BackendEvent::MessageArrived { channel_id, text } => {
            if let Some(view_event) = app.view.on_message_arrived(&channel_id, text) {
                handle_view_event(app, view_event);
            }
        }
        BackendEvent::MessageSent { channel_id, text, echo } => {
            app.last_error = None;
            app.view.on_message_sent(&channel_id, &text, echo);
        }
        BackendEvent::RequestFailed(message) => {
            tracing::error!("backend request failed: {message}");
            app.last_error = Some(message);
        }
    }
}

pub fn handle_view_event(app: &mut App, event: ViewEvent) {
    match event {
        ViewEvent::SelectionChanged(id) => switch_channel(app, id),
        ViewEvent::UnreadRaised(id) => {
            tracing::debug!("unread messages in {id}");
            if app.config.bell {
                ring_bell();
            }
        }
        ViewEvent::SubmitRequested(text) => {
            let Some(id) = app.view.current_channel().cloned() else {
                tracing::warn!("submit with no channel selected");
                return;
            };
            requests::send_message(app, id, text);
        }
        ViewEvent::QuitRequested => app.should_quit = true,
    }
}

/// Show `id` in the chat pane, mark it read and load its history.
fn switch_channel(app: &mut App, id: ChannelId) {
    tracing::debug!("switching to channel {id}");
    app.view.on_channel_switch(&id);
    requests::mark_read(app, id.clone());
    requests::fetch_messages(app, id);
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
}
