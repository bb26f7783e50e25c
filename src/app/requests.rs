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

use super::App;
use crate::backend::{BackendEvent, ChannelId, IncomingMessage};
use std::rc::Rc;

// Each request runs as a local task and reports back through the app's event queue.
// A failed call only produces `RequestFailed`; view state is left as it was.

pub(super) fn list_channels(app: &App) {
    let backend = Rc::clone(&app.backend);
    let tx = app.event_tx.clone();
    tokio::task::spawn_local(async move {
        let event = match backend.list_channels().await {
            Ok(channels) => BackendEvent::ChannelsLoaded(channels),
            Err(e) => BackendEvent::RequestFailed(format!("list channels: {e}")),
        };
        let _ = tx.send(event).await;
    });
}

pub(super) fn fetch_messages(app: &App, channel_id: ChannelId) {
    let backend = Rc::clone(&app.backend);
    let tx = app.event_tx.clone();
    let count = app.history_count();
    tokio::task::spawn_local(async move {
        let event = match backend.fetch_messages(&channel_id, count).await {
            Ok(messages) => BackendEvent::HistoryLoaded { channel_id, messages },
            Err(e) => BackendEvent::RequestFailed(format!("fetch {channel_id}: {e}")),
        };
        let _ = tx.send(event).await;
    });
}

pub(super) fn mark_read(app: &App, channel_id: ChannelId) {
    let backend = Rc::clone(&app.backend);
    let tx = app.event_tx.clone();
    tokio::task::spawn_local(async move {
        if let Err(e) = backend.mark_read(&channel_id).await {
            let _ = tx.send(BackendEvent::RequestFailed(format!("mark {channel_id} read: {e}"))).await;
        }
    });
}

pub(super) fn send_message(app: &App, channel_id: ChannelId, text: String) {
    let backend = Rc::clone(&app.backend);
    let tx = app.event_tx.clone();
    tokio::task::spawn_local(async move {
        let event = match backend.send_message(&channel_id, &text).await {
            Ok(echo) => BackendEvent::MessageSent { channel_id, text, echo },
            Err(e) => BackendEvent::RequestFailed(format!("send to {channel_id}: {e}")),
        };
        let _ = tx.send(event).await;
    });
}

/// Forward messages from other members until the feed ends or the app stops listening.
pub(super) fn listen_incoming(app: &App) {
    let backend = Rc::clone(&app.backend);
    let tx = app.event_tx.clone();
    tokio::task::spawn_local(async move {
        while let Some(IncomingMessage { channel_id, text }) = backend.next_incoming().await {
            if tx.send(BackendEvent::MessageArrived { channel_id, text }).await.is_err() {
                return;
            }
        }
        tracing::debug!("incoming message feed ended");
    });
}
