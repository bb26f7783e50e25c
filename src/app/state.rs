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

use super::view::ChatView;
use crate::backend::{BackendEvent, ChatBackend};
use crate::config::Config;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Capacity of the queue carrying backend results onto the event loop.
pub const EVENT_QUEUE_CAPACITY: usize = 20;

pub struct App {
    /// Pane state; everything on screen is painted from it.
    pub view: ChatView,
    pub backend: Rc<dyn ChatBackend>,
    pub config: Config,
    pub should_quit: bool,
    /// Last backend failure, kept for diagnostics until the next success.
    pub last_error: Option<String>,
    /// Sender handed to spawned backend tasks. Bounded: tasks wait when the loop lags.
    pub event_tx: mpsc::Sender<BackendEvent>,
    pub event_rx: mpsc::Receiver<BackendEvent>,
}

impl App {
    pub fn new(config: Config, backend: Rc<dyn ChatBackend>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        Self {
            view: ChatView::new(&config),
            backend,
            config,
            should_quit: false,
            last_error: None,
            event_tx,
            event_rx,
        }
    }

    /// Messages to request on channel switch.
    #[must_use]
    pub fn history_count(&self) -> usize {
        if self.config.history_count > 0 {
            return self.config.history_count;
        }
        usize::from(self.view.log.viewport().height).max(1)
    }
}
