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

pub mod channels;
pub mod chat;
mod events;
pub mod input;
pub mod keys;
mod requests;
mod state;
pub mod view;
pub mod wrap;

// Re-export the shell types so `crate::app::App` etc. work.
pub use events::{handle_backend_event, handle_terminal_event, handle_view_event};
pub use state::{App, EVENT_QUEUE_CAPACITY};
pub use view::{ChatView, ViewEvent};

use crate::backend::ChatBackend;
use crate::config::Config;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use ratatui::DefaultTerminal;
use std::rc::Rc;
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub fn create_app(config: Config, backend: Rc<dyn ChatBackend>) -> App {
    App::new(config, backend)
}

/// Request the channel list and start forwarding incoming messages. Must be
/// called inside a `LocalSet`.
pub fn start_backend(app: &App) {
    requests::list_channels(app);
    requests::listen_incoming(app);
}

/// Run until the user quits. Must be called inside a `LocalSet`: backend calls run
/// as local tasks and report back through `app.event_rx`.
pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let size = terminal.size()?;
    app.view.on_resize(size.width, size.height);
    start_backend(app);

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(event) = events.next() => handle_terminal_event(app, event?),
            Some(event) = app.event_rx.recv() => {
                handle_backend_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first, keeps typing responsive
            if let Some(Some(event)) = events.next().now_or_never() {
                handle_terminal_event(app, event?);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => handle_backend_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            return Ok(());
        }

        // Phase 3: render once
        terminal.draw(|f| crate::ui::render(f, &app.view))?;
        last_render = Instant::now();
    }
}
