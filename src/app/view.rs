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

use super::channels::{ChannelEntry, ChannelList};
use super::chat::MessageLog;
use super::input::InputState;
use super::keys::{Action, InputMode, KeyMap, key_name};
use crate::backend::{ChannelId, ChannelInfo};
use crate::config::Config;
use crate::ui::layout::{self, AppLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::collections::HashMap;

/// Notifications for the host. The view never performs I/O itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Channel selection moved; the host switches channel and marks it read.
    SelectionChanged(ChannelId),
    /// A channel other than the current one got a message and was newly marked unread.
    UnreadRaised(ChannelId),
    /// The user asked to send the input line.
    SubmitRequested(String),
    QuitRequested,
}

/// The three panes plus mode and layout: everything a frame is painted from.
#[derive(Debug)]
pub struct ChatView {
    pub channels: ChannelList,
    pub log: MessageLog,
    pub input: InputState,
    pub mode: InputMode,
    keymap: KeyMap,
    sidebar_width: u16,
    layout: AppLayout,
    current: Option<ChannelId>,
    infos: HashMap<ChannelId, ChannelInfo>,
}

impl ChatView {
    pub fn new(config: &Config) -> Self {
        Self {
            channels: ChannelList::new(),
            log: MessageLog::new(config.page_step),
            input: InputState::new(),
            mode: InputMode::Command,
            keymap: KeyMap::with_overrides(&config.key_map),
            sidebar_width: config.sidebar_width,
            layout: AppLayout::default(),
            current: None,
            infos: HashMap::new(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> AppLayout {
        self.layout
    }

    #[must_use]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    #[must_use]
    pub fn current_channel(&self) -> Option<&ChannelId> {
        self.current.as_ref()
    }

    /// Chat pane title for the current channel.
    #[must_use]
    pub fn chat_title(&self) -> String {
        self.current
            .as_ref()
            .and_then(|id| self.infos.get(id))
            .map(ChannelInfo::title)
            .unwrap_or_default()
    }

    /// Lay the panes out for a terminal of `width` x `height` cells.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.layout = layout::compute(Rect::new(0, 0, width, height), self.sidebar_width);
        self.channels.set_viewport(layout::inner(self.layout.channels));
        self.log.set_viewport(layout::inner(self.layout.chat));
        self.input.set_width(layout::inner(self.layout.input).width);
        tracing::debug!(width, height, "view resized");
    }

    /// Replace the channel list after a refresh, sorted by workspace, kind and name.
    pub fn set_channels(&mut self, mut channels: Vec<ChannelInfo>) {
        channels.sort_by(|a, b| {
            (&a.workspace, a.kind, &a.name).cmp(&(&b.workspace, b.kind, &b.name))
        });
        let entries = channels.iter().map(ChannelEntry::from_info).collect();
        self.infos = channels.into_iter().map(|c| (c.id.clone(), c)).collect();
        self.channels.set_entries(entries);
    }

    /// Make `id` the channel shown in the chat pane. The log is emptied until
    /// its history arrives through [`ChatView::load_history`].
    pub fn on_channel_switch(&mut self, id: &ChannelId) {
        self.channels.set_read(id);
        self.log.clear();
        self.current = Some(id.clone());
    }

    /// Append fetched history. Results for a channel that is no longer current are dropped.
    pub fn load_history(&mut self, id: &ChannelId, messages: Vec<String>) -> bool {
        if self.current.as_ref() != Some(id) {
            tracing::debug!("dropping stale history for {id}");
            return false;
        }
        self.log.append_all(messages);
        true
    }

    pub fn on_message_arrived(&mut self, id: &ChannelId, text: String) -> Option<ViewEvent> {
        if self.current.as_ref() == Some(id) {
            self.log.append(text);
            return None;
        }
        self.channels.set_unread(id).then(|| ViewEvent::UnreadRaised(id.clone()))
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Option<ViewEvent> {
        let name = key_name(key)?;
        if let Some(action) = self.keymap.resolve(self.mode, &name) {
            return self.apply(action);
        }
        if self.mode == InputMode::Insert
            && let KeyCode::Char(c) = key.code
            && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            self.input.insert_char(c);
        }
        None
    }

    pub fn apply(&mut self, action: Action) -> Option<ViewEvent> {
        match action {
            Action::ModeInsert => self.mode = InputMode::Insert,
            Action::ModeCommand => self.mode = InputMode::Command,
            Action::ChannelUp => {
                return self.channels.move_selection_up().map(ViewEvent::SelectionChanged);
            }
            Action::ChannelDown => {
                return self.channels.move_selection_down().map(ViewEvent::SelectionChanged);
            }
            Action::ChannelTop => return self.jump(ChannelList::move_to_top),
            Action::ChannelBottom => return self.jump(ChannelList::move_to_bottom),
            Action::ChatUp => self.log.scroll_up(),
            Action::ChatDown => self.log.scroll_down(),
            Action::Help => self.log.replace_all(self.keymap.help_lines()),
            Action::Quit => return Some(ViewEvent::QuitRequested),
            Action::Send => {
                if !self.input.is_empty() {
                    return Some(ViewEvent::SubmitRequested(self.input.text()));
                }
            }
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Space => {
                self.input.insert_char(' ');
            }
        }
        None
    }

    fn jump(&mut self, motion: fn(&mut ChannelList)) -> Option<ViewEvent> {
        let before = self.channels.selected_id().cloned();
        motion(&mut self.channels);
        let after = self.channels.selected_id().cloned();
        if after == before { None } else { after.map(ViewEvent::SelectionChanged) }
    }

    /// The host confirmed delivery of `sent` to `id`. The echo is only shown, and the
    /// input only cleared, while that channel is still current; otherwise the next
    /// history fetch carries the message and the input holds a new draft.
    pub fn on_message_sent(&mut self, id: &ChannelId, sent: &str, echo: String) {
        if self.current.as_ref() != Some(id) {
            tracing::debug!("dropping echo for {id}, no longer current");
            return;
        }
        if self.input.text() == sent {
            self.input.clear();
        }
        self.log.append(echo);
    }
}
