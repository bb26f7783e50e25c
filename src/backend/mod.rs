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

pub mod local;

pub use local::LocalBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversation variant. The declaration order is the sort order in the channel pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Channel,
    Group,
    DirectMessage,
}

impl ChannelKind {
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Channel => '#',
            Self::Group => '+',
            Self::DirectMessage => '@',
        }
    }
}

/// A joined conversation as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: ChannelId,
    pub name: String,
    pub topic: String,
    pub kind: ChannelKind,
    pub workspace: String,
    pub unread: bool,
}

impl ChannelInfo {
    /// Pane label: ` [workspace] #name`. The leading space is where the unread marker goes.
    #[must_use]
    pub fn label(&self) -> String {
        format!(" [{}] {}{}", self.workspace, self.kind.prefix(), self.name)
    }

    /// Chat pane title: `name - topic`, or just the name without a topic.
    #[must_use]
    pub fn title(&self) -> String {
        if self.topic.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.topic)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),
}

/// Chat service consumed by the app shell. Calls may block on I/O; their results
/// are marshalled back onto the event loop as [`BackendEvent`]s.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn list_channels(&self) -> Result<Vec<ChannelInfo>, BackendError>;

    /// Formatted messages for the channel, oldest first, at most `max_count`.
    async fn fetch_messages(
        &self,
        channel_id: &ChannelId,
        max_count: usize,
    ) -> Result<Vec<String>, BackendError>;

    /// Post `text`. Returns the formatted message as it should appear in the log.
    async fn send_message(&self, channel_id: &ChannelId, text: &str)
    -> Result<String, BackendError>;

    async fn mark_read(&self, channel_id: &ChannelId) -> Result<(), BackendError>;

    /// Wait for the next message posted by someone else. `None` once the feed has ended.
    async fn next_incoming(&self) -> Option<IncomingMessage>;
}

/// A message from another member, already formatted for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub channel_id: ChannelId,
    pub text: String,
}

/// Results delivered from backend tasks to the App/UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// Channel list refresh completed.
    ChannelsLoaded(Vec<ChannelInfo>),
    /// History fetch for a channel completed.
    HistoryLoaded { channel_id: ChannelId, messages: Vec<String> },
    /// A new message was observed for a channel.
    MessageArrived { channel_id: ChannelId, text: String },
    /// The user's message was accepted. `text` is what was submitted, `echo` its formatted form.
    MessageSent { channel_id: ChannelId, text: String, echo: String },
    /// A backend call failed. State stays as it was.
    RequestFailed(String),
}
