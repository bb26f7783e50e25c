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

use super::{BackendError, ChannelId, ChannelInfo, ChannelKind, ChatBackend, IncomingMessage};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{Local, TimeZone};
use serde::Deserialize;
use std::cell::{OnceCell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;

/// A workspace file holds either one workspace or a `workspaces` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkspaceSource {
    Many { workspaces: Vec<WorkspaceFile> },
    One(WorkspaceFile),
}

impl WorkspaceSource {
    fn into_workspaces(self) -> Vec<WorkspaceFile> {
        match self {
            Self::Many { workspaces } => workspaces,
            Self::One(workspace) => vec![workspace],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WorkspaceFile {
    workspace: String,
    #[serde(default = "default_user")]
    user: String,
    #[serde(default)]
    channels: Vec<ChannelFile>,
    /// Messages replayed as if other members posted them while the client runs.
    #[serde(default)]
    incoming: Vec<IncomingFile>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChannelFile {
    id: ChannelId,
    name: String,
    #[serde(default)]
    topic: String,
    #[serde(default = "default_kind")]
    kind: ChannelKind,
    #[serde(default)]
    unread: bool,
    #[serde(default)]
    messages: Vec<MessageFile>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageFile {
    /// Preformatted `HH:MM`, used when `ts` is absent.
    #[serde(default)]
    time: String,
    /// Unix timestamp in seconds, shown in local time.
    #[serde(default)]
    ts: Option<i64>,
    user: String,
    text: String,
}

impl MessageFile {
    fn time_label(&self) -> String {
        self.ts.map_or_else(|| self.time.clone(), format_timestamp)
    }

    fn render(&self) -> String {
        format_message(&self.time_label(), &self.user, &self.text)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct IncomingFile {
    channel: ChannelId,
    /// Delivery time, in milliseconds after the feed is first polled.
    #[serde(default)]
    after_ms: u64,
    user: String,
    text: String,
}

fn default_user() -> String {
    "me".to_owned()
}

const fn default_kind() -> ChannelKind {
    ChannelKind::Channel
}

const DEMO_WORKSPACE: &str = r#"{
  "workspaces": [
    {
      "workspace": "acme",
      "channels": [
        { "id": "C-general", "name": "general", "topic": "Company-wide chatter",
          "messages": [
            { "time": "09:02", "user": "alice", "text": "Morning all" },
            { "time": "09:05", "user": "bob", "text": "Deploy window is 14:00 &amp; rollback plan is in the doc" }
          ] },
        { "id": "C-random", "name": "random", "unread": true,
          "messages": [ { "time": "11:40", "user": "carol", "text": "&lt;3 the new coffee machine" } ] },
        { "id": "G-ops", "name": "ops", "kind": "group", "topic": "On-call" },
        { "id": "D-alice", "name": "alice", "kind": "direct_message",
          "messages": [ { "time": "08:55", "user": "alice", "text": "Can you review my PR today?" } ] }
      ],
      "incoming": [
        { "channel": "G-ops", "after_ms": 8000, "user": "dave", "text": "Pager fired for db-2, looking" },
        { "channel": "C-general", "after_ms": 20000, "user": "bob", "text": "Deploy starts in 10 minutes" }
      ]
    },
    {
      "workspace": "home",
      "channels": [
        { "id": "H-family", "name": "family", "topic": "Weekend plans",
          "messages": [ { "time": "07:30", "user": "sam", "text": "Pancakes on Saturday?" } ] },
        { "id": "H-sam", "name": "sam", "kind": "direct_message" }
      ],
      "incoming": [
        { "channel": "H-sam", "after_ms": 14000, "user": "sam", "text": "Can you pick up bread on the way home?" }
      ]
    }
  ]
}"#;

#[derive(Debug)]
struct LocalChannel {
    workspace: String,
    /// Name our own messages are posted under in this workspace.
    user: String,
    file: ChannelFile,
}

/// Offline backend serving one or more workspaces described by JSON files.
/// Sent and replayed messages are appended to the in-memory channel history.
#[derive(Debug)]
pub struct LocalBackend {
    channels: RefCell<Vec<LocalChannel>>,
    incoming: RefCell<VecDeque<IncomingFile>>,
    feed_start: OnceCell<Instant>,
}

impl LocalBackend {
    /// Load and merge every workspace in `paths`.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, AppError> {
        let mut workspaces = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|e| {
                tracing::error!("failed to read workspace file {}: {e}", path.display());
                AppError::WorkspaceNotFound
            })?;
            workspaces.extend(parse_workspaces(&content)?);
        }
        Self::from_workspaces(workspaces)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Self::from_workspaces(parse_workspaces(content)?)
    }

    /// Small built-in pair of workspaces used when no file is given.
    pub fn demo() -> Result<Self, AppError> {
        Self::from_json(DEMO_WORKSPACE)
    }

    fn from_workspaces(workspaces: Vec<WorkspaceFile>) -> Result<Self, AppError> {
        let mut channels = Vec::new();
        let mut incoming = Vec::new();
        let mut ids = HashSet::new();
        for workspace in workspaces {
            tracing::info!(
                workspace = %workspace.workspace,
                channels = workspace.channels.len(),
                incoming = workspace.incoming.len(),
                "loaded local workspace"
            );
            for file in workspace.channels {
                if !ids.insert(file.id.clone()) {
                    tracing::error!("duplicate channel id {} in workspace {}", file.id, workspace.workspace);
                    return Err(AppError::WorkspaceInvalid);
                }
                channels.push(LocalChannel {
                    workspace: workspace.workspace.clone(),
                    user: workspace.user.clone(),
                    file,
                });
            }
            incoming.extend(workspace.incoming);
        }
        if let Some(orphan) = incoming.iter().find(|m| !ids.contains(&m.channel)) {
            tracing::error!("incoming message for unknown channel {}", orphan.channel);
            return Err(AppError::WorkspaceInvalid);
        }
        incoming.sort_by_key(|m| m.after_ms);
        Ok(Self {
            channels: RefCell::new(channels),
            incoming: RefCell::new(incoming.into()),
            feed_start: OnceCell::new(),
        })
    }

    fn with_channel<T>(
        &self,
        channel_id: &ChannelId,
        f: impl FnOnce(&mut LocalChannel) -> T,
    ) -> Result<T, BackendError> {
        let mut channels = self.channels.borrow_mut();
        let channel = channels
            .iter_mut()
            .find(|c| &c.file.id == channel_id)
            .ok_or_else(|| BackendError::ChannelNotFound(channel_id.clone()))?;
        Ok(f(channel))
    }
}

fn parse_workspaces(content: &str) -> Result<Vec<WorkspaceFile>, AppError> {
    let source: WorkspaceSource = serde_json::from_str(content).map_err(|e| {
        tracing::error!("invalid workspace file: {e}");
        AppError::WorkspaceInvalid
    })?;
    Ok(source.into_workspaces())
}

#[async_trait(?Send)]
impl ChatBackend for LocalBackend {
    async fn list_channels(&self) -> Result<Vec<ChannelInfo>, BackendError> {
        Ok(self
            .channels
            .borrow()
            .iter()
            .map(|c| ChannelInfo {
                id: c.file.id.clone(),
                name: c.file.name.clone(),
                topic: c.file.topic.clone(),
                kind: c.file.kind,
                workspace: c.workspace.clone(),
                unread: c.file.unread,
            })
            .collect())
    }

    async fn fetch_messages(
        &self,
        channel_id: &ChannelId,
        max_count: usize,
    ) -> Result<Vec<String>, BackendError> {
        self.with_channel(channel_id, |channel| {
            let messages = &channel.file.messages;
            let skip = messages.len().saturating_sub(max_count);
            messages.iter().skip(skip).map(MessageFile::render).collect()
        })
    }

    async fn send_message(
        &self,
        channel_id: &ChannelId,
        text: &str,
    ) -> Result<String, BackendError> {
        self.with_channel(channel_id, |channel| {
            let message = MessageFile {
                time: clock_now(),
                ts: None,
                user: channel.user.clone(),
                text: text.to_owned(),
            };
            let echo = message.render();
            channel.file.messages.push(message);
            echo
        })
    }

    async fn mark_read(&self, channel_id: &ChannelId) -> Result<(), BackendError> {
        self.with_channel(channel_id, |channel| channel.file.unread = false)
    }

    async fn next_incoming(&self) -> Option<IncomingMessage> {
        let start = *self.feed_start.get_or_init(Instant::now);
        loop {
            let next = self.incoming.borrow_mut().pop_front()?;
            tokio::time::sleep_until(start + Duration::from_millis(next.after_ms)).await;
            let message =
                MessageFile { time: clock_now(), ts: None, user: next.user, text: next.text };
            let text = message.render();
            let delivered = self.with_channel(&next.channel, |channel| {
                channel.file.messages.push(message);
            });
            match delivered {
                Ok(()) => return Some(IncomingMessage { channel_id: next.channel, text }),
                Err(e) => tracing::warn!("dropping incoming message: {e}"),
            }
        }
    }
}

/// `[HH:MM] <user> text`, with HTML entities in the text decoded.
pub fn format_message(time: &str, user: &str, text: &str) -> String {
    let user = if user.is_empty() { "unknown" } else { user };
    format!("[{time}] <{user}> {}", unescape_html(text))
}

pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Unix seconds as local `HH:MM`. Out-of-range timestamps render empty.
pub fn format_timestamp(ts: i64) -> String {
    Local.timestamp_opt(ts, 0).single().map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

/// Current local wall-clock time as `HH:MM`.
fn clock_now() -> String {
    Local::now().format("%H:%M").to_string()
}
