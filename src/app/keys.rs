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

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Command,
    Insert,
}

impl InputMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Command => "COMMAND",
            Self::Insert => "INSERT",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Insert => "insert",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    ModeInsert,
    ModeCommand,
    ChannelUp,
    ChannelDown,
    ChannelTop,
    ChannelBottom,
    ChatUp,
    ChatDown,
    Help,
    Quit,
    Send,
    CursorLeft,
    CursorRight,
    Backspace,
    Delete,
    Space,
}

impl Action {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ModeInsert => "mode-insert",
            Self::ModeCommand => "mode-command",
            Self::ChannelUp => "channel-up",
            Self::ChannelDown => "channel-down",
            Self::ChannelTop => "channel-top",
            Self::ChannelBottom => "channel-bottom",
            Self::ChatUp => "chat-up",
            Self::ChatDown => "chat-down",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Send => "send",
            Self::CursorLeft => "cursor-left",
            Self::CursorRight => "cursor-right",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Space => "space",
        }
    }
}

const COMMAND_DEFAULTS: &[(&str, Action)] = &[
    ("i", Action::ModeInsert),
    ("k", Action::ChannelUp),
    ("<up>", Action::ChannelUp),
    ("j", Action::ChannelDown),
    ("<down>", Action::ChannelDown),
    ("g", Action::ChannelTop),
    ("G", Action::ChannelBottom),
    ("<previous>", Action::ChatUp),
    ("C-b", Action::ChatUp),
    ("C-u", Action::ChatUp),
    ("<next>", Action::ChatDown),
    ("C-f", Action::ChatDown),
    ("C-d", Action::ChatDown),
    ("q", Action::Quit),
    ("?", Action::Help),
];

const INSERT_DEFAULTS: &[(&str, Action)] = &[
    ("<left>", Action::CursorLeft),
    ("<right>", Action::CursorRight),
    ("<enter>", Action::Send),
    ("<escape>", Action::ModeCommand),
    ("<backspace>", Action::Backspace),
    ("<delete>", Action::Delete),
    ("<space>", Action::Space),
];

/// Per-mode key name -> action bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<InputMode, HashMap<String, Action>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for (mode, defaults) in
            [(InputMode::Command, COMMAND_DEFAULTS), (InputMode::Insert, INSERT_DEFAULTS)]
        {
            bindings.insert(
                mode,
                defaults.iter().map(|(key, action)| ((*key).to_owned(), *action)).collect(),
            );
        }
        Self { bindings }
    }
}

impl KeyMap {
    /// Defaults with config overrides layered on top.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<InputMode, HashMap<String, Action>>) -> Self {
        let mut map = Self::default();
        for (mode, keys) in overrides {
            let bindings = map.bindings.entry(*mode).or_default();
            for (key, action) in keys {
                bindings.insert(key.clone(), *action);
            }
        }
        map
    }

    #[must_use]
    pub fn resolve(&self, mode: InputMode, key: &str) -> Option<Action> {
        self.bindings.get(&mode).and_then(|keys| keys.get(key)).copied()
    }

    /// Usage text listing every binding, sorted by mode then key.
    #[must_use]
    pub fn help_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "channel-term - chat client for your terminal".to_owned(),
            String::new(),
            "USAGE:".to_owned(),
            "    channel-term --config [path-to-config] --workspace [path-to-workspace]".to_owned(),
            String::new(),
            "KEY BINDINGS:".to_owned(),
            String::new(),
        ];
        let sorted: BTreeMap<InputMode, BTreeMap<&str, Action>> = self
            .bindings
            .iter()
            .map(|(mode, keys)| (*mode, keys.iter().map(|(k, a)| (k.as_str(), *a)).collect()))
            .collect();
        for (mode, keys) in sorted {
            lines.push(format!("    {}", mode.to_string().to_uppercase()));
            lines.push(String::new());
            for (key, action) in keys {
                lines.push(format!("    {key:<12}{:<15}", action.name()));
            }
            lines.push(String::new());
        }
        lines
    }
}

/// Name a key the way bindings refer to it: plain characters as themselves,
/// `C-x` for Ctrl+x, and `<name>` for special keys. `None` for keys without a name.
pub fn key_name(key: KeyEvent) -> Option<String> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let name = match key.code {
        KeyCode::Char(' ') if !ctrl => "<space>".to_owned(),
        KeyCode::Char(c) if ctrl => format!("C-{}", c.to_ascii_lowercase()),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "<enter>".to_owned(),
        KeyCode::Esc => "<escape>".to_owned(),
        KeyCode::Backspace => "<backspace>".to_owned(),
        KeyCode::Delete => "<delete>".to_owned(),
        KeyCode::Left => "<left>".to_owned(),
        KeyCode::Right => "<right>".to_owned(),
        KeyCode::Up => "<up>".to_owned(),
        KeyCode::Down => "<down>".to_owned(),
        KeyCode::PageUp => "<previous>".to_owned(),
        KeyCode::PageDown => "<next>".to_owned(),
        KeyCode::Home => "<home>".to_owned(),
        KeyCode::End => "<end>".to_owned(),
        KeyCode::Tab => "<tab>".to_owned(),
        KeyCode::F(n) => format!("<f{n}>"),
        _ => return None,
    };
    Some(name)
}
