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

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "channel-term", about = "Terminal chat client with channel, log and input panes")]
pub struct Cli {
    /// Config file (defaults to <config dir>/channel-term/config.json)
    #[arg(long, short)]
    pub config: Option<std::path::PathBuf>,

    /// Workspace JSON file served by the offline backend; repeat to join several
    /// workspaces (defaults to a built-in demo)
    #[arg(long, short)]
    pub workspace: Vec<std::path::PathBuf>,

    /// Write tracing diagnostics to this file
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, requires = "log_file")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long, requires = "log_file")]
    pub log_append: bool,
}
