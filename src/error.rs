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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Configuration file is invalid")]
    ConfigInvalid,
    #[error("Workspace file not found")]
    WorkspaceNotFound,
    #[error("Workspace file is invalid")]
    WorkspaceInvalid,
}

impl AppError {
    pub const CONFIG_INVALID_EXIT_CODE: i32 = 20;
    pub const WORKSPACE_NOT_FOUND_EXIT_CODE: i32 = 21;
    pub const WORKSPACE_INVALID_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigInvalid => Self::CONFIG_INVALID_EXIT_CODE,
            Self::WorkspaceNotFound => Self::WORKSPACE_NOT_FOUND_EXIT_CODE,
            Self::WorkspaceInvalid => Self::WORKSPACE_INVALID_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ConfigInvalid => {
                "The configuration file could not be parsed. Fix the JSON or pass another file with `--config`."
            }
            Self::WorkspaceNotFound => "The workspace file passed with `--workspace` does not exist.",
            Self::WorkspaceInvalid => "The workspace file is not a valid workspace description.",
        }
    }
}
