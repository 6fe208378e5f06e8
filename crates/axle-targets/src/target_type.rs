//! Target types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// The kind of binary a target descriptor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetType {
    /// Standalone game executable.
    #[default]
    Game,
    /// Networked game client without server code.
    Client,
    /// Dedicated server without client-only content.
    Server,
    /// Editor build hosting the game modules.
    Editor,
    /// Standalone utility program built against engine libraries.
    Program,
}

impl TargetType {
    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Game => "Game",
            TargetType::Client => "Client",
            TargetType::Server => "Server",
            TargetType::Editor => "Editor",
            TargetType::Program => "Program",
        }
    }

    /// Every target type, in listing order.
    pub fn all() -> &'static [TargetType] {
        &[
            TargetType::Game,
            TargetType::Client,
            TargetType::Server,
            TargetType::Editor,
            TargetType::Program,
        ]
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = TargetError;

    /// Resolve a target type by canonical name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownTargetType {
                name: s.to_string(),
            })
    }
}
