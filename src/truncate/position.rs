use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the omission marker goes in the truncated result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub enum Position {
    /// Marker first, followed by the tail of the input
    Left,
    /// Head and tail of the input around the marker
    Center,
    /// Head of the input, marker last
    #[default]
    Right,
    /// Marker starts at this zero-based character index of the result
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid position '{0}': expected left, center, right, or a non-negative index")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "center" => Ok(Position::Center),
            "right" => Ok(Position::Right),
            other => other
                .parse::<usize>()
                .map(Position::Index)
                .map_err(|_| ParsePositionError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Left => write!(f, "left"),
            Position::Center => write!(f, "center"),
            Position::Right => write!(f, "right"),
            Position::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Wire form: either a bare index or one of the named anchors
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Index(usize),
    Name(String),
}

impl TryFrom<RawPosition> for Position {
    type Error = ParsePositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        match raw {
            RawPosition::Index(index) => Ok(Position::Index(index)),
            RawPosition::Name(name) => name.parse(),
        }
    }
}

impl From<Position> for RawPosition {
    fn from(position: Position) -> Self {
        match position {
            Position::Index(index) => RawPosition::Index(index),
            named => RawPosition::Name(named.to_string()),
        }
    }
}
