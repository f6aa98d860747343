use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric packet identifier, scoped to one (state, direction) pair.
pub type ProtocolId = u32;

/// Connection phase within which packet identifiers are scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Placeholder phase. Always present in a registry, never populated.
    Configuration,
    Handshake,
    Login,
    Play,
    Status,
}

impl State {
    /// Every state, in registry output order.
    pub const ALL: [State; 5] = [
        State::Configuration,
        State::Handshake,
        State::Login,
        State::Play,
        State::Status,
    ];

    /// States whose packet tables are read from the protocol schema.
    pub const GENERATED: [State; 4] = [State::Handshake, State::Login, State::Play, State::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::Configuration => "configuration",
            State::Handshake => "handshake",
            State::Login => "login",
            State::Play => "play",
            State::Status => "status",
        }
    }

    /// Section key this state uses in the protocol schema.
    /// Returns `None` for the placeholder state, which the schema never describes.
    pub fn schema_key(&self) -> Option<&'static str> {
        match self {
            State::Configuration => None,
            State::Handshake => Some("handshaking"),
            State::Login => Some("login"),
            State::Play => Some("play"),
            State::Status => Some("status"),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.schema_key().is_none()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ApiError::UnknownState(s.to_string()))
    }
}

/// Which peer sends the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Server to client
    Clientbound,
    /// Client to server
    Serverbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clientbound, Direction::Serverbound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Clientbound => "clientbound",
            Direction::Serverbound => "serverbound",
        }
    }

    /// Section key this direction uses in the protocol schema.
    pub fn schema_key(&self) -> &'static str {
        match self {
            Direction::Clientbound => "toClient",
            Direction::Serverbound => "toServer",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| ApiError::UnknownDirection(s.to_string()))
    }
}
