//! The generated packet registry document.
//!
//! Serialized form:
//!
//! ```json
//! {
//!   "configuration": { "clientbound": {}, "serverbound": {} },
//!   "handshake": { "clientbound": {}, "serverbound": { "minecraft:intention": { "protocol_id": 0 } } },
//!   ...
//! }
//! ```

use crate::models::{Direction, NAMESPACE_SEPARATOR, ProtocolId, State, short_name};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value stored under each packet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PacketInfo {
    pub protocol_id: ProtocolId,
}

/// Fully-qualified name → packet info, in insertion order.
pub type PacketTable = IndexMap<String, PacketInfo>;

/// A single resolved packet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryEntry {
    pub name: String,
    pub protocol_id: ProtocolId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionTables {
    #[serde(default)]
    pub clientbound: PacketTable,
    #[serde(default)]
    pub serverbound: PacketTable,
}

impl DirectionTables {
    pub fn get(&self, direction: Direction) -> &PacketTable {
        match direction {
            Direction::Clientbound => &self.clientbound,
            Direction::Serverbound => &self.serverbound,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut PacketTable {
        match direction {
            Direction::Clientbound => &mut self.clientbound,
            Direction::Serverbound => &mut self.serverbound,
        }
    }
}

/// state → direction → fully-qualified name → `{protocol_id}`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketRegistry {
    #[serde(default)]
    pub configuration: DirectionTables,
    #[serde(default)]
    pub handshake: DirectionTables,
    #[serde(default)]
    pub login: DirectionTables,
    #[serde(default)]
    pub play: DirectionTables,
    #[serde(default)]
    pub status: DirectionTables,
}

impl PacketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, state: State) -> &DirectionTables {
        match state {
            State::Configuration => &self.configuration,
            State::Handshake => &self.handshake,
            State::Login => &self.login,
            State::Play => &self.play,
            State::Status => &self.status,
        }
    }

    pub fn state_mut(&mut self, state: State) -> &mut DirectionTables {
        match state {
            State::Configuration => &mut self.configuration,
            State::Handshake => &mut self.handshake,
            State::Login => &mut self.login,
            State::Play => &mut self.play,
            State::Status => &mut self.status,
        }
    }

    pub fn table(&self, state: State, direction: Direction) -> &PacketTable {
        self.state(state).get(direction)
    }

    pub fn table_mut(&mut self, state: State, direction: Direction) -> &mut PacketTable {
        self.state_mut(state).get_mut(direction)
    }

    /// Resolve a packet's protocol id by name.
    ///
    /// `name` may be fully qualified (`minecraft:hello`) or short (`hello`).
    /// A short name matches any namespace.
    pub fn lookup(&self, state: State, direction: Direction, name: &str) -> Option<ProtocolId> {
        let table = self.table(state, direction);
        if let Some(info) = table.get(name) {
            return Some(info.protocol_id);
        }
        if name.contains(NAMESPACE_SEPARATOR) {
            return None;
        }
        table
            .iter()
            .find(|(qualified, _)| short_name(qualified) == name)
            .map(|(_, info)| info.protocol_id)
    }

    /// Entries of one (state, direction) pair, in registry order.
    pub fn entries(
        &self,
        state: State,
        direction: Direction,
    ) -> impl Iterator<Item = RegistryEntry> + '_ {
        self.table(state, direction)
            .iter()
            .map(|(name, info)| RegistryEntry {
                name: name.clone(),
                protocol_id: info.protocol_id,
            })
    }

    /// Total number of packets across all slots.
    pub fn len(&self) -> usize {
        State::ALL
            .iter()
            .flat_map(|&state| {
                Direction::ALL
                    .iter()
                    .map(move |&direction| self.table(state, direction).len())
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
