//! Reverse index over a previously generated registry.

use indexmap::IndexMap;
use protoreg_api::{Direction, PacketInfo, ProtocolId, State, strip_namespace};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// A previously generated registry as read from disk.
///
/// Only the top level is typed. Everything below it is walked by hand so that
/// a malformed state, direction or entry is skipped on its own instead of
/// rejecting the whole document.
pub type PriorRegistryDocument = IndexMap<String, Value>;

/// `(state, direction, protocol_id)` → short name assigned by an earlier run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorRegistryIndex {
    names: HashMap<(State, Direction, ProtocolId), String>,
}

impl PriorRegistryIndex {
    /// An index where every lookup misses, as on a first run.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_document(document: &PriorRegistryDocument, namespace: &str) -> Self {
        let mut names = HashMap::new();

        for (state_key, directions) in document {
            let Ok(state) = state_key.parse::<State>() else {
                warn!("Skipping unknown state `{}` in prior registry", state_key);
                continue;
            };
            let Some(directions) = directions.as_object() else {
                warn!("Skipping prior state `{}`: not an object", state_key);
                continue;
            };
            for (direction_key, packets) in directions {
                let Ok(direction) = direction_key.parse::<Direction>() else {
                    warn!(
                        "Skipping unknown direction `{}/{}` in prior registry",
                        state_key, direction_key
                    );
                    continue;
                };
                let Some(packets) = packets.as_object() else {
                    warn!(
                        "Skipping prior direction `{}/{}`: not an object",
                        state_key, direction_key
                    );
                    continue;
                };
                for (qualified, info) in packets {
                    let info = match PacketInfo::deserialize(info) {
                        Ok(info) => info,
                        Err(e) => {
                            warn!("Skipping prior packet `{}`: {}", qualified, e);
                            continue;
                        }
                    };
                    match strip_namespace(namespace, qualified) {
                        Some(short) => {
                            names.insert((state, direction, info.protocol_id), short.to_string());
                        }
                        None => warn!(
                            "Skipping prior packet `{}` outside namespace `{}`",
                            qualified, namespace
                        ),
                    }
                }
            }
        }

        Self { names }
    }

    pub fn get(&self, state: State, direction: Direction, protocol_id: ProtocolId) -> Option<&str> {
        self.names
            .get(&(state, direction, protocol_id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
