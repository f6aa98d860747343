//! Picks the final name for each declared packet.
//!
//! The protocol id is the reconciliation key. A name from the prior registry
//! always beats the schema's default for the same id; ids the new schema no
//! longer declares are never emitted.

use crate::prior::PriorRegistryIndex;
use crate::schema::PacketId;
use protoreg_api::{Direction, RegistryEntry, State, qualify};

/// Where a resolved short name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// Carried over from the prior registry.
    Prior,
    /// The schema's default name.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub entry: RegistryEntry,
    pub source: NameSource,
}

pub struct NameReconciler<'a> {
    prior: &'a PriorRegistryIndex,
    namespace: &'a str,
}

impl<'a> NameReconciler<'a> {
    pub fn new(prior: &'a PriorRegistryIndex, namespace: &'a str) -> Self {
        Self { prior, namespace }
    }

    pub fn resolve(&self, state: State, direction: Direction, packet: &PacketId) -> Reconciled {
        let (short, source) = match self.prior.get(state, direction, packet.protocol_id) {
            Some(prior) => (prior, NameSource::Prior),
            None => (packet.default_name.as_str(), NameSource::Default),
        };

        Reconciled {
            entry: RegistryEntry {
                name: qualify(self.namespace, short),
                protocol_id: packet.protocol_id,
            },
            source,
        }
    }

    pub fn resolve_all(
        &self,
        state: State,
        direction: Direction,
        packets: &[PacketId],
    ) -> Vec<Reconciled> {
        packets
            .iter()
            .map(|packet| self.resolve(state, direction, packet))
            .collect()
    }
}
