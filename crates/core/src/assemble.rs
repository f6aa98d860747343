//! Builds the output registry from a schema and an optional prior registry.

use crate::prior::PriorRegistryIndex;
use crate::reconcile::{NameReconciler, NameSource};
use crate::schema::{SchemaDocument, ShapeMismatch};
use protoreg_api::{DEFAULT_NAMESPACE, Direction, PacketInfo, PacketRegistry, State};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Namespace prefixed to every packet name.
    pub namespace: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// What happened to one (state, direction) slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub state: State,
    pub direction: Direction,
    /// Set when the packet-id table could not be located.
    pub mismatch: Option<ShapeMismatch>,
    pub entries: usize,
    /// Entries whose name came from the prior registry.
    pub carried_over: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub slots: Vec<SlotReport>,
}

impl GenerationReport {
    pub fn total_entries(&self) -> usize {
        self.slots.iter().map(|slot| slot.entries).sum()
    }

    pub fn carried_over(&self) -> usize {
        self.slots.iter().map(|slot| slot.carried_over).sum()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &SlotReport> {
        self.slots.iter().filter(|slot| slot.mismatch.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub registry: PacketRegistry,
    pub report: GenerationReport,
}

pub struct RegistryAssembler<'a> {
    schema: &'a SchemaDocument,
    prior: &'a PriorRegistryIndex,
    options: &'a GeneratorOptions,
}

impl<'a> RegistryAssembler<'a> {
    pub fn new(
        schema: &'a SchemaDocument,
        prior: &'a PriorRegistryIndex,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            schema,
            prior,
            options,
        }
    }

    pub fn assemble(&self) -> Assembly {
        let reconciler = NameReconciler::new(self.prior, &self.options.namespace);

        // `configuration` stays at its default: both directions present, no entries.
        let mut registry = PacketRegistry::new();
        let mut report = GenerationReport::default();

        for state in State::GENERATED {
            for direction in Direction::ALL {
                let extraction = self.schema.extract(state, direction);
                if let Some(mismatch) = extraction.mismatch() {
                    debug!("No packet ids for {}/{}: {}", state, direction, mismatch);
                }

                let table = registry.table_mut(state, direction);
                let mut carried_over = 0;
                for reconciled in reconciler.resolve_all(state, direction, extraction.packets()) {
                    if reconciled.source == NameSource::Prior {
                        carried_over += 1;
                    }
                    let entry = reconciled.entry;
                    let info = PacketInfo {
                        protocol_id: entry.protocol_id,
                    };
                    if let Some(replaced) = table.insert(entry.name, info) {
                        warn!(
                            "{}/{}: packet id {} replaces id {} under the same name",
                            state, direction, info.protocol_id, replaced.protocol_id
                        );
                    }
                }

                report.slots.push(SlotReport {
                    state,
                    direction,
                    mismatch: extraction.mismatch().cloned(),
                    entries: table.len(),
                    carried_over,
                });
            }
        }

        Assembly { registry, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_and_missing_slots_are_empty() {
        let schema = SchemaDocument::new(json!({}));
        let prior = PriorRegistryIndex::empty();
        let options = GeneratorOptions::default();

        let assembly = RegistryAssembler::new(&schema, &prior, &options).assemble();

        assert!(assembly.registry.is_empty());
        assert_eq!(assembly.report.slots.len(), 8);
        assert_eq!(assembly.report.mismatches().count(), 8);
        assert_eq!(assembly.report.total_entries(), 0);
    }

    #[test]
    fn test_custom_namespace() {
        let schema = SchemaDocument::new(json!({
            "login": { "toServer": { "types": { "packet": ["container", [
                { "name": "name", "type": ["mapper", { "type": "varint", "mappings": { "0x00": "hello" } }] }
            ]] } } }
        }));
        let prior = PriorRegistryIndex::empty();
        let options = GeneratorOptions {
            namespace: "proxy".to_string(),
        };

        let assembly = RegistryAssembler::new(&schema, &prior, &options).assemble();

        assert_eq!(
            assembly
                .registry
                .lookup(State::Login, Direction::Serverbound, "proxy:hello"),
            Some(0)
        );
        assert_eq!(assembly.report.total_entries(), 1);
        assert_eq!(assembly.report.mismatches().count(), 7);
    }

    #[test]
    fn test_name_collision_keeps_first_position() {
        let schema = SchemaDocument::new(json!({
            "play": { "toClient": { "types": { "packet": ["container", [
                { "name": "name", "type": ["mapper", { "type": "varint", "mappings": {
                    "0x00": "bundle", "0x01": "ping", "0x02": "bundle"
                } }] }
            ]] } } }
        }));
        let prior = PriorRegistryIndex::empty();
        let options = GeneratorOptions::default();

        let assembly = RegistryAssembler::new(&schema, &prior, &options).assemble();
        let names: Vec<_> = assembly
            .registry
            .entries(State::Play, Direction::Clientbound)
            .map(|e| (e.name, e.protocol_id))
            .collect();

        assert_eq!(
            names,
            vec![
                ("minecraft:bundle".to_string(), 2),
                ("minecraft:ping".to_string(), 1)
            ]
        );
    }
}
