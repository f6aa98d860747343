//! Typed view over the part of a protocol schema that declares packet ids.
//!
//! The schema is a loosely structured JSON tree. For one (state, direction)
//! slot the packet-id table lives at:
//!
//! ```text
//! <state key> . <direction key> . types . packet[1]        (container fields)
//!     -> field with "name": "name"
//!     -> .type[1].mappings                                  ({"0x00": "hello", ...})
//! ```
//!
//! Everything else in the schema is ignored. All deep-path access is confined
//! to [`PacketIdTable::locate`]; callers only see an [`Extraction`].

use protoreg_api::{Direction, ProtocolId, State};
use serde_json::Value;
use thiserror::Error;

/// A parsed protocol schema. Treated as read-only and possibly malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    root: Value,
}

impl SchemaDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Extract the packet-id table of one slot.
    pub fn extract(&self, state: State, direction: Direction) -> Extraction {
        match PacketIdTable::locate(self, state, direction) {
            Ok(table) => Extraction::Found(table),
            Err(mismatch) => Extraction::Missing(mismatch),
        }
    }
}

/// The first step of the packet-id path that was absent or had the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[error("state {0} has no schema section")]
    PlaceholderState(State),
    #[error("schema has no `{0}` section")]
    MissingState(&'static str),
    #[error("section `{state}` has no `{direction}` entry")]
    MissingDirection {
        state: &'static str,
        direction: &'static str,
    },
    #[error("direction section has no `types` object")]
    MissingTypes,
    #[error("`types` has no `packet` definition")]
    MissingPacketType,
    #[error("`packet` is not a container with a field list")]
    PacketNotContainer,
    #[error("`packet` container has no field named `name`")]
    MissingNameField,
    #[error("`name` field type is not a mapper")]
    NameFieldNotMapper,
    #[error("`name` mapper has no `mappings` object")]
    MissingMappings,
    #[error("packet id `{0}` is not a hexadecimal integer")]
    InvalidProtocolId(String),
    #[error("packet id `{0}` maps to a name that is neither a string nor a number")]
    UnsupportedName(String),
}

/// One declared packet: its id and the name the schema suggests for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketId {
    pub protocol_id: ProtocolId,
    pub default_name: String,
}

/// All packets declared for one (state, direction) slot, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketIdTable {
    packets: Vec<PacketId>,
}

impl PacketIdTable {
    pub fn packets(&self) -> &[PacketId] {
        &self.packets
    }

    fn locate(
        schema: &SchemaDocument,
        state: State,
        direction: Direction,
    ) -> Result<Self, ShapeMismatch> {
        let state_key = state
            .schema_key()
            .ok_or(ShapeMismatch::PlaceholderState(state))?;
        let direction_key = direction.schema_key();

        let section = schema
            .root
            .get(state_key)
            .ok_or(ShapeMismatch::MissingState(state_key))?;
        let packet = section
            .get(direction_key)
            .ok_or(ShapeMismatch::MissingDirection {
                state: state_key,
                direction: direction_key,
            })?
            .get("types")
            .ok_or(ShapeMismatch::MissingTypes)?
            .get("packet")
            .ok_or(ShapeMismatch::MissingPacketType)?;

        // ["container", [ {name, type}, ... ]]
        let fields = packet
            .get(1)
            .and_then(Value::as_array)
            .ok_or(ShapeMismatch::PacketNotContainer)?;
        let name_field = fields
            .iter()
            .find(|field| field.get("name").and_then(Value::as_str) == Some("name"))
            .ok_or(ShapeMismatch::MissingNameField)?;

        // ["mapper", { "type": "varint", "mappings": {...} }]
        let mappings = name_field
            .get("type")
            .and_then(|ty| ty.get(1))
            .ok_or(ShapeMismatch::NameFieldNotMapper)?
            .get("mappings")
            .and_then(Value::as_object)
            .ok_or(ShapeMismatch::MissingMappings)?;

        let packets = mappings
            .iter()
            .map(|(raw_id, name)| -> Result<PacketId, ShapeMismatch> {
                let protocol_id = parse_hex_id(raw_id)
                    .ok_or_else(|| ShapeMismatch::InvalidProtocolId(raw_id.clone()))?;
                let default_name = match name {
                    Value::String(name) => name.clone(),
                    Value::Number(number) => number.to_string(),
                    _ => return Err(ShapeMismatch::UnsupportedName(raw_id.clone())),
                };
                Ok(PacketId {
                    protocol_id,
                    default_name,
                })
            })
            .collect::<Result<Vec<_>, ShapeMismatch>>()?;

        Ok(Self { packets })
    }
}

/// Outcome of extracting one slot.
///
/// A mismatch is not an error: it means the slot contributes no packets while
/// every other slot is processed normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(PacketIdTable),
    Missing(ShapeMismatch),
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn mismatch(&self) -> Option<&ShapeMismatch> {
        match self {
            Extraction::Found(_) => None,
            Extraction::Missing(mismatch) => Some(mismatch),
        }
    }

    /// Declared packets, or nothing if the slot did not match.
    pub fn packets(&self) -> &[PacketId] {
        match self {
            Extraction::Found(table) => table.packets(),
            Extraction::Missing(_) => &[],
        }
    }

    pub fn into_pairs(self) -> Vec<(ProtocolId, String)> {
        match self {
            Extraction::Found(table) => table
                .packets
                .into_iter()
                .map(|p| (p.protocol_id, p.default_name))
                .collect(),
            Extraction::Missing(_) => Vec::new(),
        }
    }
}

/// Parse a schema packet id such as `0x1f`.
///
/// Surrounding whitespace and the `0x` prefix are optional.
fn parse_hex_id(raw: &str) -> Option<ProtocolId> {
    let digits = raw.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    ProtocolId::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn slot(mappings: Value) -> Value {
        json!({
            "types": {
                "packet": ["container", [
                    { "name": "name", "type": ["mapper", { "type": "varint", "mappings": mappings }] },
                    { "name": "params", "type": ["switch", { "compareTo": "name", "fields": {} }] }
                ]]
            }
        })
    }

    #[test]
    fn test_extracts_ids_in_schema_order() {
        let schema = SchemaDocument::new(json!({
            "play": { "toClient": slot(json!({ "0x01": "chat", "0x00": "spawn_entity", "0x1f": "ping" })) }
        }));

        let extraction = schema.extract(State::Play, Direction::Clientbound);
        assert!(extraction.is_found());
        assert_eq!(
            extraction.into_pairs(),
            vec![
                (1, "chat".to_string()),
                (0, "spawn_entity".to_string()),
                (0x1f, "ping".to_string()),
            ]
        );
    }

    #[test]
    fn test_handshake_reads_handshaking_section() {
        let schema = SchemaDocument::new(json!({
            "handshaking": { "toServer": slot(json!({ "0x00": "intention" })) }
        }));

        assert_eq!(
            schema
                .extract(State::Handshake, Direction::Serverbound)
                .into_pairs(),
            vec![(0, "intention".to_string())]
        );
        assert_eq!(
            schema.extract(State::Handshake, Direction::Clientbound),
            Extraction::Missing(ShapeMismatch::MissingDirection {
                state: "handshaking",
                direction: "toClient",
            })
        );
    }

    #[test]
    fn test_reports_first_missing_step() {
        let cases = [
            (json!({}), ShapeMismatch::MissingState("login")),
            (json!({ "login": { "toClient": {} } }), ShapeMismatch::MissingTypes),
            (
                json!({ "login": { "toClient": { "types": {} } } }),
                ShapeMismatch::MissingPacketType,
            ),
            (
                json!({ "login": { "toClient": { "types": { "packet": "native" } } } }),
                ShapeMismatch::PacketNotContainer,
            ),
            (
                json!({ "login": { "toClient": { "types": { "packet": ["container", [{ "name": "params" }]] } } } }),
                ShapeMismatch::MissingNameField,
            ),
            (
                json!({ "login": { "toClient": { "types": { "packet": ["container", [{ "name": "name", "type": "varint" }]] } } } }),
                ShapeMismatch::NameFieldNotMapper,
            ),
            (
                json!({ "login": { "toClient": { "types": { "packet": ["container", [{ "name": "name", "type": ["mapper", {}] }]] } } } }),
                ShapeMismatch::MissingMappings,
            ),
        ];

        for (root, expected) in cases {
            let extraction = SchemaDocument::new(root).extract(State::Login, Direction::Clientbound);
            assert_eq!(extraction.mismatch(), Some(&expected));
            assert!(extraction.packets().is_empty());
        }
    }

    #[test]
    fn test_bad_entry_empties_whole_slot() {
        let schema = SchemaDocument::new(json!({
            "status": {
                "toClient": slot(json!({ "0x00": "status_response", "zz": "broken" })),
                "toServer": slot(json!({ "0x00": "status_request", "0x01": ["ping"] })),
            }
        }));

        assert_eq!(
            schema.extract(State::Status, Direction::Clientbound).mismatch(),
            Some(&ShapeMismatch::InvalidProtocolId("zz".to_string()))
        );
        assert_eq!(
            schema.extract(State::Status, Direction::Serverbound).mismatch(),
            Some(&ShapeMismatch::UnsupportedName("0x01".to_string()))
        );
    }

    #[test]
    fn test_numeric_names_are_stringified() {
        let schema = SchemaDocument::new(json!({
            "play": { "toServer": slot(json!({ "0x00": "a", "0x01": 7 })) }
        }));

        assert_eq!(
            schema.extract(State::Play, Direction::Serverbound).into_pairs(),
            vec![(0, "a".to_string()), (1, "7".to_string())]
        );
    }

    #[test]
    fn test_placeholder_state_never_matches() {
        let schema = SchemaDocument::new(json!({ "configuration": { "toClient": slot(json!({ "0x00": "x" })) } }));
        assert_eq!(
            schema.extract(State::Configuration, Direction::Clientbound),
            Extraction::Missing(ShapeMismatch::PlaceholderState(State::Configuration))
        );
    }

    #[test]
    fn test_parse_hex_id() {
        assert_eq!(parse_hex_id("0x00"), Some(0));
        assert_eq!(parse_hex_id("0X2A"), Some(42));
        assert_eq!(parse_hex_id("1f"), Some(31));
        assert_eq!(parse_hex_id(" 0x10 "), Some(16));
        assert_eq!(parse_hex_id(""), None);
        assert_eq!(parse_hex_id("0x"), None);
        assert_eq!(parse_hex_id("-1"), None);
        assert_eq!(parse_hex_id("0xg1"), None);
    }
}
