//! Reading and writing the documents this tool works with.

use crate::error::{ProtoregError, Result};
use crate::prior::{PriorRegistryDocument, PriorRegistryIndex};
use crate::schema::SchemaDocument;
use protoreg_api::PacketRegistry;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the protocol schema. Any failure here is fatal to the run.
pub fn load_schema(path: &Path) -> Result<SchemaDocument> {
    let content = fs::read_to_string(path).map_err(|e| ProtoregError::io(path, e))?;
    let root: Value = serde_json::from_str(&content).map_err(|e| ProtoregError::json(path, e))?;
    Ok(SchemaDocument::new(root))
}

/// Load the prior registry index.
///
/// Never fails: no path, a missing file, or an unreadable document all yield
/// an empty index.
pub fn load_prior(path: Option<&Path>, namespace: &str) -> PriorRegistryIndex {
    let Some(path) = path else {
        debug!("No prior registry given");
        return PriorRegistryIndex::empty();
    };
    if !path.exists() {
        info!("Prior registry {} does not exist, starting fresh", path.display());
        return PriorRegistryIndex::empty();
    }

    match read_prior_document(path) {
        Ok(document) => {
            let index = PriorRegistryIndex::from_document(&document, namespace);
            info!("Loaded {} prior packet names from {}", index.len(), path.display());
            index
        }
        Err(e) => {
            warn!("Ignoring prior registry: {}", e);
            PriorRegistryIndex::empty()
        }
    }
}

fn read_prior_document(path: &Path) -> Result<PriorRegistryDocument> {
    let content = fs::read_to_string(path).map_err(|e| ProtoregError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ProtoregError::json(path, e))
}

/// Render a registry as two-space indented JSON with a trailing newline.
pub fn render_registry(registry: &PacketRegistry) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(registry)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write a registry to `path`, replacing any existing file.
pub fn write_registry(path: &Path, registry: &PacketRegistry) -> Result<()> {
    let rendered = render_registry(registry).map_err(|e| ProtoregError::json(path, e))?;
    fs::write(path, rendered).map_err(|e| ProtoregError::io(path, e))
}
