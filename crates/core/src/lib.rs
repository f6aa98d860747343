pub mod assemble;
pub mod error;
pub mod io;
pub mod logging;
pub mod prior;
pub mod reconcile;
pub mod schema;

pub use assemble::{Assembly, GenerationReport, GeneratorOptions, RegistryAssembler, SlotReport};
pub use error::{ProtoregError, Result};
pub use prior::{PriorRegistryDocument, PriorRegistryIndex};
pub use reconcile::{NameReconciler, NameSource, Reconciled};
pub use schema::{Extraction, PacketId, PacketIdTable, SchemaDocument, ShapeMismatch};

use std::path::Path;
use tracing::info;

/// Run one generation: load inputs, assemble, write the registry.
///
/// The schema is loaded before anything else, so a bad schema leaves
/// `output` untouched.
pub fn generate(
    schema_path: &Path,
    output_path: &Path,
    prior_path: Option<&Path>,
    options: &GeneratorOptions,
) -> Result<Assembly> {
    let schema = io::load_schema(schema_path)?;
    let prior = io::load_prior(prior_path, &options.namespace);

    let assembly = RegistryAssembler::new(&schema, &prior, options).assemble();

    io::write_registry(output_path, &assembly.registry)?;
    info!(
        "Wrote {} packets ({} names carried over) to {}",
        assembly.report.total_entries(),
        assembly.report.carried_over(),
        output_path.display()
    );

    Ok(assembly)
}
