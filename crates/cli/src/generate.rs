use crate::Cli;
use protoreg_core::GeneratorOptions;
use tracing::{info, warn};

pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = GeneratorOptions {
        namespace: cli.namespace.clone(),
    };

    info!("Generating packet registry from {}...", cli.schema.display());

    let assembly =
        protoreg_core::generate(&cli.schema, &cli.output, cli.prior.as_deref(), &options)?;

    for slot in &assembly.report.slots {
        match &slot.mismatch {
            Some(mismatch) => warn!(
                "{}/{}: no packet table ({})",
                slot.state, slot.direction, mismatch
            ),
            None => info!(
                "{}/{}: {} packets, {} names kept",
                slot.state, slot.direction, slot.entries, slot.carried_over
            ),
        }
    }

    Ok(())
}
