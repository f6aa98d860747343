mod generate;

use clap::Parser;
use clap::error::ErrorKind;
use protoreg_api::DEFAULT_NAMESPACE;
use std::ffi::OsString;
use std::path::PathBuf;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "protoreg",
    version,
    about = "Generate a stable packet registry from a protocol schema",
    long_about = "Reads a protocol schema (protocol.json) and writes a registry mapping every \
                  state and direction to namespaced packet names and protocol ids. When a \
                  previously generated registry is supplied, packet ids it already names keep \
                  those names."
)]
pub struct Cli {
    /// Path to the protocol schema
    #[arg(value_name = "SCHEMA_PATH")]
    pub schema: PathBuf,

    /// Where to write the generated registry (overwritten)
    #[arg(value_name = "OUTPUT_PATH")]
    pub output: PathBuf,

    /// A previously generated registry whose names take precedence
    #[arg(value_name = "PRIOR_REGISTRY_PATH")]
    pub prior: Option<PathBuf>,

    /// Namespace prefixed to every packet name
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

/// Run with the process arguments and return the exit status.
pub fn run() -> u8 {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
        }
    };

    let _guard = protoreg_core::logging::init_logging();

    match generate::run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}
