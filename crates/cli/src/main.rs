use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(protoreg_cli::run())
}
