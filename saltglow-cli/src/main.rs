//! Entry point for the `saltglow` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use saltglow_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "errors before logger initialisation must still reach the user"
)]
fn main() -> ExitCode {
    match saltglow_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("saltglow: {err}");
            ExitCode::FAILURE
        }
    }
}
