//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use svirke_cli::CliError;

fn main() {
    match svirke_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("svirke: {err}");
            std::process::exit(1);
        }
    }
}
