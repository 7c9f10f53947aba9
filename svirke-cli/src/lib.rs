//! Command-line interface for browsing Svirke event snapshots.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod agenda;
mod error;
mod input;
mod nearby;
mod output;

pub use error::CliError;
pub use output::OutputFormat;

use agenda::{AgendaArgs, run_agenda};
use nearby::{NearbyArgs, run_nearby};

const ARG_EVENTS: &str = "events";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_SEARCH: &str = "search";
const ARG_FAVOURITES: &str = "favourites";
const ARG_FAVOURITES_ONLY: &str = "favourites-only";
const ARG_FORMAT: &str = "format";
const ENV_NEARBY_LATITUDE: &str = "SVIRKE_CMDS_NEARBY_LATITUDE";
const ENV_NEARBY_LONGITUDE: &str = "SVIRKE_CMDS_NEARBY_LONGITUDE";
const ENV_NEARBY_FAVOURITES: &str = "SVIRKE_CMDS_NEARBY_FAVOURITES";
const DEFAULT_EVENTS_PATH: &str = "events.json";

/// Run the Svirke CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Nearby(args) => run_nearby(args),
        Command::Agenda(args) => run_agenda(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "svirke",
    about = "Find live-music events near you",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List events, nearest first when a location is known.
    Nearby(NearbyArgs),
    /// List events in chronological order.
    Agenda(AgendaArgs),
}

#[cfg(test)]
mod tests;
