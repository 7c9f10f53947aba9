//! Agenda command: the chronological listing of a snapshot.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use svirke_core::agenda;

use crate::input::load_events;
use crate::output::{OutputFormat, write_agenda};
use crate::{ARG_EVENTS, ARG_FORMAT, CliError, DEFAULT_EVENTS_PATH};

/// CLI arguments for the `agenda` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "agenda",
    about = "List events by date, undated events last"
)]
#[ortho_config(prefix = "SVIRKE")]
pub(crate) struct AgendaArgs {
    /// Path to a JSON array of events.
    #[arg(long = ARG_EVENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) events: Option<Utf8PathBuf>,
    /// Output encoding.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AgendaConfig {
    pub(crate) events: Utf8PathBuf,
    pub(crate) format: OutputFormat,
}

impl From<AgendaArgs> for AgendaConfig {
    fn from(args: AgendaArgs) -> Self {
        Self {
            events: args
                .events
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_EVENTS_PATH)),
            format: args.format.unwrap_or_default(),
        }
    }
}

pub(super) fn run_agenda(args: AgendaArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_agenda_with(args, &mut stdout)
}

pub(super) fn run_agenda_with(args: AgendaArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = AgendaConfig::from(merged);
    let events = load_events(&config.events)?;
    write_agenda(writer, config.format, &agenda(&events))
}
