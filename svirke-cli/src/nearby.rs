//! Nearby command: filter the snapshot, then rank it around the user.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use svirke_core::{Coordinate, EventQuery, Favourites, rank_by};

use crate::input::{load_events, load_favourites};
use crate::output::{OutputFormat, write_nearby};
use crate::{
    ARG_EVENTS, ARG_FAVOURITES, ARG_FAVOURITES_ONLY, ARG_FORMAT, ARG_LATITUDE, ARG_LONGITUDE,
    ARG_SEARCH, CliError, DEFAULT_EVENTS_PATH, ENV_NEARBY_FAVOURITES, ENV_NEARBY_LATITUDE,
    ENV_NEARBY_LONGITUDE,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearby",
    long_about = "List events from a JSON snapshot, nearest first when a \
                 reference location is given. Without a location the \
                 events keep their stored order and no distances are shown.",
    about = "List events ordered by distance"
)]
#[ortho_config(prefix = "SVIRKE")]
pub(crate) struct NearbyArgs {
    /// Path to a JSON array of events.
    #[arg(long = ARG_EVENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) events: Option<Utf8PathBuf>,
    /// Reference latitude in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Reference longitude in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Case-insensitive term matched against performer, genre and venue.
    #[arg(long = ARG_SEARCH, value_name = "term")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Path to a JSON array of favourite event ids.
    #[arg(long = ARG_FAVOURITES, value_name = "path")]
    #[serde(default)]
    pub(crate) favourites: Option<Utf8PathBuf>,
    /// Show only favourite events.
    #[arg(
        long = ARG_FAVOURITES_ONLY,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) favourites_only: Option<bool>,
    /// Output encoding.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) events: Utf8PathBuf,
    /// Validated reference; `None` selects the unranked listing.
    pub(crate) reference: Option<Coordinate>,
    pub(crate) query: EventQuery,
    pub(crate) favourites: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let reference = match (args.latitude, args.longitude) {
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LONGITUDE,
                    env: ENV_NEARBY_LONGITUDE,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LATITUDE,
                    env: ENV_NEARBY_LATITUDE,
                });
            }
            (Some(latitude), Some(longitude)) => Some(
                Coordinate::try_new(latitude, longitude).map_err(CliError::InvalidReference)?,
            ),
        };

        let favourites_only = args.favourites_only.unwrap_or(false);
        if favourites_only && args.favourites.is_none() {
            return Err(CliError::MissingArgument {
                field: ARG_FAVOURITES,
                env: ENV_NEARBY_FAVOURITES,
            });
        }

        let query = args
            .search
            .map_or_else(EventQuery::default, EventQuery::search)
            .favourites_only(favourites_only);

        Ok(Self {
            events: args
                .events
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_EVENTS_PATH)),
            reference,
            query,
            favourites: args.favourites,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(super) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_nearby(&config, writer)
}

fn execute_nearby(config: &NearbyConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let events = load_events(&config.events)?;
    let favourites = match &config.favourites {
        Some(path) => load_favourites(path)?,
        None => Favourites::default(),
    };
    let ranking = rank_by(config.reference, config.query.apply(&events, &favourites));
    write_nearby(writer, config.format, &ranking)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}
