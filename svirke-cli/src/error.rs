//! Error types emitted by the Svirke CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use svirke_core::{CoordinateError, SnapshotError};
use thiserror::Error;

/// Errors emitted by the Svirke CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The reference coordinate is outside the valid ranges.
    #[error("invalid reference location: {0}")]
    InvalidReference(#[source] CoordinateError),
    /// Opening the events snapshot failed.
    #[error("failed to open events at {path:?}: {source}")]
    OpenEvents {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The events snapshot could not be decoded or validated.
    #[error("failed to read events at {path:?}: {source}")]
    ReadEvents {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Decoding or validation error.
        #[source]
        source: SnapshotError,
    },
    /// Opening the favourites file failed.
    #[error("failed to open favourites at {path:?}: {source}")]
    OpenFavourites {
        /// Favourites path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Favourites JSON could not be decoded.
    #[error("failed to parse favourites JSON at {path:?}: {source}")]
    ParseFavourites {
        /// Favourites path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the JSON output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
