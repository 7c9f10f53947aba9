//! Rendering command results as text or JSON.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use svirke_core::{Distance, Event, Ranking};

use crate::CliError;

/// Output encoding selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per event followed by a count.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// JSON row for `nearby`: the event document plus its distance when ranked.
#[derive(Debug, Serialize)]
struct NearbyRow<'a> {
    #[serde(flatten)]
    event: &'a Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<String>,
}

impl<'a> NearbyRow<'a> {
    fn new(event: &'a Event, distance: Option<Distance>) -> Self {
        Self {
            event,
            distance_km: distance.map(Distance::kilometres),
            distance: distance.map(|d| d.to_string()),
        }
    }
}

/// `<performer> • <genre> | <venue>, <city> | <time>`, without the genre
/// part when it is blank.
fn summary(event: &Event) -> String {
    let details = &event.details;
    let headline = if details.genre.is_empty() {
        details.performer.clone()
    } else {
        format!("{} • {}", details.performer, details.genre)
    };
    format!(
        "{headline} | {}, {} | {}",
        details.venue, details.city, details.time
    )
}

pub(crate) fn write_nearby(
    writer: &mut dyn Write,
    format: OutputFormat,
    ranking: &Ranking<'_>,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for (event, distance) in ranking.entries() {
                let line = match distance {
                    Some(label) => format!("{} | {label}", summary(event)),
                    None => summary(event),
                };
                write_line(writer, &line)?;
            }
            write_line(writer, &format!("results: {}", ranking.len()))
        }
        OutputFormat::Json => {
            let rows: Vec<NearbyRow<'_>> = ranking
                .entries()
                .map(|(event, distance)| NearbyRow::new(event, distance))
                .collect();
            write_json(writer, &rows)
        }
    }
}

pub(crate) fn write_agenda(
    writer: &mut dyn Write,
    format: OutputFormat,
    events: &[&Event],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for event in events {
                let date = event.details.date.as_deref().unwrap_or("undated");
                write_line(writer, &format!("{date} | {}", summary(event)))?;
            }
            write_line(writer, &format!("events: {}", events.len()))
        }
        OutputFormat::Json => write_json(writer, &events),
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    write_line(writer, &payload)
}

fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}
