//! Unit tests covering nearby configuration and rendering.

use super::helpers::{Workspace, output_lines};
use super::*;
use crate::nearby::{NearbyConfig, config_from_layers_for_test, run_nearby_with};
use rstest::rstest;
use serde_json::Value;
use svirke_core::{Coordinate, CoordinateError};

fn belgrade_args(events: camino::Utf8PathBuf) -> NearbyArgs {
    NearbyArgs {
        events: Some(events),
        latitude: Some(44.8125),
        longitude: Some(20.4612),
        ..NearbyArgs::default()
    }
}

#[rstest]
#[case::latitude_only(Some(44.8), None, ARG_LONGITUDE, ENV_NEARBY_LONGITUDE)]
#[case::longitude_only(None, Some(20.4), ARG_LATITUDE, ENV_NEARBY_LATITUDE)]
fn converting_with_half_a_location_errors(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = NearbyArgs {
        latitude,
        longitude,
        ..NearbyArgs::default()
    };
    let err = NearbyConfig::try_from(args).expect_err("half a location should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_rejects_out_of_range_reference() {
    let args = NearbyArgs {
        latitude: Some(95.0),
        longitude: Some(20.0),
        ..NearbyArgs::default()
    };
    let err = NearbyConfig::try_from(args).expect_err("latitude 95 should error");
    match err {
        CliError::InvalidReference(CoordinateError::OutOfRange { .. }) => {}
        other => panic!("expected InvalidReference, found {other:?}"),
    }
}

#[rstest]
fn favourites_only_requires_a_favourites_file() {
    let args = NearbyArgs {
        favourites_only: Some(true),
        ..NearbyArgs::default()
    };
    let err = NearbyConfig::try_from(args).expect_err("favourites path is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_FAVOURITES);
            assert_eq!(env, ENV_NEARBY_FAVOURITES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let config = NearbyConfig::try_from(NearbyArgs::default()).expect("defaults should build");
    assert_eq!(config.events, DEFAULT_EVENTS_PATH);
    assert_eq!(config.reference, None);
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.query.search.is_empty());
    assert!(!config.query.favourites_only);
}

#[rstest]
fn merge_layers_combines_environment_and_cli_values() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "search": "rock", "format": "json" }), None);
    composer.push_environment(json!({ "latitude": 44.8125, "search": "jazz" }));
    composer.push_cli(json!({ "longitude": 20.4612 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.reference, Some(Coordinate::new(44.8125, 20.4612)));
    assert_eq!(config.query.search, "jazz");
    assert_eq!(config.format, OutputFormat::Json);
}

#[rstest]
#[case::file(true)]
#[case::environment(false)]
fn favourites_only_from_lower_layers_survives_cli_merge(#[case] from_file: bool) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let layer = json!({ "favourites_only": true, "favourites": "favourites.json" });
    let mut composer = MergeComposer::new();
    if from_file {
        composer.push_file(layer, None);
    } else {
        composer.push_environment(layer);
    }
    composer.push_cli(json!({ "search": "rock" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert!(config.query.favourites_only);
    assert_eq!(config.query.search, "rock");
    assert_eq!(
        config.favourites,
        Some(camino::Utf8PathBuf::from("favourites.json"))
    );
}

#[rstest]
fn favourites_only_from_environment_still_requires_a_file() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "favourites_only": true }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("favourites path is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_FAVOURITES);
            assert_eq!(env, ENV_NEARBY_FAVOURITES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::bare_flag(&["svirke", "nearby", "--favourites-only"], Some(true))]
#[case::explicit_false(&["svirke", "nearby", "--favourites-only=false"], Some(false))]
#[case::absent(&["svirke", "nearby"], None)]
fn favourites_only_flag_parses_to_an_optional_override(
    #[case] argv: &[&str],
    #[case] expected: Option<bool>,
) {
    use clap::Parser;

    let cli = Cli::try_parse_from(argv.iter().copied()).expect("arguments should parse");
    match cli.command {
        Command::Nearby(args) => assert_eq!(args.favourites_only, expected),
        Command::Agenda(_) => panic!("expected the nearby subcommand"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "latitude": "north" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn nearby_text_lists_nearest_first() {
    let workspace = Workspace::new();
    let mut buffer = Vec::new();

    run_nearby_with(belgrade_args(workspace.events()), &mut buffer).expect("nearby succeeds");

    assert_eq!(
        output_lines(&buffer),
        [
            "Bajaga • rock | Dom omladine, Beograd | 21:00 | 409m",
            "Bilja Krstić • etno | Šaran, Beograd | 21:30 | 5.8km",
            "Vasil Hadžimanov • jazz | Kulturni centar, Novi Sad | 20:00 | 70.6km",
            "results: 3",
        ]
    );
}

#[rstest]
fn nearby_without_location_keeps_stored_order() {
    let workspace = Workspace::new();
    let args = NearbyArgs {
        events: Some(workspace.events()),
        ..NearbyArgs::default()
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    assert_eq!(
        output_lines(&buffer),
        [
            "Vasil Hadžimanov • jazz | Kulturni centar, Novi Sad | 20:00",
            "Bilja Krstić • etno | Šaran, Beograd | 21:30",
            "Bajaga • rock | Dom omladine, Beograd | 21:00",
            "results: 3",
        ]
    );
}

#[rstest]
fn nearby_filters_favourites_before_ranking() {
    let workspace = Workspace::new();
    let favourites = workspace.file("favourites.json", r#"["novi-sad", "zemun"]"#);
    let args = NearbyArgs {
        favourites: Some(favourites),
        favourites_only: Some(true),
        ..belgrade_args(workspace.events())
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    let lines = output_lines(&buffer);
    assert_eq!(lines.len(), 3);
    assert!(lines.first().is_some_and(|line| line.starts_with("Bilja Krstić")));
    assert_eq!(lines.last().map(String::as_str), Some("results: 2"));
}

#[rstest]
fn nearby_search_matches_venue_case_insensitively() {
    let workspace = Workspace::new();
    let args = NearbyArgs {
        search: Some("DOM OMLADINE".into()),
        ..belgrade_args(workspace.events())
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    assert_eq!(
        output_lines(&buffer),
        [
            "Bajaga • rock | Dom omladine, Beograd | 21:00 | 409m",
            "results: 1",
        ]
    );
}

#[rstest]
fn nearby_json_includes_distances() {
    let workspace = Workspace::new();
    let args = NearbyArgs {
        format: Some(OutputFormat::Json),
        ..belgrade_args(workspace.events())
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    let rows: Value = serde_json::from_slice(&buffer).expect("json output");
    let first = rows.get(0).expect("at least one row");
    assert_eq!(first["id"], "centre");
    assert_eq!(first["izvodjac"], "Bajaga");
    assert_eq!(first["lat"], 44.815);
    assert_eq!(first["distance"], "409m");
    let km = first["distance_km"].as_f64().expect("numeric distance");
    assert!((0.40..0.41).contains(&km));
}

#[rstest]
fn nearby_json_without_location_omits_distances() {
    let workspace = Workspace::new();
    let args = NearbyArgs {
        events: Some(workspace.events()),
        format: Some(OutputFormat::Json),
        ..NearbyArgs::default()
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    let output: Value = serde_json::from_slice(&buffer).expect("json output");
    let rows = output.as_array().expect("array output");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.get("distance").is_none()));
}

#[rstest]
fn nearby_reports_missing_events_file() {
    let workspace = Workspace::new();
    let missing = workspace.path("missing.json");

    let err = run_nearby_with(belgrade_args(missing.clone()), &mut Vec::new())
        .expect_err("missing snapshot should error");
    match err {
        CliError::OpenEvents { path, .. } => assert_eq!(path, missing),
        other => panic!("expected OpenEvents, found {other:?}"),
    }
}

#[rstest]
fn nearby_rejects_events_with_invalid_locations() {
    let workspace = Workspace::new();
    let events = workspace.file(
        "events.json",
        r#"[{"id": "x", "izvodjac": "A", "lokal": "B", "grad": "C", "zanr": "D",
             "vreme": "20:00", "lat": 123.0, "lng": 20.0}]"#,
    );

    let err = run_nearby_with(belgrade_args(events), &mut Vec::new())
        .expect_err("invalid latitude should error");
    match err {
        CliError::ReadEvents {
            source: svirke_core::SnapshotError::InvalidLocation { id, .. },
            ..
        } => assert_eq!(id.as_str(), "x"),
        other => panic!("expected ReadEvents, found {other:?}"),
    }
}

#[rstest]
fn nearby_lists_events_without_a_genre() {
    let workspace = Workspace::new();
    let events = workspace.file(
        "events.json",
        r#"[{"id": "x", "izvodjac": "Kanda", "lokal": "Barutana", "grad": "Beograd",
             "vreme": "22:00", "lat": "44.8237", "lng": "20.4505"}]"#,
    );
    let args = NearbyArgs {
        events: Some(events),
        ..NearbyArgs::default()
    };
    let mut buffer = Vec::new();

    run_nearby_with(args, &mut buffer).expect("nearby succeeds");

    assert_eq!(
        output_lines(&buffer),
        ["Kanda | Barutana, Beograd | 22:00", "results: 1"]
    );
}

#[rstest]
fn nearby_reports_malformed_favourites() {
    let workspace = Workspace::new();
    let favourites = workspace.file("favourites.json", r#"{"not": "a list"}"#);
    let args = NearbyArgs {
        favourites: Some(favourites.clone()),
        ..belgrade_args(workspace.events())
    };

    let err = run_nearby_with(args, &mut Vec::new()).expect_err("bad favourites should error");
    match err {
        CliError::ParseFavourites { path, .. } => assert_eq!(path, favourites),
        other => panic!("expected ParseFavourites, found {other:?}"),
    }
}
