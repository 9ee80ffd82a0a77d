use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use stopwatch::Stopwatch;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use geofence::config::GeofenceConfig;
use geofence::util::points_from_geojson;
use geofence::{is_within_bounds_value, Bounds};

fn cli() -> Command {
    Command::new("geofence")
        .about("Check coordinates against a rectangular geofence")
        .subcommand_required(true)
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .env("GEOFENCE_CONFIG")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .global(true)
            .help("TOML file with a [bounds] table"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Log at debug level"))
        .subcommand(Command::new("check")
            .about("Print whether a point is inside the geofence")
            .allow_negative_numbers(true)
            .arg(Arg::new("lat").required(true).value_name("LAT"))
            .arg(Arg::new("lng").required(true).value_name("LNG")))
        .subcommand(Command::new("filter")
            .about("Print the points of a GeoJSON file that are inside the geofence")
            .arg(Arg::new("geojson")
                .required(true)
                .value_name("GEOJSON")
                .value_parser(value_parser!(PathBuf))))
        .subcommand(Command::new("bounds").about("Print the active bounds"))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = cli().get_matches();
    let filter = env_filter(matches.get_flag("verbose"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let bounds = load_bounds(&matches)?;
    match matches.subcommand() {
        Some(("check", sub)) => {
            let lat = parse_arg(sub, "lat");
            let lng = parse_arg(sub, "lng");
            let inside = is_within_bounds_value(&lat, &lng, Some(&bounds));
            println!("{}", if inside { "inside" } else { "outside" });
        }
        Some(("filter", sub)) => {
            let path = sub.get_one::<PathBuf>("geojson").context("missing GEOJSON argument")?;
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            let s = Stopwatch::start_new();
            let points = points_from_geojson(BufReader::new(file), Some(bounds))
                .with_context(|| format!("failed to read points from {}", path.display()))?;
            info!(count = points.len(), elapsed_ms = s.elapsed_ms(), "filtered {}", path.display());
            for p in points {
                println!("{},{}", p.lat, p.lng);
            }
        }
        Some(("bounds", _)) => {
            println!("north={} south={} east={} west={}", bounds.north, bounds.south, bounds.east, bounds.west);
        }
        _ => unreachable!("subcommand_required"),
    }
    Ok(())
}

/// `RUST_LOG` if set, else `info`. `--verbose` adds a `debug` directive on top of either.
fn env_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn load_bounds(matches: &ArgMatches) -> Result<Bounds> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let config = GeofenceConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            debug!(bounds = ?config.bounds, "loaded config");
            Ok(config.bounds)
        }
        None => Ok(Bounds::default()),
    }
}

/// Read an argument as JSON so that anything that is not a number (including a quoted string)
/// ends up outside the fence instead of failing.
fn parse_arg(sub: &ArgMatches, name: &str) -> Value {
    sub.get_one::<String>(name)
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or(Value::Null)
}
