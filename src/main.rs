mod debug_report;

use hansik::{
    FilterCriteria, GeoPoint, RestaurantRecord, SelectionSet, SortKey, annotate, compose, discover_verbose,
    parse_price_tier, topic_reply,
};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HANSIK_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

enum Command {
    Discover(DiscoverArgs),
    Concierge { tags: Vec<String>, text: String },
    Topic(String),
}

struct DiscoverArgs {
    records: PathBuf,
    criteria: FilterCriteria,
    origin: Option<GeoPoint>,
}

struct CliConfig {
    command: Command,
    color: bool,
}

fn run(config: CliConfig) -> Result<(), String> {
    match config.command {
        Command::Discover(args) => {
            let records = load_records(&args.records)?;
            tracing::debug!(count = records.len(), path = %args.records.display(), "loaded records");

            let res = discover_verbose(&records, &args.criteria, args.origin).map_err(|err| format!("error: {err}"))?;
            let listings = annotate(&res.results, args.origin);
            debug_report::print_discovery(&args.criteria, &listings, &res.details, config.color);
        }
        Command::Concierge { tags, text } => {
            let set: SelectionSet = tags.into_iter().collect();
            debug_report::print_concierge(&set, &text, &compose(&set, &text), config.color);
        }
        Command::Topic(tag) => println!("{}", topic_reply(&tag)),
    }
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<RestaurantRecord>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("error: failed to read records '{}': {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("error: invalid records file '{}': {err}", path.display()))
}

fn parse_args() -> Result<CliConfig, String> {
    let mut args = std::env::args().skip(1);
    let mut color = io::stdout().is_terminal();

    // Global flags may precede the subcommand.
    let sub = loop {
        let Some(arg) = args.next() else {
            return Err(format!("error: no command provided\n\n{}", help_text()));
        };
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("hansik {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            _ => break arg,
        }
    };

    let rest: Vec<String> = args.collect();
    let (command, color) = match sub.as_str() {
        "discover" => parse_discover(rest, color)?,
        "concierge" => parse_concierge(rest, color)?,
        "topic" => {
            let tag = rest.join(" ");
            if tag.trim().is_empty() {
                return Err("error: topic expects a tag".to_string());
            }
            (Command::Topic(tag), color)
        }
        other => return Err(format!("error: unknown command '{other}'\n\n{}", help_text())),
    };

    Ok(CliConfig { command, color })
}

fn parse_discover(rest: Vec<String>, mut color: bool) -> Result<(Command, bool), String> {
    let mut records: Option<PathBuf> = None;
    let mut criteria = FilterCriteria::new();
    let mut origin: Option<GeoPoint> = None;
    let mut args = rest.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "--records" | "-r" => records = Some(PathBuf::from(value("--records")?)),
            "--price" => {
                let v = value("--price")?;
                criteria.price_tier = Some(parse_price_tier(&v).map_err(|err| format!("error: {err}"))?);
            }
            "--cuisine" => criteria.cuisine = Some(value("--cuisine")?),
            "--near" => {
                origin = Some(parse_point(&value("--near")?)?);
                criteria.within_radius = true;
            }
            "--origin" => origin = Some(parse_point(&value("--origin")?)?),
            "--radius" => {
                let v = value("--radius")?;
                criteria.radius_km = v
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite() && *r >= 0.0)
                    .ok_or_else(|| format!("error: invalid --radius '{v}' (expected kilometers)"))?;
            }
            "--min-rating" => {
                let v = value("--min-rating")?;
                criteria.min_rating = Some(
                    v.parse::<f64>()
                        .ok()
                        .filter(|r| (0.0..=5.0).contains(r))
                        .ok_or_else(|| format!("error: invalid --min-rating '{v}' (expected 0-5)"))?,
                );
            }
            "--sort" => {
                let v = value("--sort")?;
                criteria.sort = v.parse::<SortKey>().map_err(|err| format!("error: {err}"))?;
            }
            "--color" => color = true,
            "--no-color" => color = false,
            _ => return Err(format!("error: unknown option '{arg}'")),
        }
    }

    let records = records.ok_or_else(|| "error: discover requires --records <file.json>".to_string())?;
    Ok((Command::Discover(DiscoverArgs { records, criteria, origin }), color))
}

fn parse_concierge(rest: Vec<String>, mut color: bool) -> Result<(Command, bool), String> {
    let mut tags = Vec::new();
    let mut words = Vec::new();
    let mut args = rest.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tag" | "-t" => tags.push(args.next().ok_or_else(|| "error: --tag expects a value".to_string())?),
            "--color" => color = true,
            "--no-color" => color = false,
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--tag=") => tags.push(arg.trim_start_matches("--tag=").to_string()),
            _ if arg.starts_with('-') => return Err(format!("error: unknown option '{arg}'")),
            _ => words.push(arg),
        }
    }

    Ok((Command::Concierge { tags, text: words.join(" ") }, color))
}

fn parse_point(value: &str) -> Result<GeoPoint, String> {
    value.parse::<GeoPoint>().map_err(|err| format!("error: {err}"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "hansik {version}

Restaurant discovery and concierge CLI.

Usage:
  hansik [--color|--no-color] discover --records <file.json> [OPTIONS]
  hansik [--color|--no-color] concierge [--tag <tag>]... [--] [free text...]
  hansik topic <tag>

Discover options:
  -r, --records <file>     JSON array of restaurant records.
  --price <tier>           Keep one price tier (1-4, '$$' or '₩₩').
  --cuisine <name>         Keep one cuisine (exact, case-sensitive).
  --near <lat,lng>         Set the origin and keep records within the radius.
  --radius <km>            Proximity radius. Default: {radius} km.
  --origin <lat,lng>       Set the origin without filtering by distance.
  --min-rating <r>         Keep rated records with rating >= r.
  --sort <key>             rating | reviewCount | distance. Default: rating.

Concierge options:
  -t, --tag <tag>          Select a tag (key like 'BBQ' or chip label).
                           Repeat to select several.

Global options:
  --color                  Force ANSI color output.
  --no-color               Disable ANSI color output.
  -h, --help               Show this help message.
  -V, --version            Print version information.

Environment:
  {log_env}               tracing filter, e.g. 'hansik=trace'. Default: warn.

Exit codes:
  0  Success.
  1  Runtime error (unreadable records, distance sort without origin).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        radius = hansik::DEFAULT_RADIUS_KM,
        log_env = LOG_ENV,
    )
}
