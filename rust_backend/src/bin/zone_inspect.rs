use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use worldclock::config::EngineConfig;
use worldclock::models::TimeZone;
use worldclock::services::ZoneEngine;
use worldclock::time::format_utc_label;

const USAGE: &str = "\
Usage: zone-inspect [--at <RFC3339>] [--config <path>] <command>

Commands:
  reference            Show the reference zone
  ordered              List every zone, reference first, going east
  select <count>       Pick zones centred on the reference zone
  timeline <zone-id>   Print the hour columns of one zone
  groups               List locations with their DST/Standard alternates
  search <query>       Rank zones for a name or offset query";

#[derive(Debug)]
enum Command {
    Reference,
    Ordered,
    Select(usize),
    Timeline(String),
    Groups,
    Search(String),
}

#[derive(Debug)]
struct Args {
    at: Option<DateTime<Utc>>,
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut at = None;
    let mut config = None;
    let mut positional = Vec::new();

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--at" => {
                let value = iter.next().ok_or_else(|| anyhow!("--at needs a value"))?;
                let instant = DateTime::parse_from_rfc3339(value)
                    .with_context(|| format!("Invalid --at instant: {}", value))?;
                at = Some(instant.with_timezone(&Utc));
            }
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a value"))?;
                config = Some(PathBuf::from(value));
            }
            "-h" | "--help" => bail!("{}", USAGE),
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        ["reference"] => Command::Reference,
        ["ordered"] => Command::Ordered,
        ["select", count] => Command::Select(
            count
                .parse()
                .with_context(|| format!("Invalid count: {}", count))?,
        ),
        ["timeline", zone] => Command::Timeline(zone.to_string()),
        ["groups"] => Command::Groups,
        ["search", query @ ..] if !query.is_empty() => Command::Search(query.join(" ")),
        _ => bail!("{}", USAGE),
    };

    Ok(Args {
        at,
        config,
        command,
    })
}

fn zone_line(zone: &TimeZone) -> String {
    format!(
        "{:<32} {:<10} {:<6} {}",
        zone.id(),
        format_utc_label(zone.offset_hours),
        zone.abbreviation,
        zone.display_name
    )
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => EngineConfig::load_or_default().context("Failed to load configuration")?,
    };
    let engine = ZoneEngine::from_config(&config).context("Failed to build zone engine")?;
    let instant = args.at.unwrap_or_else(Utc::now);

    match args.command {
        Command::Reference => {
            let zone = engine.resolve_reference_zone(instant)?;
            println!("{}", zone_line(&zone));
        }
        Command::Ordered => {
            for zone in engine.ordered_zones(instant)? {
                println!("{}", zone_line(&zone));
            }
        }
        Command::Select(count) => {
            for zone in engine.select_zones_for_timeline(count, instant)? {
                println!("{}", zone_line(&zone));
            }
        }
        Command::Timeline(id) => {
            let zone = engine
                .ordered_zones(instant)?
                .into_iter()
                .find(|z| z.id() == id.as_str())
                .ok_or_else(|| anyhow!("Unknown zone: {}", id))?;
            let format = engine.hour_format();
            for hour in engine.build_timeline(engine.default_width(), &zone, instant)? {
                let marker = if hour.is_daylight { "☀" } else { " " };
                let date = if hour.is_date_transition {
                    hour.local.format(" %a %d %b").to_string()
                } else {
                    String::new()
                };
                println!(
                    "{} {:>7} {}{}{}",
                    hour.instant.format("%Y-%m-%dT%H:%MZ"),
                    hour.label(format),
                    marker,
                    date,
                    hour.annotation
                        .as_deref()
                        .map(|a| format!("  {}", a))
                        .unwrap_or_default()
                );
            }
        }
        Command::Groups => {
            for group in engine.grouped_zones(instant)? {
                let alternate = group
                    .alternate
                    .as_ref()
                    .map(|z| format!(" / {} {}", format_utc_label(z.offset_hours), z.abbreviation))
                    .unwrap_or_default();
                println!(
                    "{:<10} {:<28} {} {}{}",
                    group.region,
                    group.location,
                    format_utc_label(group.current.offset_hours),
                    group.current.abbreviation,
                    alternate
                );
            }
        }
        Command::Search(query) => {
            for zone in engine.search(&query, instant)? {
                println!("{}", zone_line(&zone));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;
    run(args)
}
