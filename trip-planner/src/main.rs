//! Command-line interface for the trip planner.

use std::error::Error;
use std::process::ExitCode;

use chrono::{NaiveDateTime, Utc};
use clap::{Parser, Subcommand};

use trip_planner::domain::Journey;
use trip_planner::favorites::FavoriteStore;
use trip_planner::stations::StationList;
use trip_planner::tfnsw::{TripClient, TripClientConfig};

/// Environment variable holding the Transport NSW API key.
const API_KEY_VAR: &str = "TNSW_API_KEY";

/// Default location of the saved-trips file.
const FAVORITES_FILE: &str = "trips.txt";

/// Default location of the station name list.
const STATIONS_FILE: &str = "stations.txt";

/// Format accepted by `--at`.
const AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
#[command(name = "trip-planner", version, about = "Plan Sydney Trains journeys from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan a trip between two stations
    Plan {
        /// Origin station name
        origin: String,
        /// Destination station name
        destination: String,
        /// Departure time in Sydney local time, "YYYY-MM-DD HH:MM" (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Also print each journey's stop sequence and alerts
        #[arg(long)]
        detailed: bool,
        /// Override the Trip Planner API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Manage saved trips
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Print the station name list, optionally filtered
    Stations {
        /// Case-insensitive substring to filter by
        term: Option<String>,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List saved trips
    List,
    /// Save a new trip
    Add { origin: String, destination: String },
    /// Remove a saved trip by its list position (starting at 1)
    Remove { position: usize },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Plan {
            origin,
            destination,
            at,
            detailed,
            base_url,
            timeout,
        } => plan(&origin, &destination, at.as_deref(), detailed, base_url, timeout).await,
        Command::Favorites { action } => favorites(action),
        Command::Stations { term } => stations(term.as_deref()),
    }
}

async fn plan(
    origin: &str,
    destination: &str,
    at: Option<&str>,
    detailed: bool,
    base_url: Option<String>,
    timeout: u64,
) -> Result<(), Box<dyn Error>> {
    let api_key = std::env::var(API_KEY_VAR)
        .map_err(|_| format!("{API_KEY_VAR} is not set; get a key from opendata.transport.nsw.gov.au"))?;

    let mut config = TripClientConfig::new(api_key).with_timeout(timeout);
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    let tz_offset = config.tz_offset;
    let client = TripClient::new(config)?;

    let departure = match at {
        Some(s) => {
            let local = NaiveDateTime::parse_from_str(s, AT_FORMAT)
                .map_err(|_| format!("invalid --at value {s:?}; expected \"{AT_FORMAT}\""))?;
            tz_offset.to_utc(local)
        }
        None => Utc::now(),
    };

    let parsed = client.plan_trip(origin, destination, departure).await?;

    if !parsed.warnings.is_empty() {
        eprintln!(
            "note: {} journey(s) in the response were malformed and skipped",
            parsed.warnings.len()
        );
    }

    if parsed.journeys.is_empty() {
        println!("No direct rail journeys found from {origin} to {destination}.");
        println!("Multi-leg and non-train options are not supported; try different stations.");
        return Ok(());
    }

    println!("{origin} to {destination}\n");
    for (i, journey) in parsed.journeys.iter().enumerate() {
        print_journey(i + 1, journey, detailed);
    }

    Ok(())
}

fn print_journey(position: usize, journey: &Journey, detailed: bool) {
    let leg = journey.first_leg();

    println!(
        "{position}. {}  dep {}  arr {}  ({} min)",
        leg.line_name,
        journey.departure_time().format("%H:%M"),
        journey.arrival_time().format("%H:%M"),
        leg.duration().num_minutes(),
    );
    println!(
        "   {} (platform {}) -> {} (platform {}), towards {}",
        leg.origin.name,
        leg.origin.platform,
        leg.destination.name,
        leg.destination.platform,
        leg.final_station,
    );
    if !leg.carriage_count.is_empty() {
        println!("   {} carriages", leg.carriage_count);
    }
    if journey.adult_price > 0.0 || journey.child_price > 0.0 {
        println!(
            "   adult ${:.2}, child ${:.2}",
            journey.adult_price, journey.child_price
        );
    }

    if detailed {
        if !leg.stop_sequence.is_empty() {
            println!("   stops:");
            for stop in &leg.stop_sequence {
                if stop.platform.is_empty() {
                    println!("     {}", stop.name);
                } else {
                    println!("     {} (platform {})", stop.name, stop.platform);
                }
            }
        }
        for alert in &leg.alerts {
            println!("   alert [{}]: {}", alert.priority, alert.title);
            for line in alert.content.lines() {
                println!("     {line}");
            }
            println!("     {}", alert.url);
        }
    }

    println!();
}

fn favorites(action: FavoritesAction) -> Result<(), Box<dyn Error>> {
    let mut store = FavoriteStore::load(FAVORITES_FILE)?;

    match action {
        FavoritesAction::List => {
            if store.is_empty() {
                println!("No saved trips.");
            }
            for (i, trip) in store.trips().iter().enumerate() {
                println!("{}. {trip}", i + 1);
            }
        }
        FavoritesAction::Add {
            origin,
            destination,
        } => {
            store.add(&origin, &destination)?;
            println!("Saved {origin} to {destination}.");
        }
        FavoritesAction::Remove { position } => {
            if position == 0 || !store.remove(position - 1)? {
                return Err(format!("no saved trip at position {position}").into());
            }
            println!("Removed trip {position}.");
        }
    }

    Ok(())
}

fn stations(term: Option<&str>) -> Result<(), Box<dyn Error>> {
    let list = StationList::load(STATIONS_FILE)
        .map_err(|e| format!("could not read {STATIONS_FILE}: {e}"))?;

    let matches = list.filter(term.unwrap_or(""));
    if matches.is_empty() {
        println!("No matching stations.");
    }
    for name in matches {
        println!("{name}");
    }

    Ok(())
}
