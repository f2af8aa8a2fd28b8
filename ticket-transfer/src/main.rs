use std::error::Error;

use chrono::NaiveDate;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ticket_transfer::kyfw::{KyfwClient, KyfwConfig, MockTripSource, TripSource};
use ticket_transfer::planner::TransferConfig;
use ticket_transfer::query::TransferPlan;
use ticket_transfer::report;
use ticket_transfer::stations::StationDirectory;

const STATION_SHENZHEN_BEI: &str = "IOQ";
const STATION_GUANGZHOU_NAN: &str = "IZQ";
const STATION_NANTOU: &str = "NOQ";
const STATION_RONGGUI: &str = "RUQ";

/// Default path of the station table.
const DEFAULT_STATION_TABLE: &str = "station_name.js";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let date = match std::env::var("TRAVEL_DATE") {
        Ok(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        Err(_) => chrono::Local::now().date_naive(),
    };

    let table_path =
        std::env::var("STATION_TABLE").unwrap_or_else(|_| DEFAULT_STATION_TABLE.to_string());
    let stations = StationDirectory::load(&table_path)?;
    info!(path = %table_path, stations = stations.len(), "loaded station table");

    let config = transfer_config_from_env();
    info!(
        min = config.min_gap_mins,
        max = config.max_gap_mins,
        "transfer window"
    );

    // KYFW_MOCK_DIR serves saved responses instead of hitting the live site
    if let Ok(dir) = std::env::var("KYFW_MOCK_DIR") {
        let source = MockTripSource::from_dir(&dir)?;
        info!(dir = %dir, routes = source.len(), "using mock trip data");
        run(&source, date, &stations, &config).await
    } else {
        let mut kyfw_config = KyfwConfig::new();
        if let Ok(url) = std::env::var("KYFW_BASE_URL") {
            kyfw_config = kyfw_config.with_base_url(url);
        }
        let client = KyfwClient::new(kyfw_config)?;
        run(&client, date, &stations, &config).await
    }
}

async fn run<S: TripSource>(
    source: &S,
    date: NaiveDate,
    stations: &StationDirectory,
    config: &TransferConfig,
) -> Result<(), Box<dyn Error>> {
    println!("{date}");

    let journeys = [
        (
            "Outbound",
            STATION_SHENZHEN_BEI,
            STATION_GUANGZHOU_NAN,
            STATION_RONGGUI,
        ),
        (
            "Return",
            STATION_NANTOU,
            STATION_GUANGZHOU_NAN,
            STATION_SHENZHEN_BEI,
        ),
    ];

    for (label, origin, via, destination) in journeys {
        let plan = TransferPlan::fetch(source, date, origin, via, destination).await?;
        println!("{label}:");
        for t in plan.transfers(config) {
            println!("{}", report::transfer(&t, stations));
        }
    }

    Ok(())
}

fn transfer_config_from_env() -> TransferConfig {
    let defaults = TransferConfig::default();
    TransferConfig::new(
        env_minutes("MIN_TRANSFER_MINS", defaults.min_gap_mins),
        env_minutes("MAX_TRANSFER_MINS", defaults.max_gap_mins),
    )
}

fn env_minutes(name: &str, default: i32) -> i32 {
    match std::env::var(name) {
        Ok(s) => s.parse().unwrap_or_else(|_| {
            warn!(var = name, value = %s, "not a number of minutes, using default");
            default
        }),
        Err(_) => default,
    }
}
