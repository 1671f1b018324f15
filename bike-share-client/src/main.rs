use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use bike_share_client::directory::DirectoryService;
use bike_share_client::domain::{BikeShareSystem, Coordinate, SearchRadius};
use bike_share_client::http::{ApiClient, ApiClientConfig, MockTransport, Transport};
use bike_share_client::location::FixedLocation;
use bike_share_client::retrieval::{CycleOutcome, RetrievalController};

/// How many stations to print.
const LIST_LIMIT: usize = 20;

/// Downtown San Francisco, used when no coordinate is given.
const DEFAULT_LAT: f64 = 37.7749;
const DEFAULT_LON: f64 = -122.4194;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let system = match std::env::var("BIKESHARE_SYSTEM") {
        Ok(name) => match name.parse::<BikeShareSystem>() {
            Ok(system) => system,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => BikeShareSystem::default(),
    };

    let lat = env_f64("BIKESHARE_LAT", DEFAULT_LAT);
    let lon = env_f64("BIKESHARE_LON", DEFAULT_LON);
    let at = match Coordinate::new(lat, lon) {
        Ok(at) => at,
        Err(e) => {
            eprintln!("Bad coordinate: {e}");
            return ExitCode::FAILURE;
        }
    };
    let radius = SearchRadius::new(env_f64("BIKESHARE_RADIUS", SearchRadius::default().miles()));

    // Canned data if a mock directory is given, the live API otherwise.
    if let Ok(dir) = std::env::var("BIKESHARE_MOCK_DIR") {
        match MockTransport::new(&dir) {
            Ok(transport) => run(Arc::new(transport), system, at, radius).await,
            Err(e) => {
                eprintln!("Failed to load mock data from {dir}: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let mut config = ApiClientConfig::new();
        if let Ok(url) = std::env::var("BIKESHARE_BASE_URL") {
            config = config.with_base_url(url);
        }
        match ApiClient::new(config) {
            Ok(client) => run(Arc::new(client), system, at, radius).await,
            Err(e) => {
                eprintln!("Failed to create API client: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

async fn run<T: Transport + 'static>(
    transport: Arc<T>,
    system: BikeShareSystem,
    at: Coordinate,
    radius: SearchRadius,
) -> ExitCode {
    let directory = DirectoryService::new(transport, system);
    let mut controller =
        RetrievalController::new(Arc::new(FixedLocation(at)), directory).with_radius(radius);

    println!(
        "{} stations within {} of {at}",
        system.display_name(),
        if radius.is_unlimited() {
            "any distance".to_string()
        } else {
            radius.formatted()
        }
    );

    let outcome = match controller.trigger().await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Fetch task failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        CycleOutcome::Published { count } => {
            let view = controller.view();
            println!("Found {count} stations");
            println!();
            let now = Utc::now().naive_utc();
            for station in view.stations.iter().take(LIST_LIMIT) {
                let distance = station
                    .distance
                    .map(|d| format!("{d:.2} mi"))
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "  {:<40} {:>3} bikes {:>3} e-bikes {:>9}  (reported {})",
                    station.display_name(),
                    station.regular_bikes_available,
                    station.ebikes_available,
                    distance,
                    station.last_reported_relative(now)
                );
            }
            ExitCode::SUCCESS
        }
        CycleOutcome::LocationUnavailable(e) => {
            eprintln!("No location: {e}");
            ExitCode::FAILURE
        }
        CycleOutcome::NetworkFailure(e) => {
            eprintln!("Failed to fetch stations: {e}");
            ExitCode::FAILURE
        }
        CycleOutcome::Superseded => ExitCode::FAILURE,
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Warning: {key}={value:?} is not a number, using {default}");
            default
        }),
        Err(_) => default,
    }
}
