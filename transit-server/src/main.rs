use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_server::config::ServerConfig;
use transit_server::history::SearchHistory;
use transit_server::live::{Fleet, LiveFeed, LiveFeedConfig};
use transit_server::network::{NetworkSnapshot, StopDirectory};
use transit_server::planner::SearchConfig;
use transit_server::store::{FileProvider, RouteProvider, SeedProvider};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_server=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Reference data is loaded once; a failure here stops startup.
    let provider: Box<dyn RouteProvider> = match &config.seed_file {
        Some(path) => Box::new(FileProvider::open(path)?),
        None => {
            info!("no seed file configured, using built-in sample network");
            Box::new(SeedProvider::new())
        }
    };

    let network = NetworkSnapshot::load(provider.as_ref())?;
    let stops = StopDirectory::new(provider.all_bus_stops()?);
    let buses = provider.all_buses()?;

    let feed = LiveFeed::new(&LiveFeedConfig {
        position_ttl: config.position_ttl,
        ..LiveFeedConfig::default()
    });
    let published = feed.publish_known_positions(&buses).await;
    let fleet = Fleet::new(buses);
    info!(
        stops = stops.len(),
        buses = fleet.len().await,
        positions = published,
        "reference data loaded"
    );

    let state = AppState::new(
        network,
        stops,
        fleet,
        feed,
        SearchHistory::new(config.history_capacity),
        SearchConfig::default(),
    );
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Bus Route Planner listening on http://{}", config.bind_addr);
    info!("  POST /search                        - Suggest routes");
    info!("  GET  /api/routes                    - Active routes");
    info!("  GET  /api/bus-stops                 - Stop directory");
    info!("  GET  /api/stops/search              - Search stops by name");
    info!("  GET  /api/buses                     - Buses in service");
    info!("  POST /api/buses/:bus_id/location    - Report a bus position");
    info!("  GET  /api/buses/live                - Live positions (SSE)");

    axum::serve(listener, app).await?;
    Ok(())
}
