use std::net::SocketAddr;
use std::sync::Arc;
use flightdeck_api::{app, AppState};
use flightdeck_search::{FlightLookup, ThreadRandom};
use flightdeck_store::{app_config::Config, CsvReferenceLoader, ReferenceStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flightdeck_api=debug,flightdeck_store=info,flightdeck_search=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting FlightDeck API on port {}", config.server.port);

    let loader = CsvReferenceLoader::new(&config.data.airlines_path, &config.data.airports_path);
    let store = Arc::new(ReferenceStore::new(Arc::new(loader)));

    // Load once up front so requests never hit the disk
    let (airlines, airports) = store.warm();
    tracing::info!(airlines = airlines, airports = airports, "Reference data ready");

    let lookup = FlightLookup::new(store, Arc::new(ThreadRandom))
        .with_conversational_results(config.search.conversational_results);

    let app = app(AppState::new(lookup));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
