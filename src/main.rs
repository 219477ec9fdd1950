use anyhow::Result;
use axum::{routing::get, Router};
use gasboard::{config::Config, handlers::*, services::*};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting gasboard v{}", env!("CARGO_PKG_VERSION"));

    // Shared state
    let store = Arc::new(GasStore::new());
    let chains = Arc::new(config.chain_descriptors());

    // Launch one fee poller per chain plus the exchange rate poller
    let mut pollers = Vec::new();
    for descriptor in chains.iter() {
        let source: Arc<dyn FeeSource> = Arc::new(RpcFeeSource::connect(descriptor)?);
        pollers.push(spawn_fee_poller(
            descriptor.clone(),
            source,
            store.clone(),
            config.fee_poll_interval,
        ));
    }

    let rate_source: Arc<dyn RateSource> =
        Arc::new(CoinGeckoClient::new(config.price_api_url.clone()));
    pollers.push(spawn_rate_poller(
        rate_source,
        store.clone(),
        config.rate_poll_interval,
    ));

    // Build application state
    let app_state = AppState {
        store: store.clone(),
        chains: chains.clone(),
        started_at: Instant::now(),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/fees", get(list_fees))
        .route("/api/fees/:chain", get(chain_fees))
        .route("/api/fees/:chain/history", get(chain_history))
        .route("/api/rate", get(current_rate))
        .route("/api/simulation", get(get_simulation).put(update_simulation))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Fee board: http://{}/api/fees", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let in-flight ticks finish before exiting
    futures::future::join_all(pollers.iter_mut().map(|poller| poller.stop())).await;
    tracing::info!("All pollers stopped");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down gracefully...");
}
