use crate::{handlers::AppState, models::HealthStatus};
use axum::{extract::State, Json};
use chrono::Utc;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let mut chains_reporting = 0;
    for descriptor in state.chains.iter() {
        if state.store.quote(descriptor.chain).await.is_some() {
            chains_reporting += 1;
        }
    }
    let rate_ok = state.store.rate().await.is_some();

    let status = if chains_reporting == state.chains.len() && rate_ok {
        "healthy"
    } else if chains_reporting > 0 {
        "degraded"
    } else {
        "starting"
    };

    Json(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        chains_reporting,
        chains_total: state.chains.len(),
        exchange_rate: rate_ok,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}
