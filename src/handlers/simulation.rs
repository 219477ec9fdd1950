use crate::{
    handlers::AppState,
    models::{ApiResponse, Chain, SimulationInput, SimulationResult, SimulationSettings},
    services::simulator,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

// The amount arrives as the raw text the user typed; anything unparseable
// is coerced to zero rather than rejected
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub amount: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub settings: SimulationSettings,
    pub chains: Vec<ChainSimulation>,
}

// result is null while the simulation is disabled or while the chain's
// quote or the exchange rate is still missing
#[derive(Debug, Serialize)]
pub struct ChainSimulation {
    pub chain: Chain,
    pub result: Option<SimulationResult>,
}

pub async fn get_simulation(State(state): State<AppState>) -> Json<ApiResponse<SimulationReport>> {
    Json(ApiResponse::ok(build_report(&state).await))
}

pub async fn update_simulation(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Json<ApiResponse<SimulationReport>> {
    let input = SimulationInput::from_user_amount(&request.amount);
    let settings = SimulationSettings {
        input,
        enabled: request.enabled,
    };

    tracing::info!(
        "Simulation {}, amount {} ETH",
        if settings.enabled { "enabled" } else { "disabled" },
        input.amount
    );
    state.store.set_simulation(settings).await;

    Json(ApiResponse::ok(build_report(&state).await))
}

// Recomputed from current store state on every read
async fn build_report(state: &AppState) -> SimulationReport {
    let settings = state.store.simulation().await;
    let rate = state.store.rate().await;

    let mut chains = Vec::with_capacity(state.chains.len());
    for descriptor in state.chains.iter() {
        let result = if settings.enabled {
            let quote = state.store.quote(descriptor.chain).await;
            simulator::estimate_usd_cost(quote.as_ref(), rate.as_ref(), &settings.input)
        } else {
            None
        };
        chains.push(ChainSimulation {
            chain: descriptor.chain,
            result,
        });
    }

    SimulationReport { settings, chains }
}
