use crate::{
    error::GasboardError,
    handlers::AppState,
    models::{ApiResponse, Chain, ChainFees, FeeSample},
};
use axum::{
    extract::{Path, State},
    Json,
};
use std::str::FromStr;

// Chains whose poller has not produced a quote yet appear with quote: null
pub async fn list_fees(State(state): State<AppState>) -> Json<ApiResponse<Vec<ChainFees>>> {
    let mut board = Vec::with_capacity(state.chains.len());
    for descriptor in state.chains.iter() {
        board.push(ChainFees {
            chain: descriptor.chain,
            label: descriptor.chain.label().to_string(),
            quote: state.store.quote(descriptor.chain).await,
        });
    }

    Json(ApiResponse::ok(board))
}

pub async fn chain_fees(
    State(state): State<AppState>,
    Path(chain): Path<String>,
) -> Result<Json<ApiResponse<ChainFees>>, GasboardError> {
    let chain = Chain::from_str(&chain)?;

    Ok(Json(ApiResponse::ok(ChainFees {
        chain,
        label: chain.label().to_string(),
        quote: state.store.quote(chain).await,
    })))
}

pub async fn chain_history(
    State(state): State<AppState>,
    Path(chain): Path<String>,
) -> Result<Json<ApiResponse<Vec<FeeSample>>>, GasboardError> {
    let chain = Chain::from_str(&chain)?;

    Ok(Json(ApiResponse::ok(state.store.history(chain).await)))
}
