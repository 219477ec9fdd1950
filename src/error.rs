use crate::models::Chain;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GasboardError {
    #[error("RPC error: {0}")]
    Rpc(#[from] ethers::providers::ProviderError),

    #[error("Price feed error: {0}")]
    PriceFeed(String),

    #[error("Latest {0} block carries no base fee")]
    MissingBaseFee(Chain),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub timestamp: chrono::DateTime<Utc>,
    pub request_id: String,
}

impl GasboardError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GasboardError::Rpc(_)
            | GasboardError::MissingBaseFee(_)
            | GasboardError::PriceFeed(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            GasboardError::UnknownChain(_) => (StatusCode::NOT_FOUND, "UNKNOWN_CHAIN"),
            GasboardError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GasboardError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for GasboardError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            error_code: error_code.to_string(),
            timestamp: Utc::now(),
            request_id: Uuid::new_v4().to_string(),
        };

        tracing::error!(
            error = ?self,
            error_code = error_code,
            "Request failed"
        );

        (status, Json(body)).into_response()
    }
}
