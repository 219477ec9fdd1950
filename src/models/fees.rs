use crate::models::Chain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Gwei values are rounded to two decimals; the L1 settlement estimate is in
// the native asset and present only for chains that settle to an L1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeQuote {
    pub slow_gwei: f64,
    pub average_gwei: f64,
    pub fast_gwei: f64,
    pub base_fee_gwei: f64,
    pub priority_fee_gwei: f64,
    pub observed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l1_settlement_eth: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSample {
    pub observed_at: DateTime<Utc>,
    pub average_gwei: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainFees {
    pub chain: Chain,
    pub label: String,
    pub quote: Option<FeeQuote>,
}
