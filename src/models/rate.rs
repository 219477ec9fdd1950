use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One spot rate shared across all tracked chains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub usd: f64,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    pub fn now(usd: f64) -> Self {
        Self {
            usd,
            fetched_at: Utc::now(),
        }
    }
}
