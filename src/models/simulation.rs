use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimulationInput {
    pub amount: f64,
}

impl SimulationInput {
    // Non-numeric, non-finite and negative entries all become zero; user
    // entry is never rejected
    pub fn from_user_amount(raw: &str) -> Self {
        let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
        let amount = if parsed.is_finite() && parsed > 0.0 {
            parsed
        } else {
            0.0
        };
        Self { amount }
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self { amount: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct SimulationSettings {
    pub input: SimulationInput,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    pub estimated_usd_cost: f64,
}
