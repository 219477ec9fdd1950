use crate::constants::{ARBITRUM_L1_SETTLEMENT_ETH, FALLBACK_PRIORITY_FEE_WEI, WEI_PER_GWEI};
use crate::models::{ChainDescriptor, FeeQuote};
use chrono::Utc;
use ethers::types::U256;

// Tier math runs on the wei integers: fast = base + 2*priority, average =
// base + priority, slow = base + priority/2 (truncating division). A missing
// priority fee falls back to a fixed 1.5 gwei instead of failing.
pub fn normalize(
    descriptor: &ChainDescriptor,
    base_fee: U256,
    priority_fee: Option<U256>,
) -> FeeQuote {
    let priority = priority_fee.unwrap_or(U256::from(FALLBACK_PRIORITY_FEE_WEI));

    let fast = base_fee + priority * U256::from(2);
    let average = base_fee + priority;
    let slow = base_fee + priority / U256::from(2);

    FeeQuote {
        slow_gwei: to_display_gwei(slow),
        average_gwei: to_display_gwei(average),
        fast_gwei: to_display_gwei(fast),
        base_fee_gwei: to_display_gwei(base_fee),
        priority_fee_gwei: to_display_gwei(priority),
        observed_at: Utc::now(),
        l1_settlement_eth: descriptor
            .has_l1_settlement
            .then_some(ARBITRUM_L1_SETTLEMENT_ETH),
    }
}

// Wei to gwei, rounded to two decimals for display
fn to_display_gwei(wei: U256) -> f64 {
    let gwei = wei.as_u128() as f64 / WEI_PER_GWEI as f64;
    (gwei * 100.0).round() / 100.0
}
