// Unit scale
pub const WEI_PER_GWEI: u64 = 1_000_000_000;

// Fee normalization
// Substituted when the upstream priority-fee estimate is unavailable (1.5 gwei).
pub const FALLBACK_PRIORITY_FEE_WEI: u64 = 1_500_000_000;

// Placeholder for the Arbitrum L1 settlement component, in ETH. This is a
// known approximation carried on every Arbitrum quote, not a NodeInterface
// estimate.
pub const ARBITRUM_L1_SETTLEMENT_ETH: f64 = 0.00001;

// Cost simulation
pub const SIMULATION_GAS_LIMIT: u64 = 210_000;

// Polling cadence (seconds)
pub const DEFAULT_FEE_POLL_SECS: u64 = 6;
pub const DEFAULT_RATE_POLL_SECS: u64 = 15;

// Charting data sink: samples kept per chain, oldest dropped first
pub const MAX_HISTORY_SAMPLES: usize = 50;
