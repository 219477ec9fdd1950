use crate::constants::{SIMULATION_GAS_LIMIT, WEI_PER_GWEI};
use crate::models::{ExchangeRate, FeeQuote, SimulationInput, SimulationResult};

// Nominal amount plus the gas burned at the average tier (plus the L1
// settlement component where the quote carries one), in USD. None while the
// quote or the exchange rate is missing so callers can render "calculating"
// instead of a misleading zero.
pub fn estimate_usd_cost(
    quote: Option<&FeeQuote>,
    rate: Option<&ExchangeRate>,
    input: &SimulationInput,
) -> Option<SimulationResult> {
    let quote = quote?;
    let rate = rate?;

    let mut gas_cost_native =
        quote.average_gwei * SIMULATION_GAS_LIMIT as f64 / WEI_PER_GWEI as f64;
    if let Some(l1_fee) = quote.l1_settlement_eth {
        gas_cost_native += l1_fee;
    }

    let estimated_usd_cost = input.amount * rate.usd + gas_cost_native * rate.usd;

    Some(SimulationResult { estimated_usd_cost })
}
