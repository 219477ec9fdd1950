use crate::constants::MAX_HISTORY_SAMPLES;
use crate::models::{Chain, ExchangeRate, FeeQuote, FeeSample, SimulationSettings};
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

// Every write is a single-field wholesale replacement; there is no
// cross-field transaction, so a reader may pair a quote and a rate taken
// on different ticks.
#[derive(Default)]
pub struct GasStore {
    quotes: RwLock<HashMap<Chain, FeeQuote>>,
    history: RwLock<HashMap<Chain, VecDeque<FeeSample>>>,
    rate: RwLock<Option<ExchangeRate>>,
    simulation: RwLock<SimulationSettings>,
}

impl GasStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_quote(&self, chain: Chain, quote: FeeQuote) {
        let sample = FeeSample {
            observed_at: quote.observed_at,
            average_gwei: quote.average_gwei,
        };

        self.quotes.write().await.insert(chain, quote);

        let mut history = self.history.write().await;
        let series = history.entry(chain).or_default();
        if series.len() >= MAX_HISTORY_SAMPLES {
            series.pop_front();
        }
        series.push_back(sample);
    }

    pub async fn quote(&self, chain: Chain) -> Option<FeeQuote> {
        self.quotes.read().await.get(&chain).cloned()
    }

    pub async fn history(&self, chain: Chain) -> Vec<FeeSample> {
        self.history
            .read()
            .await
            .get(&chain)
            .map(|series| series.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn record_rate(&self, rate: ExchangeRate) {
        *self.rate.write().await = Some(rate);
    }

    pub async fn rate(&self) -> Option<ExchangeRate> {
        self.rate.read().await.clone()
    }

    pub async fn simulation(&self) -> SimulationSettings {
        *self.simulation.read().await
    }

    pub async fn set_simulation(&self, settings: SimulationSettings) {
        *self.simulation.write().await = settings;
    }
}
