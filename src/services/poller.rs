use crate::models::{ChainDescriptor, ExchangeRate};
use crate::services::normalizer;
use crate::services::price::RateSource;
use crate::services::source::FeeSource;
use crate::services::store::GasStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, timeout, MissedTickBehavior};

// Owner side of a background polling loop. stop() is the graceful exit;
// dropping the handle aborts the task outright.
pub struct PollerHandle {
    label: String,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    // Signals the loop to exit and waits for it. An in-flight round-trip is
    // bounded by the poll period, so this waits at most one period. Calling
    // it a second time is a no-op.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
            tracing::debug!("Poller {} stopped", self.label);
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// One tick per period: read the fee market, normalize it, store the quote.
// The first tick fires immediately on spawn.
pub fn spawn_fee_poller(
    descriptor: ChainDescriptor,
    source: Arc<dyn FeeSource>,
    store: Arc<GasStore>,
    period: Duration,
) -> PollerHandle {
    let (tx, mut rx) = oneshot::channel();
    let label = format!("fees:{}", descriptor.chain);

    tracing::info!("Polling {} fees every {:?}", descriptor.chain, period);

    let task = tokio::spawn(async move {
        let mut clock = interval(period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut rx => break,
                _ = clock.tick() => {
                    // A round-trip slower than the period is abandoned so
                    // the next tick supersedes it
                    let tick = poll_fees_once(&descriptor, source.as_ref(), &store);
                    if timeout(period, tick).await.is_err() {
                        tracing::warn!(
                            "{} fee poll exceeded {:?}, abandoned",
                            descriptor.chain,
                            period
                        );
                    }
                }
            }
        }
    });

    PollerHandle {
        label,
        shutdown: Some(tx),
        task: Some(task),
    }
}

// Same loop for the exchange rate.
pub fn spawn_rate_poller(
    source: Arc<dyn RateSource>,
    store: Arc<GasStore>,
    period: Duration,
) -> PollerHandle {
    let (tx, mut rx) = oneshot::channel();

    tracing::info!("Polling ETH/USD rate every {:?}", period);

    let task = tokio::spawn(async move {
        let mut clock = interval(period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut rx => break,
                _ = clock.tick() => {
                    let tick = poll_rate_once(source.as_ref(), &store);
                    if timeout(period, tick).await.is_err() {
                        tracing::warn!("Exchange rate poll exceeded {:?}, abandoned", period);
                    }
                }
            }
        }
    });

    PollerHandle {
        label: "rate:eth-usd".to_string(),
        shutdown: Some(tx),
        task: Some(task),
    }
}

async fn poll_fees_once(descriptor: &ChainDescriptor, source: &dyn FeeSource, store: &GasStore) {
    let base_fee = match source.base_fee().await {
        Ok(fee) => fee,
        Err(e) => {
            tracing::warn!("Skipping {} fee sample: {}", descriptor.chain, e);
            return;
        }
    };

    // A node that cannot suggest a tip still has a usable base fee; the
    // normalizer substitutes its default tip for None
    let priority_fee = match source.priority_fee().await {
        Ok(tip) => Some(tip),
        Err(e) => {
            tracing::warn!("No {} priority fee, using default tip: {}", descriptor.chain, e);
            None
        }
    };

    let quote = normalizer::normalize(descriptor, base_fee, priority_fee);
    tracing::debug!("{} average fee: {:.2} gwei", descriptor.chain, quote.average_gwei);
    store.record_quote(descriptor.chain, quote).await;
}

async fn poll_rate_once(source: &dyn RateSource, store: &GasStore) {
    match source.usd_price().await {
        Ok(usd) => {
            tracing::debug!("ETH/USD rate: {:.2}", usd);
            store.record_rate(ExchangeRate::now(usd)).await;
        }
        Err(e) => {
            tracing::warn!("Keeping last exchange rate: {}", e);
        }
    }
}
