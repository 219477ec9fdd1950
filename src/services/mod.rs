pub mod normalizer;
pub mod poller;
pub mod price;
pub mod simulator;
pub mod source;
pub mod store;

pub use poller::{spawn_fee_poller, spawn_rate_poller, PollerHandle};
pub use price::{CoinGeckoClient, RateSource};
pub use source::{FeeSource, RpcFeeSource};
pub use store::GasStore;
