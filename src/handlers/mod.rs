pub mod fees;
pub mod health;
pub mod rate;
pub mod simulation;

pub use fees::*;
pub use health::*;
pub use rate::*;
pub use simulation::*;

use crate::models::ChainDescriptor;
use crate::services::GasStore;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GasStore>,
    pub chains: Arc<Vec<ChainDescriptor>>,
    pub started_at: Instant,
}
