pub mod chain;
pub mod fees;
pub mod rate;
pub mod response;
pub mod simulation;

pub use chain::*;
pub use fees::*;
pub use rate::*;
pub use response::*;
pub use simulation::*;
