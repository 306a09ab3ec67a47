pub mod config;
pub mod error;
pub mod types;

pub use config::{GenerationParams, SimulationConfig};
pub use error::{Result, SimError};
pub use types::{Policy, RatioRange, StateTotals};
