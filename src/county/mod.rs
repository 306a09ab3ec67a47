//! County Generation
//!
//! Partitions a state's population into synthetic counties with randomized
//! sizes and racial splits under one of three policies.

pub mod generation;
pub mod neighbors;
pub mod record;

pub use generation::{
    generate_centered, generate_counties, generate_random, generate_uniform, Pools,
};
pub use neighbors::{expected_neighbors, logan_parman, simulate_actual};
pub use record::{County, NeighborStats};
