//! Segregation Sim - Monte Carlo study of unevenness and Logan-Parman bias

pub mod aggregate;
pub mod core;
pub mod county;
pub mod partition;
