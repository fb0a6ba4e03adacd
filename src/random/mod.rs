//! Random sampling for the simulation
//!
//! - [`RandomDistribution`]: the nine supported parametric families, built
//!   from a [`DistributionSpec`](crate::types::DistributionSpec)
//! - [`StageDistributions`]: the arrival and per-stage service distributions
//!   of one configuration
//! - [`roulette`]: weighted index selection, used for patient priorities and
//!   for choosing which priority class leaves a waiting queue

pub mod distribution;
pub mod roulette;

pub use distribution::*;
pub use roulette::roulette;
