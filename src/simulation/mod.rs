//! Simulation control
//!
//! This module contains the simulation engine, statistics collection, logging
//! setup and error handling.
//!
//! # Overview
//!
//! - **Simulation**: the clock, the future event list and the run loop
//! - **SimulationStatistics**: end-of-run metrics as CSV, text or JSON
//! - **LoggingConfig**: tracing subscriber setup for the binary
//! - **SimulationError**: errors of every layer, converted with `?`
//!
//! # Usage Example
//!
//! ```rust
//! use emergency_care_simulator::simulation::*;
//! use emergency_care_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     total_time: 480.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut simulation = Simulation::new(config).unwrap();
//! simulation.run().unwrap();
//!
//! let stats = simulation.statistics();
//! assert!(stats.total_simulation_time <= 480.0);
//! println!("{}", SimulationStatistics::csv_header(DEFAULT_CSV_SEPARATOR));
//! println!("{}", stats.to_csv(DEFAULT_CSV_SEPARATOR));
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use statistics::*;
