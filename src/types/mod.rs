//! Core types and identifiers for the emergency care simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: sequential ids for patients, workers and events
//! - **Enums**: priorities, worker kinds, care stages, distribution families
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use emergency_care_simulator::types::*;
//!
//! let mut ids = IdGenerator::new();
//! let patient = ids.patient();
//! let worker = ids.worker();
//! assert!(worker.0 > patient.0);
//!
//! assert_eq!(Stage::Consultation.worker_kind(), WorkerKind::Doctor);
//!
//! let config = SimulationConfig {
//!     total_time: 480.0,
//!     doctors: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
