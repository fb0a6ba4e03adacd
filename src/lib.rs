//! Emergency Care Simulator
//!
//! A discrete-event simulation of patient flow through an emergency-care
//! facility: arrival, registration, screening, consultation and optional
//! exams, each served by a limited pool of attendants, nurses and doctors.
//!
//! # Overview
//!
//! Patients arrive according to a configurable inter-arrival distribution and
//! receive a priority class. Each care stage has a waiting queue split into
//! five priority classes; a worker that frees up takes its next patient from a
//! class chosen by weighted roulette. At the end of a run the simulation
//! reports waiting times, queue lengths and worker idle time.
//!
//! ## Key Features
//!
//! - **Time-ordered event processing**: a min-heap future event list with
//!   insertion-order tie-breaking and a hard time horizon
//! - **Priority-class queues**: weighted class selection, FIFO or LIFO within
//!   a class, waiting time and length statistics
//! - **Nine service-time distributions**: Beta, Exponential, Gamma, LogNormal,
//!   Normal, Pareto, Triangular, Uniform and Weibull
//! - **Reproducible runs**: the random generator is seeded from the
//!   configuration
//! - **Reports**: one CSV line with a fixed header, a text report, or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use emergency_care_simulator::*;
//!
//! let config = SimulationConfig {
//!     total_time: 600.0,
//!     doctors: 4,
//!     seed: Some(3),
//!     ..Default::default()
//! };
//!
//! let mut simulation = Simulation::new(config)?;
//! let processed = simulation.run()?;
//!
//! let stats = simulation.statistics();
//! println!("{} events, {} patients", processed, stats.total_patients);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`random`]: distributions and roulette selection
//! - [`queue`]: the future event list and the patient waiting queues
//! - [`patient`]: patients and the patient registry
//! - [`staff`]: workers and the worker pool
//! - [`events`]: events and their transitions
//! - [`simulation`]: engine, statistics, logging and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Random    │    │   Queue     │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Distribut.  │◄───┤ Event queue │
//! │ Enums       │    │ Roulette    │    │ Waiting q.  │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Patient /   │    │   Events    │    │ Simulation  │
//! │ Staff       │    │             │    │             │
//! │ Registry    │◄───┤ Event       │◄───┤ Engine      │
//! │ Worker pool │    │ Transitions │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod patient;
pub mod queue;
pub mod random;
pub mod simulation;
pub mod staff;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs,
    ConfigError,
    ConfigValidationError,
    DistributionFamily,
    DistributionSpec,
    // Identifiers
    EventId,
    IdGenerator,
    OutputFormat,
    PatientId,
    // Enums
    Priority,
    QueueDiscipline,
    // Configuration
    SimulationConfig,
    Stage,
    WorkerId,
    WorkerKind,
};

// Randomness
pub use random::{roulette, DistributionError, RandomDistribution, StageDistributions};

// Queues
pub use queue::{PatientWaitingQueue, PriorityEventQueue, QueueError};

// Entities
pub use patient::{Patient, PatientRegistry};
pub use staff::{Worker, WorkerPool};

// Events
pub use events::{format_clock, Event, EventKind};

// Simulation types and functionality
pub use simulation::{
    LoggingConfig, Simulation, SimulationError, SimulationResult, SimulationStatistics,
    DEFAULT_CSV_SEPARATOR,
};
