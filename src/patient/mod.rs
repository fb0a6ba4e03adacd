//! Patients and the population they belong to
//!
//! A patient is created on arrival with a priority and an exams flag drawn
//! from the configuration, then stays in the [`PatientRegistry`] for the rest
//! of the run so end-of-run statistics see every arrival.

#[allow(clippy::module_inception)]
pub mod patient;
pub mod registry;

pub use patient::*;
pub use registry::*;
