//! Unique identifier types for the emergency care simulator
//!
//! Patients, workers and events share a single monotonically increasing id
//! sequence handed out by an [`IdGenerator`] owned by each simulation run, so
//! two runs never interfere with each other's numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a worker (attendant, nurse or doctor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id source shared by every entity of one simulation run
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator whose first id is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn next_raw(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate the next patient id
    pub fn patient(&mut self) -> PatientId {
        PatientId(self.next_raw())
    }

    /// Allocate the next worker id
    pub fn worker(&mut self) -> WorkerId {
        WorkerId(self.next_raw())
    }

    /// Allocate the next event id
    pub fn event(&mut self) -> EventId {
        EventId(self.next_raw())
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
