//! Worker records

use crate::types::{EventId, WorkerId, WorkerKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An attendant, nurse or doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier
    pub id: WorkerId,
    /// Capability class, never changes
    pub kind: WorkerKind,
    /// Time spent without an event
    pub total_idle_time: f64,
    current_event: Option<EventId>,
    last_event: Option<EventId>,
}

impl Worker {
    /// Create an idle worker
    pub fn new(id: WorkerId, kind: WorkerKind) -> Self {
        Self {
            id,
            kind,
            total_idle_time: 0.0,
            current_event: None,
            last_event: None,
        }
    }

    /// Whether the worker serves no event
    pub fn is_idle(&self) -> bool {
        self.current_event.is_none()
    }

    /// Event being served, if any
    pub fn current_event(&self) -> Option<EventId> {
        self.current_event
    }

    /// Previously served event
    pub fn last_event(&self) -> Option<EventId> {
        self.last_event
    }

    /// Bind the worker to an event, or release it with `None`
    pub fn set_current_event(&mut self, event: Option<EventId>) {
        if let Some(previous) = self.current_event {
            self.last_event = Some(previous);
        }
        self.current_event = event;
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.id)
    }
}
