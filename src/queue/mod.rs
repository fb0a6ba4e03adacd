//! Queues driving the simulation
//!
//! # Overview
//!
//! - **PriorityEventQueue**: the future-event list, a min-heap on event time
//!   with insertion-order tie-breaking and replaceable priorities
//! - **PatientWaitingQueue**: one waiting line per care stage, split into five
//!   priority classes and drained by weighted random class selection
//!
//! # Usage Example
//!
//! ```rust
//! use emergency_care_simulator::queue::*;
//!
//! let mut events = PriorityEventQueue::new();
//! events.push("second", 2.5);
//! events.push("first", 1.0);
//!
//! let (item, time) = events.pop().unwrap();
//! assert_eq!((item, time), ("first", 1.0));
//! assert_eq!(events.len(), 1);
//! ```

pub mod event_queue;
pub mod patient_queue;

pub use event_queue::*;
pub use patient_queue::*;

/// Errors raised by queue operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// Pop from a queue holding nothing
    #[error("Queue is empty")]
    Empty,

    /// Operation on an item that is not queued
    #[error("Item is not queued: {0}")]
    UnknownItem(String),
}
