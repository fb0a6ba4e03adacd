//! Events and their transitions
//!
//! # Overview
//!
//! - **Event**: a scheduled completion for one patient, with the worker it
//!   occupies carried in its [`EventKind`]
//! - **Transitions**: [`Event::process`] moves the patient on to its next
//!   stage and hands the freed worker its next patient
//!
//! # Usage Example
//!
//! ```rust
//! use emergency_care_simulator::events::*;
//! use emergency_care_simulator::types::*;
//!
//! let event = Event::new(
//!     EventId(7),
//!     60.0,
//!     12.5,
//!     PatientId(3),
//!     EventKind::ScreeningEnd { nurse: WorkerId(2) },
//! );
//! assert_eq!(event.time, 72.5);
//! assert_eq!(event.kind.stage(), Some(Stage::Screening));
//! assert_eq!(format_clock(event.time), "1:12:30");
//! ```

pub mod event;
pub mod transitions;

pub use event::*;
