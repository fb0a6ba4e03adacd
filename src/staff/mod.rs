//! Workers serving the care stages
//!
//! Attendants register patients, nurses run screening and exams, doctors run
//! consultations. A worker is idle exactly when it holds no current event.

pub mod pool;
pub mod worker;

pub use pool::*;
pub use worker::*;
