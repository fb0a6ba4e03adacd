//! Simulation events
//!
//! Every event marks the end of one activity of one patient: arriving, or
//! finishing a care stage with a worker. Events are plain `Copy` values kept
//! in the simulation's event table and referenced elsewhere by [`EventId`].

use crate::patient::{Patient, PatientRegistry};
use crate::types::{EventId, PatientId, Stage, WorkerId, WorkerKind};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What finishes when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The patient arrived at the facility
    ArrivalEnd,
    /// Registration with an attendant finished
    RegisterEnd {
        /// Attendant doing the registration
        attendant: WorkerId,
    },
    /// Screening by a nurse finished
    ScreeningEnd {
        /// Nurse doing the screening
        nurse: WorkerId,
    },
    /// Consultation with a doctor finished
    ConsultationEnd {
        /// Doctor doing the consultation
        doctor: WorkerId,
    },
    /// Exams by a nurse finished
    ExamsEnd {
        /// Nurse doing the exams
        nurse: WorkerId,
    },
}

impl EventKind {
    /// Kind of event that ends `stage`, served by `worker`
    pub fn for_stage(stage: Stage, worker: WorkerId) -> Self {
        match stage {
            Stage::Registration => EventKind::RegisterEnd { attendant: worker },
            Stage::Screening => EventKind::ScreeningEnd { nurse: worker },
            Stage::Consultation => EventKind::ConsultationEnd { doctor: worker },
            Stage::Exams => EventKind::ExamsEnd { nurse: worker },
        }
    }

    /// Care stage this event ends; `None` for arrivals
    pub fn stage(&self) -> Option<Stage> {
        match self {
            EventKind::ArrivalEnd => None,
            EventKind::RegisterEnd { .. } => Some(Stage::Registration),
            EventKind::ScreeningEnd { .. } => Some(Stage::Screening),
            EventKind::ConsultationEnd { .. } => Some(Stage::Consultation),
            EventKind::ExamsEnd { .. } => Some(Stage::Exams),
        }
    }

    /// Worker bound to the event; `None` for arrivals
    pub fn worker(&self) -> Option<WorkerId> {
        match *self {
            EventKind::ArrivalEnd => None,
            EventKind::RegisterEnd { attendant } => Some(attendant),
            EventKind::ScreeningEnd { nurse } | EventKind::ExamsEnd { nurse } => Some(nurse),
            EventKind::ConsultationEnd { doctor } => Some(doctor),
        }
    }

    /// Kind of the bound worker; `None` for arrivals
    pub fn worker_kind(&self) -> Option<WorkerKind> {
        self.stage().map(Stage::worker_kind)
    }

    /// Event type name as shown in the event log
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ArrivalEnd => "ArrivalEndEvent",
            EventKind::RegisterEnd { .. } => "RegisterEndEvent",
            EventKind::ScreeningEnd { .. } => "ScreeningEndEvent",
            EventKind::ConsultationEnd { .. } => "ConsultationEndEvent",
            EventKind::ExamsEnd { .. } => "ExamsEndEvent",
        }
    }
}

/// A scheduled completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,
    /// Simulated time at which the event fires
    pub time: f64,
    /// Simulated time at which the event was scheduled
    pub created_at: f64,
    /// Patient the event belongs to
    pub patient: PatientId,
    /// What finishes
    pub kind: EventKind,
}

impl Event {
    /// Create an event scheduled at `created_at` that fires `duration` later
    pub fn new(
        id: EventId,
        created_at: f64,
        duration: f64,
        patient: PatientId,
        kind: EventKind,
    ) -> Self {
        Self {
            id,
            time: created_at + duration,
            created_at,
            patient,
            kind,
        }
    }

    /// Time between scheduling and firing
    pub fn duration(&self) -> f64 {
        self.time - self.created_at
    }

    /// Log line with the patient's details looked up in `patients`
    pub fn describe(&self, patients: &PatientRegistry) -> String {
        match patients.get(self.patient) {
            Some(patient) => self.render(Some(patient)),
            None => self.render(None),
        }
    }

    fn render(&self, patient: Option<&Patient>) -> String {
        let patient = match patient {
            Some(patient) => patient.to_string(),
            None => format!("Patient({})", self.patient),
        };
        let mut line = format!(
            "{}({}, {} - {}, {}",
            self.kind.name(),
            self.id,
            format_clock(self.created_at),
            format_clock(self.time),
            patient
        );
        if let (Some(kind), Some(worker)) = (self.kind.worker_kind(), self.kind.worker()) {
            line.push_str(&format!(", {}({})", kind, worker));
        }
        line.push(')');
        line
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

/// Render simulated minutes as `H:MM:SS`, hours not wrapping at a day
pub fn format_clock(minutes: f64) -> String {
    let duration = Duration::milliseconds((minutes * 60_000.0).round() as i64);
    format!(
        "{}:{:02}:{:02}",
        duration.num_hours(),
        duration.num_minutes() % 60,
        duration.num_seconds() % 60
    )
}
