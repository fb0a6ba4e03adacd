//! Patient records

use crate::random::roulette;
use crate::types::{EventId, PatientId, Priority, SimulationConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A patient moving through the emergency-care stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier
    pub id: PatientId,
    /// Urgency class, fixed at creation
    pub priority: Priority,
    /// Whether the patient goes to exams after consultation
    pub needs_exams: bool,
    /// Time spent in waiting queues, summed over every stage
    pub total_waiting_time: f64,
    /// Longest single stay in a waiting queue
    pub max_waiting_time: f64,
    current_event: Option<EventId>,
    last_event: Option<EventId>,
}

impl Patient {
    /// Create a patient with explicit attributes
    pub fn new(id: PatientId, priority: Priority, needs_exams: bool) -> Self {
        Self {
            id,
            priority,
            needs_exams,
            total_waiting_time: 0.0,
            max_waiting_time: 0.0,
            current_event: None,
            last_event: None,
        }
    }

    /// Create a patient with a priority drawn from the configured priority
    /// probabilities and an exams flag drawn with the exams probability
    pub fn generate<R: Rng + ?Sized>(
        id: PatientId,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Self {
        let priority = roulette(&config.priority_probabilities, rng)
            .and_then(Priority::from_index)
            .unwrap_or(Priority::NonUrgent);
        let needs_exams = rng.gen::<f64>() < config.exams_probability;
        Self::new(id, priority, needs_exams)
    }

    /// Event currently holding this patient, if any
    pub fn current_event(&self) -> Option<EventId> {
        self.current_event
    }

    /// Most recent event superseded by a later one
    pub fn last_event(&self) -> Option<EventId> {
        self.last_event
    }

    /// Bind or clear the current event; a bound event moves to `last_event`
    pub fn set_current_event(&mut self, event: Option<EventId>) {
        if let Some(previous) = self.current_event {
            self.last_event = Some(previous);
        }
        self.current_event = event;
    }

    /// Record one finished wait
    pub fn record_wait(&mut self, waited: f64) {
        if waited > self.max_waiting_time {
            self.max_waiting_time = waited;
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient({}, {}", self.id, self.priority)?;
        if self.needs_exams {
            write!(f, ", exams")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_event_tracking_moves_previous_to_last() {
        let mut patient = Patient::new(PatientId(1), Priority::Urgent, false);
        assert_eq!(patient.current_event(), None);

        patient.set_current_event(Some(EventId(10)));
        assert_eq!(patient.current_event(), Some(EventId(10)));
        assert_eq!(patient.last_event(), None);

        patient.set_current_event(None);
        assert_eq!(patient.current_event(), None);
        assert_eq!(patient.last_event(), Some(EventId(10)));

        // clearing twice keeps the last bound event
        patient.set_current_event(None);
        assert_eq!(patient.last_event(), Some(EventId(10)));

        patient.set_current_event(Some(EventId(20)));
        patient.set_current_event(Some(EventId(30)));
        assert_eq!(patient.last_event(), Some(EventId(20)));
    }

    #[test]
    fn test_generate_follows_config() {
        let config = SimulationConfig {
            priority_probabilities: [0.0, 0.0, 0.0, 0.0, 1.0],
            exams_probability: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        for n in 0..50 {
            let patient = Patient::generate(PatientId(n), &config, &mut rng);
            assert_eq!(patient.priority, Priority::Emergency);
            assert!(patient.needs_exams);
        }

        let config = SimulationConfig {
            exams_probability: 0.0,
            ..Default::default()
        };
        for n in 0..50 {
            assert!(
                !Patient::generate(PatientId(n), &config, &mut rng).needs_exams
            );
        }
    }

    #[test]
    fn test_record_wait_keeps_maximum() {
        let mut patient = Patient::new(PatientId(3), Priority::NonUrgent, true);
        patient.record_wait(4.0);
        patient.record_wait(2.5);
        assert_eq!(patient.max_waiting_time, 4.0);
        assert_eq!(patient.to_string(), "Patient(3, NON_URGENT, exams)");
    }
}
