//! Patient population of one simulation run

use super::Patient;
use crate::types::{PatientId, Priority};
use std::collections::BTreeMap;

/// Every patient created during a run, ordered by id
#[derive(Debug, Clone, Default)]
pub struct PatientRegistry {
    patients: BTreeMap<PatientId, Patient>,
}

impl PatientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a patient, replacing any record with the same id
    pub fn insert(&mut self, patient: Patient) {
        self.patients.insert(patient.id, patient);
    }

    /// Get a patient by ID
    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    /// Get a mutable patient by ID
    pub fn get_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.get_mut(&id)
    }

    /// Iterate over patients in id order
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// Number of patients
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Whether no patient was created
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Patient counts indexed by [`Priority::index`]
    pub fn count_by_priority(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for patient in self.iter() {
            counts[patient.priority.index()] += 1;
        }
        counts
    }

    /// Patients of one priority class
    pub fn with_priority(&self, priority: Priority) -> impl Iterator<Item = &Patient> {
        self.iter()
            .filter(move |patient| patient.priority == priority)
    }
}
