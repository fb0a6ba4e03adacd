//! Priority-class waiting queue for one care stage
//!
//! Patients wait in one of five sub-queues according to their priority. A pop
//! first picks a non-empty class by roulette over the configured class
//! weights, then takes a patient from that class according to the queue
//! discipline. The queue keeps the counters needed for end-of-run statistics:
//! throughput (including patients that never had to wait), current and maximum
//! length, the time integral of the length, and waiting times.

use super::QueueError;
use crate::patient::{Patient, PatientRegistry};
use crate::random::roulette;
use crate::types::{PatientId, QueueDiscipline};
use rand::Rng;
use std::collections::{HashMap, VecDeque};

/// Waiting line split into five priority classes
#[derive(Debug, Clone)]
pub struct PatientWaitingQueue {
    weights: [f64; 5],
    discipline: QueueDiscipline,
    classes: [VecDeque<PatientId>; 5],
    entered: HashMap<PatientId, f64>,
    count: usize,
    len: usize,
    max_len: usize,
    len_time: f64,
    max_waiting_time: f64,
    total_waiting_time: f64,
}

impl PatientWaitingQueue {
    /// Create an empty queue with per-class selection weights
    pub fn new(weights: [f64; 5], discipline: QueueDiscipline) -> Self {
        Self {
            weights,
            discipline,
            classes: Default::default(),
            entered: HashMap::new(),
            count: 0,
            len: 0,
            max_len: 0,
            len_time: 0.0,
            max_waiting_time: 0.0,
            total_waiting_time: 0.0,
        }
    }

    /// Enqueue a patient at `time`; the patient no longer holds an event
    pub fn push(&mut self, patient: &mut Patient, time: f64) {
        patient.set_current_event(None);
        self.classes[patient.priority.index()].push_back(patient.id);
        self.count += 1;
        self.len += 1;
        self.max_len = self.max_len.max(self.len);
        self.entered.insert(patient.id, time);
    }

    /// Count a patient that went straight to service without waiting
    pub fn skip(&mut self) {
        self.count += 1;
    }

    /// Dequeue one patient at `time`.
    ///
    /// Returns the patient and how long it waited in this queue.
    pub fn pop<R: Rng + ?Sized>(
        &mut self,
        time: f64,
        rng: &mut R,
    ) -> Result<(PatientId, f64), QueueError> {
        let candidates: Vec<usize> =
            (0..self.classes.len()).filter(|&class| !self.classes[class].is_empty()).collect();
        let weights: Vec<f64> = candidates
            .iter()
            .map(|&class| self.weights[class])
            .collect();
        let class = roulette(&weights, rng)
            .map(|picked| candidates[picked])
            .ok_or(QueueError::Empty)?;

        let queue = &mut self.classes[class];
        let patient = match self.discipline {
            QueueDiscipline::Fifo => queue.pop_front(),
            QueueDiscipline::Lifo => queue.pop_back(),
        }
        .ok_or(QueueError::Empty)?;
        self.len -= 1;

        let entered = self
            .entered
            .remove(&patient)
            .ok_or_else(|| QueueError::UnknownItem(format!("patient {}", patient)))?;
        let waited = time - entered;
        if waited > self.max_waiting_time {
            self.max_waiting_time = waited;
        }
        self.total_waiting_time += waited;

        Ok((patient, waited))
    }

    /// Waiting patients, class by class in ascending priority, each class in
    /// queue order
    pub fn peek_all(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.classes.iter().flat_map(|class| class.iter().copied())
    }

    /// Account for `delta` time units elapsing with the current contents
    pub fn update_stats(
        &mut self,
        delta: f64,
        patients: &mut PatientRegistry,
    ) -> Result<(), QueueError> {
        self.len_time += self.len as f64 * delta;
        for id in self.classes.iter().flat_map(|class| class.iter()) {
            let patient = patients
                .get_mut(*id)
                .ok_or_else(|| QueueError::UnknownItem(format!("patient {}", id)))?;
            patient.total_waiting_time += delta;
        }
        Ok(())
    }

    /// Whether a patient is waiting here
    pub fn contains(&self, patient: PatientId) -> bool {
        self.entered.contains_key(&patient)
    }

    /// Time a waiting patient entered the queue
    pub fn entry_time(&self, patient: PatientId) -> Option<f64> {
        self.entered.get(&patient).copied()
    }

    /// Patients currently waiting
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nobody is waiting
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest number of patients waiting at once
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Patients that passed through this stage, waiting or not
    pub fn total_patient_count(&self) -> usize {
        self.count
    }

    /// Longest single wait
    pub fn max_waiting_time(&self) -> f64 {
        self.max_waiting_time
    }

    /// Sum of finished waits
    pub fn total_waiting_time(&self) -> f64 {
        self.total_waiting_time
    }

    /// Finished waiting time per patient passing through; NaN when nobody did
    pub fn mean_waiting_time(&self) -> f64 {
        self.total_waiting_time / self.count as f64
    }

    /// Time-averaged length over `total_time`; NaN when `total_time` is zero
    pub fn mean_len(&self, total_time: f64) -> f64 {
        self.len_time / total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn patient(id: u64, priority: Priority) -> Patient {
        Patient::new(PatientId(id), priority, false)
    }

    #[test]
    fn test_push_pop_updates_counters() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = PatientWaitingQueue::new([0.2; 5], QueueDiscipline::Fifo);
        let mut a = patient(1, Priority::Urgent);
        let mut b = patient(2, Priority::Urgent);

        queue.push(&mut a, 1.0);
        queue.push(&mut b, 3.0);
        queue.skip();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.max_len(), 2);
        assert_eq!(queue.total_patient_count(), 3);
        assert!(queue.contains(PatientId(1)));

        assert_eq!(queue.pop(5.0, &mut rng).unwrap(), (PatientId(1), 4.0));
        assert_eq!(queue.pop(6.0, &mut rng).unwrap(), (PatientId(2), 3.0));
        assert!(queue.is_empty());
        assert_eq!(queue.max_len(), 2);
        assert_eq!(queue.max_waiting_time(), 4.0);
        assert_eq!(queue.total_waiting_time(), 7.0);
        assert!((queue.mean_waiting_time() - 7.0 / 3.0).abs() < 1e-12);
        assert!(!queue.contains(PatientId(1)));
        assert_eq!(queue.pop(7.0, &mut rng), Err(QueueError::Empty));
    }

    #[test]
    fn test_lifo_discipline() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = PatientWaitingQueue::new([0.2; 5], QueueDiscipline::Lifo);
        queue.push(&mut patient(1, Priority::Urgent), 0.0);
        queue.push(&mut patient(2, Priority::Urgent), 0.0);
        assert_eq!(queue.pop(1.0, &mut rng).unwrap().0, PatientId(2));
        assert_eq!(queue.pop(1.0, &mut rng).unwrap().0, PatientId(1));
    }

    #[test]
    fn test_zero_weight_classes_wait_while_others_are_served() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut queue = PatientWaitingQueue::new([0.0, 0.0, 0.0, 0.0, 1.0], QueueDiscipline::Fifo);
        for id in 0..10 {
            queue.push(&mut patient(id, Priority::NonUrgent), 0.0);
            queue.push(&mut patient(100 + id, Priority::Emergency), 0.0);
        }

        for _ in 0..10 {
            let (id, _) = queue.pop(1.0, &mut rng).unwrap();
            assert!(
                id.0 >= 100,
                "emergency class must be chosen while non-empty"
            );
        }
        // only zero-weight classes left: still served
        let (id, _) = queue.pop(1.0, &mut rng).unwrap();
        assert_eq!(id, PatientId(0));
    }

    #[test]
    fn test_update_stats_accumulates_waiting() {
        let mut registry = PatientRegistry::new();
        let mut queue = PatientWaitingQueue::new([0.2; 5], QueueDiscipline::Fifo);
        let mut a = patient(1, Priority::LessUrgent);
        let mut b = patient(2, Priority::Emergency);
        queue.push(&mut a, 0.0);
        queue.push(&mut b, 0.0);
        registry.insert(a);
        registry.insert(b);
        registry.insert(patient(3, Priority::Urgent));

        queue.update_stats(2.0, &mut registry).unwrap();
        queue.update_stats(0.5, &mut registry).unwrap();

        assert_eq!(registry.get(PatientId(1)).unwrap().total_waiting_time, 2.5);
        assert_eq!(registry.get(PatientId(2)).unwrap().total_waiting_time, 2.5);
        assert_eq!(registry.get(PatientId(3)).unwrap().total_waiting_time, 0.0);
        assert_eq!(queue.mean_len(5.0), 1.0);
        assert_eq!(
            queue.peek_all().collect::<Vec<_>>(),
            vec![PatientId(1), PatientId(2)]
        );
    }

    #[test]
    fn test_degenerate_means_are_nan() {
        let queue = PatientWaitingQueue::new([0.2; 5], QueueDiscipline::Fifo);
        assert!(queue.mean_waiting_time().is_nan());
        assert!(queue.mean_len(0.0).is_nan());
    }
}
