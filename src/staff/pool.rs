//! Worker pool and idle-worker lookup
//!
//! Workers are kept in creation order with an id index next to them, so
//! "first idle worker of a kind" is deterministic for a given configuration.

use super::Worker;
use crate::types::{IdGenerator, SimulationConfig, WorkerId, WorkerKind};
use std::collections::HashMap;

/// All workers of one simulation run
#[derive(Debug, Clone, Default)]
pub struct WorkerPool {
    workers: Vec<Worker>,
    /// Quick lookup map from worker ID to index
    index: HashMap<WorkerId, usize>,
}

impl WorkerPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the configured number of attendants, nurses and doctors, in
    /// that order
    pub fn from_config(config: &SimulationConfig, ids: &mut IdGenerator) -> Self {
        let mut pool = Self::new();
        for kind in WorkerKind::ALL {
            for _ in 0..config.worker_count(kind) {
                pool.add(Worker::new(ids.worker(), kind));
            }
        }
        pool
    }

    /// Add a worker to the pool
    pub fn add(&mut self, worker: Worker) {
        self.index.insert(worker.id, self.workers.len());
        self.workers.push(worker);
    }

    /// Get a worker by ID
    pub fn get(&self, id: WorkerId) -> Option<&Worker> {
        self.index.get(&id).and_then(|&idx| self.workers.get(idx))
    }

    /// Get a mutable worker by ID
    pub fn get_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        match self.index.get(&id) {
            Some(&idx) => self.workers.get_mut(idx),
            None => None,
        }
    }

    /// First idle worker of a kind in creation order
    pub fn get_idle_worker(&self, kind: WorkerKind) -> Option<WorkerId> {
        self.get_idle_workers(kind).next().map(|worker| worker.id)
    }

    /// All idle workers of a kind
    pub fn get_idle_workers(&self, kind: WorkerKind) -> impl Iterator<Item = &Worker> {
        self.idle_workers()
            .filter(move |worker| worker.kind == kind)
    }

    /// All idle workers
    pub fn idle_workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|worker| worker.is_idle())
    }

    /// Add `delta` to the idle time of every idle worker
    pub fn accrue_idle_time(&mut self, delta: f64) {
        for worker in self.workers.iter_mut().filter(|worker| worker.is_idle()) {
            worker.total_idle_time += delta;
        }
    }

    /// All workers in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Workers of one kind
    pub fn of_kind(&self, kind: WorkerKind) -> impl Iterator<Item = &Worker> {
        self.workers
            .iter()
            .filter(move |worker| worker.kind == kind)
    }

    /// Number of workers
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the pool has no workers
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventId;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            attendants: 1,
            nurses: 2,
            doctors: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_creates_workers_in_order() {
        let mut ids = IdGenerator::new();
        let pool = WorkerPool::from_config(&small_config(), &mut ids);

        let kinds: Vec<_> = pool.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![WorkerKind::Attendant, WorkerKind::Nurse, WorkerKind::Nurse]
        );
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.of_kind(WorkerKind::Doctor).count(), 0);
        assert_eq!(pool.get_idle_worker(WorkerKind::Doctor), None);
    }

    #[test]
    fn test_idle_lookup_and_accrual() {
        let mut ids = IdGenerator::new();
        let mut pool = WorkerPool::from_config(&small_config(), &mut ids);

        let first_nurse = pool.get_idle_worker(WorkerKind::Nurse).unwrap();
        pool.get_mut(first_nurse)
            .unwrap()
            .set_current_event(Some(EventId(99)));

        let second_nurse = pool.get_idle_worker(WorkerKind::Nurse).unwrap();
        assert_ne!(first_nurse, second_nurse);
        assert_eq!(pool.get_idle_workers(WorkerKind::Nurse).count(), 1);
        assert_eq!(pool.idle_workers().count(), 2);

        pool.accrue_idle_time(3.0);
        assert_eq!(pool.get(first_nurse).unwrap().total_idle_time, 0.0);
        assert_eq!(pool.get(second_nurse).unwrap().total_idle_time, 3.0);

        let busy = pool.get_mut(first_nurse).unwrap();
        busy.set_current_event(None);
        assert!(busy.is_idle());
        assert_eq!(busy.last_event(), Some(EventId(99)));
    }
}
