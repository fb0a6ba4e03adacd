//! Simulation engine
//!
//! The [`Simulation`] owns every piece of run state: the clock, the future
//! event list, the event table and log, the four stage queues, the worker
//! pool, the patient registry, the random generator and the id generator.
//! Events are processed strictly in time order, ties in scheduling order,
//! until the next event would fire after the configured horizon.

use crate::events::{Event, EventKind};
use crate::patient::{Patient, PatientRegistry};
use crate::queue::{PatientWaitingQueue, PriorityEventQueue};
use crate::random::{RandomDistribution, StageDistributions};
use crate::simulation::{SimulationError, SimulationResult, SimulationStatistics};
use crate::staff::{Worker, WorkerPool};
use crate::types::{EventId, IdGenerator, PatientId, SimulationConfig, Stage, WorkerId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// A discrete-event simulation of one emergency-care facility
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    distributions: StageDistributions,
    rng: StdRng,
    ids: IdGenerator,
    time: f64,
    finished: bool,
    event_queue: PriorityEventQueue<EventId>,
    events: HashMap<EventId, Event>,
    event_log: Vec<EventId>,
    queues: [PatientWaitingQueue; 4],
    workers: WorkerPool,
    patients: PatientRegistry,
}

fn empty_queues(config: &SimulationConfig) -> [PatientWaitingQueue; 4] {
    std::array::from_fn(|_| {
        PatientWaitingQueue::new(config.queue_weights, config.queue_discipline)
    })
}

impl Simulation {
    /// Validate the configuration and prepare a run seeded with the first
    /// patient's arrival
    #[instrument(skip(config), fields(total_time = config.total_time, seed = ?config.seed))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let distributions = StageDistributions::from_config(&config)?;

        let rng = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };

        let mut simulation = Self {
            queues: empty_queues(&config),
            config,
            distributions,
            rng,
            ids: IdGenerator::new(),
            time: 0.0,
            finished: false,
            event_queue: PriorityEventQueue::new(),
            events: HashMap::new(),
            event_log: Vec::new(),
            workers: WorkerPool::new(),
            patients: PatientRegistry::new(),
        };
        simulation.reset_with_first_arrival()?;
        Ok(simulation)
    }

    /// Clear all run state and schedule the event built by `seed_event`.
    ///
    /// With a configured seed the random generator restarts too, so a reset
    /// simulation replays the same run.
    #[instrument(skip(self, seed_event))]
    pub fn reset<F>(&mut self, seed_event: F) -> SimulationResult<EventId>
    where
        F: FnOnce(&mut Self) -> SimulationResult<EventId>,
    {
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.ids = IdGenerator::new();
        self.time = 0.0;
        self.finished = false;
        self.queues = empty_queues(&self.config);
        self.patients = PatientRegistry::new();
        self.workers = WorkerPool::from_config(&self.config, &mut self.ids);
        self.event_queue = PriorityEventQueue::new();
        self.events.clear();
        self.event_log.clear();

        let first = seed_event(self)?;
        if !self.event_queue.contains(&first) {
            return Err(SimulationError::invariant_violation(format!(
                "seed event {} was not scheduled",
                first
            )));
        }

        info!(
            workers = self.workers.len(),
            horizon = self.config.total_time,
            "Simulation reset"
        );
        Ok(first)
    }

    /// Reset with the default seed event: a new patient's arrival
    pub fn reset_with_first_arrival(&mut self) -> SimulationResult<EventId> {
        self.reset(|simulation| {
            let patient = simulation.new_patient();
            simulation.schedule_arrival(patient)
        })
    }

    /// Process events until the horizon is passed or no event is left.
    ///
    /// Returns the number of events processed by this call.
    pub fn run(&mut self) -> SimulationResult<usize> {
        let span = crate::run_span!("simulation_run", horizon = self.config.total_time);
        let _enter = span.enter();

        let mut processed = 0;
        while self.step()?.is_some() {
            processed += 1;
        }

        crate::clock_event!(
            info,
            self.time,
            "Simulation finished",
            processed = processed,
            patients = self.patients.len(),
            pending = self.event_queue.len(),
        );
        Ok(processed)
    }

    /// Process the next event.
    ///
    /// Returns `None` once the run is over: the event queue drained, or the
    /// next event fires after the horizon (that event is dropped).
    pub fn step(&mut self) -> SimulationResult<Option<Event>> {
        if self.finished || self.event_queue.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        let (id, time) = self.event_queue.pop()?;
        if time > self.config.total_time {
            debug!(event = %id, time, "Next event is past the horizon, stopping");
            self.finished = true;
            return Ok(None);
        }

        let event = *self
            .events
            .get(&id)
            .ok_or_else(|| SimulationError::unknown_entity(format!("event {}", id)))?;

        let delta = time - self.time;
        self.time = time;
        self.update_stats(delta)?;

        event.process(self)?;
        self.event_log.push(id);
        debug!(event = %event.describe(&self.patients), "Processed event");

        Ok(Some(event))
    }

    fn update_stats(&mut self, delta: f64) -> SimulationResult<()> {
        for queue in self.queues.iter_mut() {
            queue.update_stats(delta, &mut self.patients)?;
        }
        self.workers.accrue_idle_time(delta);
        Ok(())
    }

    /// Create a patient from the configured priority and exams probabilities
    pub fn new_patient(&mut self) -> PatientId {
        let id = self.ids.patient();
        let patient = Patient::generate(id, &self.config, &mut self.rng);
        debug!(patient = %patient, "New patient");
        self.patients.insert(patient);
        id
    }

    /// Schedule a patient's arrival one inter-arrival time from now
    pub fn schedule_arrival(&mut self, patient: PatientId) -> SimulationResult<EventId> {
        let duration = self.draw(None);
        self.create_event(patient, EventKind::ArrivalEnd, duration)
    }

    /// Bind `patient` and `worker` to a new event ending `stage`
    pub fn start_stage(
        &mut self,
        stage: Stage,
        patient: PatientId,
        worker: WorkerId,
    ) -> SimulationResult<EventId> {
        let duration = self.draw(Some(stage));
        self.create_event(patient, EventKind::for_stage(stage, worker), duration)
    }

    /// Send a patient to `stage`: straight to an idle worker of the stage's
    /// kind, or into the stage's waiting queue
    pub fn admit_or_enqueue(&mut self, patient: PatientId, stage: Stage) -> SimulationResult<()> {
        match self.workers.get_idle_worker(stage.worker_kind()) {
            Some(worker) => {
                self.start_stage(stage, patient, worker)?;
                self.queues[stage.index()].skip();
            }
            None => {
                let record = self
                    .patients
                    .get_mut(patient)
                    .ok_or_else(|| {
                        SimulationError::unknown_entity(format!("patient {}", patient))
                    })?;
                self.queues[stage.index()].push(record, self.time);
            }
        }
        Ok(())
    }

    /// Hand a worker that just finished the next waiting patient of the first
    /// non-empty queue among `sources`, or leave it idle
    pub fn release_or_rebind(
        &mut self,
        worker: WorkerId,
        sources: &[Stage],
    ) -> SimulationResult<()> {
        for &stage in sources {
            let queue = &mut self.queues[stage.index()];
            if queue.is_empty() {
                continue;
            }
            let (patient, waited) = queue.pop(self.time, &mut self.rng)?;
            self.patient_mut(patient)?.record_wait(waited);
            self.start_stage(stage, patient, worker)?;
            return Ok(());
        }

        self.worker_mut(worker)?.set_current_event(None);
        Ok(())
    }

    /// End a patient's journey
    pub fn discharge(&mut self, patient: PatientId) -> SimulationResult<()> {
        self.patient_mut(patient)?.set_current_event(None);
        Ok(())
    }

    fn draw(&mut self, stage: Option<Stage>) -> f64 {
        let distribution: &RandomDistribution = match stage {
            Some(stage) => self.distributions.stage(stage),
            None => self.distributions.arrival(),
        };
        let sample = distribution.sample(&mut self.rng);
        if sample >= 0.0 {
            sample
        } else {
            warn!(?stage, sample, "Negative duration sampled, using zero");
            0.0
        }
    }

    fn create_event(
        &mut self,
        patient: PatientId,
        kind: EventKind,
        duration: f64,
    ) -> SimulationResult<EventId> {
        let id = self.ids.event();
        let event = Event::new(id, self.time, duration, patient, kind);

        self.patient_mut(patient)?.set_current_event(Some(id));
        if let Some(worker) = kind.worker() {
            self.worker_mut(worker)?.set_current_event(Some(id));
        }

        self.events.insert(id, event);
        self.event_queue.push(id, event.time);
        Ok(id)
    }

    fn patient_mut(&mut self, id: PatientId) -> SimulationResult<&mut Patient> {
        self.patients
            .get_mut(id)
            .ok_or_else(|| SimulationError::unknown_entity(format!("patient {id}")))
    }

    fn worker_mut(&mut self, id: WorkerId) -> SimulationResult<&mut Worker> {
        self.workers
            .get_mut(id)
            .ok_or_else(|| SimulationError::unknown_entity(format!("worker {}", id)))
    }

    /// Patient record by id
    pub fn patient(&self, id: PatientId) -> SimulationResult<&Patient> {
        self.patients
            .get(id)
            .ok_or_else(|| SimulationError::unknown_entity(format!("patient {id}")))
    }

    /// Worker record by id
    pub fn worker(&self, id: WorkerId) -> SimulationResult<&Worker> {
        self.workers
            .get(id)
            .ok_or_else(|| SimulationError::unknown_entity(format!("worker {}", id)))
    }

    /// Current simulated time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Configuration of this run
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Whether the run has stopped
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every patient created so far
    pub fn patients(&self) -> &PatientRegistry {
        &self.patients
    }

    /// All workers
    pub fn workers(&self) -> &WorkerPool {
        &self.workers
    }

    /// Waiting queue of a stage
    pub fn queue(&self, stage: Stage) -> &PatientWaitingQueue {
        &self.queues[stage.index()]
    }

    /// Stage queues in report order
    pub fn named_queues(&self) -> impl Iterator<Item = (Stage, &PatientWaitingQueue)> {
        Stage::ALL
            .into_iter()
            .map(move |stage| (stage, self.queue(stage)))
    }

    /// Any scheduled or processed event by id
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Number of events still scheduled
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    /// Processed events in processing order
    pub fn event_log(&self) -> impl Iterator<Item = &Event> {
        self.event_log
            .iter()
            .filter_map(move |id| self.events.get(id))
    }

    /// Number of processed events
    pub fn processed_count(&self) -> usize {
        self.event_log.len()
    }

    /// Write one line per processed event
    pub fn write_event_log<W: Write>(&self, mut writer: W) -> SimulationResult<()> {
        for event in self.event_log() {
            writeln!(writer, "{}", event.describe(&self.patients))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// End-of-run statistics for the current state
    pub fn statistics(&self) -> SimulationStatistics {
        SimulationStatistics::calculate(self)
    }
}
