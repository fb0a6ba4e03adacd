//! Statistics collection and reporting
//!
//! A [`SimulationStatistics`] snapshot is computed once from the final engine
//! state and rendered as a single delimited line (with a matching header), as
//! an indented text report, or as JSON.
//!
//! Means whose denominator is zero (no patient of a priority, no worker of a
//! kind, no elapsed time, nobody through a queue) are reported as NaN.

use crate::simulation::{Simulation, SimulationResult};
use crate::types::{OutputFormat, Priority, Stage, WorkerKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column separator used when none is given
pub const DEFAULT_CSV_SEPARATOR: &str = "\t";

/// End-of-run statistics.
///
/// Per-priority arrays are indexed by [`Priority::index`] (NON_URGENT first),
/// per-queue arrays by [`Stage::index`] (register queue first) and per-kind
/// arrays in [`WorkerKind::ALL`] order (attendants first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Simulated time when the run stopped
    pub total_simulation_time: f64,
    /// Number of patients created
    pub total_patients: usize,
    /// Patients created per priority
    pub patients_by_priority: [usize; 5],
    /// Number of workers
    pub total_workers: usize,
    /// Workers per kind
    pub workers_by_type: [usize; 3],

    /// Longest single wait in any queue
    pub max_waiting_time: f64,
    /// Longest single wait per priority
    pub max_waiting_time_by_priority: [f64; 5],
    /// Longest single wait per queue
    pub max_waiting_time_by_queue: [f64; 4],

    /// Waiting time per patient, all queues together
    pub mean_waiting_time: f64,
    /// Waiting time per patient of each priority
    pub mean_waiting_time_by_priority: [f64; 5],
    /// Finished waiting time per patient passing each queue
    pub mean_waiting_time_by_queue: [f64; 4],

    /// Idle time per worker
    pub mean_idle_time: f64,
    /// Idle time per worker of each kind
    pub mean_idle_time_by_type: [f64; 3],

    /// Largest length reached by any queue
    pub max_queue_len: usize,
    /// Largest length reached by each queue
    pub max_queue_len_by_queue: [usize; 4],

    /// Average over the queues of their time-averaged length
    pub mean_queue_len: f64,
    /// Time-averaged length of each queue
    pub mean_queue_len_by_queue: [f64; 4],
}

fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}

impl SimulationStatistics {
    /// Compute the snapshot for the current state of a simulation
    pub fn calculate(simulation: &Simulation) -> Self {
        let time = simulation.time();
        let patients = simulation.patients();
        let workers = simulation.workers();

        let patients_by_priority = patients.count_by_priority();
        let mut waiting_by_priority = [0.0; 5];
        let mut max_waiting_time_by_priority = [0.0_f64; 5];
        for patient in patients.iter() {
            let index = patient.priority.index();
            waiting_by_priority[index] += patient.total_waiting_time;
            max_waiting_time_by_priority[index] =
                max_waiting_time_by_priority[index].max(patient.max_waiting_time);
        }
        let total_waiting: f64 = waiting_by_priority.iter().sum();
        let mean_waiting_time_by_priority: [f64; 5] = std::array::from_fn(|index| {
            waiting_by_priority[index] / patients_by_priority[index] as f64
        });

        let mut workers_by_type = [0; 3];
        let mut idle_by_type = [0.0; 3];
        for (index, kind) in WorkerKind::ALL.iter().enumerate() {
            for worker in workers.of_kind(*kind) {
                workers_by_type[index] += 1;
                idle_by_type[index] += worker.total_idle_time;
            }
        }
        let total_idle: f64 = idle_by_type.iter().sum();
        let mean_idle_time_by_type: [f64; 3] =
            std::array::from_fn(|index| idle_by_type[index] / workers_by_type[index] as f64);

        let queue = |stage: Stage| simulation.queue(stage);
        let max_queue_len_by_queue: [usize; 4] = Stage::ALL.map(|stage| queue(stage).max_len());
        let mean_queue_len_by_queue: [f64; 4] = Stage::ALL.map(|stage| queue(stage).mean_len(time));
        let max_waiting_time_by_queue: [f64; 4] =
            Stage::ALL.map(|stage| queue(stage).max_waiting_time());
        let mean_waiting_time_by_queue: [f64; 4] =
            Stage::ALL.map(|stage| queue(stage).mean_waiting_time());

        Self {
            total_simulation_time: time,
            total_patients: patients.len(),
            patients_by_priority,
            total_workers: workers.len(),
            workers_by_type,
            max_waiting_time: max_of(max_waiting_time_by_queue),
            max_waiting_time_by_priority,
            max_waiting_time_by_queue,
            mean_waiting_time: total_waiting / patients.len() as f64,
            mean_waiting_time_by_priority,
            mean_waiting_time_by_queue,
            mean_idle_time: total_idle / workers.len() as f64,
            mean_idle_time_by_type,
            max_queue_len: max_queue_len_by_queue.iter().copied().max().unwrap_or(0),
            max_queue_len_by_queue,
            mean_queue_len: mean_queue_len_by_queue.iter().sum::<f64>()
                / mean_queue_len_by_queue.len() as f64,
            mean_queue_len_by_queue,
        }
    }

    fn columns(&self) -> Vec<(String, String)> {
        let mut row = Row::default();
        row.scalar("mean_idle_time", float(self.mean_idle_time));
        row.by_type("mean_idle_time", self.mean_idle_time_by_type.map(float));
        row.scalar("mean_waiting_time", float(self.mean_waiting_time));
        row.by_priority(
            "mean_waiting_time",
            self.mean_waiting_time_by_priority.map(float),
        );
        row.by_queue(
            "mean_waiting_time",
            self.mean_waiting_time_by_queue.map(float),
        );
        row.scalar("mean_queue_len", float(self.mean_queue_len));
        row.by_queue("mean_queue_len", self.mean_queue_len_by_queue.map(float));
        row.scalar("max_waiting_time", float(self.max_waiting_time));
        row.by_priority(
            "max_waiting_time",
            self.max_waiting_time_by_priority.map(float),
        );
        row.by_queue(
            "max_waiting_time",
            self.max_waiting_time_by_queue.map(float),
        );
        row.scalar("max_queue_len", self.max_queue_len.to_string());
        row.by_queue(
            "max_queue_len",
            self.max_queue_len_by_queue.map(|v| v.to_string()),
        );
        row.0
    }

    /// Header line matching [`SimulationStatistics::to_csv`]
    pub fn csv_header(separator: &str) -> String {
        Self::default()
            .columns()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// One delimited line; integers plain, floats with two decimals
    pub fn to_csv(&self, separator: &str) -> String {
        self.columns()
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat, separator: &str) -> SimulationResult<String> {
        match format {
            OutputFormat::Csv => Ok(self.to_csv(separator)),
            OutputFormat::Json => self.to_json(),
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

fn float(value: f64) -> String {
    format!("{:.2}", value)
}

#[derive(Default)]
struct Row(Vec<(String, String)>);

impl Row {
    fn scalar(&mut self, name: &str, value: String) {
        self.0.push((name.to_string(), value));
    }

    fn group<const N: usize>(&mut self, name: &str, suffixes: [String; N], values: [String; N]) {
        for (suffix, value) in suffixes.into_iter().zip(values) {
            self.0.push((format!("{}-{}", name, suffix), value));
        }
    }

    fn by_priority(&mut self, name: &str, values: [String; 5]) {
        self.group(name, Priority::ALL.map(|p| p.level().to_string()), values);
    }

    fn by_queue(&mut self, name: &str, values: [String; 4]) {
        self.group(name, Stage::ALL.map(|s| s.queue_name().to_string()), values);
    }

    fn by_type(&mut self, name: &str, values: [String; 3]) {
        self.group(name, WorkerKind::ALL.map(|k| k.to_string()), values);
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn section<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            title: &str,
            entries: impl IntoIterator<Item = (String, T)>,
        ) -> fmt::Result {
            writeln!(f, "{}:", title)?;
            for (label, value) in entries {
                writeln!(f, "    {}: {}", label, value)?;
            }
            Ok(())
        }
        let priorities = || Priority::ALL.iter().map(|p| p.to_string());
        let queues = || Stage::ALL.iter().map(|s| s.queue_name().to_string());
        let kinds = || WorkerKind::ALL.iter().map(|k| k.to_string());
        let two = |v: &f64| float(*v);

        writeln!(f, "Simulation Statistics")?;
        writeln!(f, "=====================")?;
        writeln!(
            f,
            "total_simulation_time: {:.2}",
            self.total_simulation_time
        )?;
        writeln!(f, "total_patients: {}", self.total_patients)?;
        section(
            f,
            "patients_by_priority",
            priorities().zip(self.patients_by_priority),
        )?;
        writeln!(f, "total_workers: {}", self.total_workers)?;
        section(f, "workers_by_type", kinds().zip(self.workers_by_type))?;

        writeln!(f, "max_waiting_time: {:.2}", self.max_waiting_time)?;
        section(
            f,
            "max_waiting_time_by_priority",
            priorities().zip(self.max_waiting_time_by_priority.iter().map(two)),
        )?;
        section(
            f,
            "max_waiting_time_by_queue",
            queues().zip(self.max_waiting_time_by_queue.iter().map(two)),
        )?;

        writeln!(f, "mean_waiting_time: {:.2}", self.mean_waiting_time)?;
        section(
            f,
            "mean_waiting_time_by_priority",
            priorities().zip(self.mean_waiting_time_by_priority.iter().map(two)),
        )?;
        section(
            f,
            "mean_waiting_time_by_queue",
            queues().zip(self.mean_waiting_time_by_queue.iter().map(two)),
        )?;

        writeln!(f, "mean_idle_time: {:.2}", self.mean_idle_time)?;
        section(
            f,
            "mean_idle_time_by_type",
            kinds().zip(self.mean_idle_time_by_type.iter().map(two)),
        )?;

        writeln!(f, "max_queue_len: {}", self.max_queue_len)?;
        section(
            f,
            "max_queue_len_by_queue",
            queues().zip(self.max_queue_len_by_queue),
        )?;
        writeln!(f, "mean_queue_len: {:.2}", self.mean_queue_len)?;
        section(
            f,
            "mean_queue_len_by_queue",
            queues().zip(self.mean_queue_len_by_queue.iter().map(two)),
        )
    }
}
