//! Enumeration types for the emergency care simulator
//!
//! This module contains the closed sets used throughout the simulation:
//! patient priority classes, worker kinds, care stages, distribution families,
//! queue disciplines and report formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency class of a patient, from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Level 1
    NonUrgent,
    /// Level 2
    LessUrgent,
    /// Level 3
    Urgent,
    /// Level 4
    VeryUrgent,
    /// Level 5, routed straight to a doctor after registration
    Emergency,
}

impl Priority {
    /// All priority classes in ascending urgency
    pub const ALL: [Priority; 5] = [
        Priority::NonUrgent,
        Priority::LessUrgent,
        Priority::Urgent,
        Priority::VeryUrgent,
        Priority::Emergency,
    ];

    /// Zero-based position in [`Priority::ALL`]
    pub fn index(self) -> usize {
        match self {
            Priority::NonUrgent => 0,
            Priority::LessUrgent => 1,
            Priority::Urgent => 2,
            Priority::VeryUrgent => 3,
            Priority::Emergency => 4,
        }
    }

    /// Ordinal level, 1 for NON_URGENT up to 5 for EMERGENCY
    pub fn level(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Priority for a zero-based index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::NonUrgent => write!(f, "NON_URGENT"),
            Priority::LessUrgent => write!(f, "LESS_URGENT"),
            Priority::Urgent => write!(f, "URGENT"),
            Priority::VeryUrgent => write!(f, "VERY_URGENT"),
            Priority::Emergency => write!(f, "EMERGENCY"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "non_urgent" | "nonurgent" | "1" => Ok(Priority::NonUrgent),
            "less_urgent" | "lessurgent" | "2" => Ok(Priority::LessUrgent),
            "urgent" | "3" => Ok(Priority::Urgent),
            "very_urgent" | "veryurgent" | "4" => Ok(Priority::VeryUrgent),
            "emergency" | "5" => Ok(Priority::Emergency),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Capability class of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkerKind {
    /// Handles registration
    Attendant,
    /// Handles screening and exams
    Nurse,
    /// Handles consultation
    Doctor,
}

impl WorkerKind {
    /// All worker kinds in report order
    pub const ALL: [WorkerKind; 3] = [WorkerKind::Attendant, WorkerKind::Nurse, WorkerKind::Doctor];
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerKind::Attendant => write!(f, "Attendant"),
            WorkerKind::Nurse => write!(f, "Nurse"),
            WorkerKind::Doctor => write!(f, "Doctor"),
        }
    }
}

impl FromStr for WorkerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attendant" => Ok(WorkerKind::Attendant),
            "nurse" => Ok(WorkerKind::Nurse),
            "doctor" => Ok(WorkerKind::Doctor),
            _ => Err(format!("Unknown worker kind: {}", s)),
        }
    }
}

/// Care stage that owns a waiting queue and a pool of workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Registration at the front desk
    Registration,
    /// Triage by a nurse
    Screening,
    /// Consultation with a doctor
    Consultation,
    /// Exams carried out by a nurse
    Exams,
}

impl Stage {
    /// All stages in patient-flow order
    pub const ALL: [Stage; 4] = [
        Stage::Registration,
        Stage::Screening,
        Stage::Consultation,
        Stage::Exams,
    ];

    /// Kind of worker that serves this stage
    pub fn worker_kind(self) -> WorkerKind {
        match self {
            Stage::Registration => WorkerKind::Attendant,
            Stage::Screening | Stage::Exams => WorkerKind::Nurse,
            Stage::Consultation => WorkerKind::Doctor,
        }
    }

    /// Name of the stage's waiting queue as used in reports
    pub fn queue_name(self) -> &'static str {
        match self {
            Stage::Registration => "register_queue",
            Stage::Screening => "screening_queue",
            Stage::Consultation => "consultation_queue",
            Stage::Exams => "exams_queue",
        }
    }

    /// Zero-based position in [`Stage::ALL`]
    pub fn index(self) -> usize {
        match self {
            Stage::Registration => 0,
            Stage::Screening => 1,
            Stage::Consultation => 2,
            Stage::Exams => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Registration => write!(f, "Registration"),
            Stage::Screening => write!(f, "Screening"),
            Stage::Consultation => write!(f, "Consultation"),
            Stage::Exams => write!(f, "Exams"),
        }
    }
}

/// Family of a parametric random distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionFamily {
    /// Beta(alpha, beta)
    #[serde(rename = "BET")]
    Beta,
    /// Exponential(rate)
    #[serde(rename = "EXP")]
    Exponential,
    /// Gamma(shape, scale)
    #[serde(rename = "GAM")]
    Gamma,
    /// LogNormal(mu, sigma)
    #[serde(rename = "LOG")]
    LogNormal,
    /// Normal(mean, std_dev)
    #[serde(rename = "NOR")]
    Normal,
    /// Pareto(shape) with unit scale
    #[serde(rename = "PAR")]
    Pareto,
    /// Triangular(low, high, mode)
    #[serde(rename = "TRI")]
    Triangular,
    /// Uniform(low, high)
    #[serde(rename = "UNI")]
    Uniform,
    /// Weibull(scale, shape)
    #[serde(rename = "WEI")]
    Weibull,
}

impl DistributionFamily {
    /// Three-letter tag used in configuration files
    pub fn tag(self) -> &'static str {
        match self {
            DistributionFamily::Beta => "BET",
            DistributionFamily::Exponential => "EXP",
            DistributionFamily::Gamma => "GAM",
            DistributionFamily::LogNormal => "LOG",
            DistributionFamily::Normal => "NOR",
            DistributionFamily::Pareto => "PAR",
            DistributionFamily::Triangular => "TRI",
            DistributionFamily::Uniform => "UNI",
            DistributionFamily::Weibull => "WEI",
        }
    }

    /// Number of parameters the family consumes
    pub fn parameter_count(self) -> usize {
        match self {
            DistributionFamily::Exponential | DistributionFamily::Pareto => 1,
            DistributionFamily::Triangular => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for DistributionFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bet" | "beta" => Ok(DistributionFamily::Beta),
            "exp" | "exponential" => Ok(DistributionFamily::Exponential),
            "gam" | "gamma" => Ok(DistributionFamily::Gamma),
            "log" | "lognormal" => Ok(DistributionFamily::LogNormal),
            "nor" | "normal" => Ok(DistributionFamily::Normal),
            "par" | "pareto" => Ok(DistributionFamily::Pareto),
            "tri" | "triangular" => Ok(DistributionFamily::Triangular),
            "uni" | "uniform" => Ok(DistributionFamily::Uniform),
            "wei" | "weibull" => Ok(DistributionFamily::Weibull),
            _ => Err(format!("Unknown distribution family: {}", s)),
        }
    }
}

/// Order in which patients of the same priority class leave a waiting queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QueueDiscipline {
    /// Oldest patient first
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    /// Most recently queued patient first
    #[serde(rename = "LIFO")]
    Lifo,
}

impl fmt::Display for QueueDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueDiscipline::Fifo => write!(f, "FIFO"),
            QueueDiscipline::Lifo => write!(f, "LIFO"),
        }
    }
}

impl FromStr for QueueDiscipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(QueueDiscipline::Fifo),
            "lifo" => Ok(QueueDiscipline::Lifo),
            _ => Err(format!("Unknown queue discipline: {}", s)),
        }
    }
}

/// Output format for the end-of-run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// One delimited line matching the CSV header
    #[default]
    Csv,
    /// JSON document
    Json,
    /// Indented human readable report
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
