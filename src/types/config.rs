//! Configuration structures for the emergency care simulator
//!
//! This module contains the simulation configuration, the line-oriented
//! configuration file reader, CLI arguments and validation logic.
//!
//! The configuration file format is line based: `#` starts a comment, the
//! first two tokens of a line form the key (lower-cased, joined by `_`) and the
//! remaining tokens are the value list. Lines with fewer than three tokens are
//! ignored.
//!
//! ```text
//! T TTS 1440          # simulated minutes
//! P PRO 0.3           # probability of needing exams
//! P PRI 10 20 35 25 10
//! T CHE EXP 0.2       # inter-arrival time
//! ```

use super::{DistributionFamily, OutputFormat, QueueDiscipline, Stage, WorkerKind};
use crate::random::DistributionError;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Configuration file read when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.txt";

/// Configuration file keys
pub mod keys {
    /// Total simulated time
    pub const TOTAL_TIME: &str = "t_tts";
    /// Probability that a patient needs exams
    pub const EXAMS_PROBABILITY: &str = "p_pro";
    /// Priority class probabilities
    pub const PRIORITY_PROBABILITIES: &str = "p_pri";
    /// Queue class selection weights
    pub const QUEUE_WEIGHTS: &str = "p_que";
    /// Number of doctors
    pub const DOCTORS: &str = "q_med";
    /// Number of nurses
    pub const NURSES: &str = "q_enf";
    /// Number of attendants
    pub const ATTENDANTS: &str = "q_atd";
    /// Inter-arrival time distribution
    pub const ARRIVAL: &str = "t_che";
    /// Registration time distribution
    pub const REGISTRATION: &str = "t_cad";
    /// Screening time distribution
    pub const SCREENING: &str = "t_tri";
    /// Consultation time distribution
    pub const CONSULTATION: &str = "t_ate";
    /// Exams time distribution
    pub const EXAMS: &str = "t_exa";
    /// Queue discipline within a priority class (optional)
    pub const QUEUE_DISCIPLINE: &str = "d_que";
    /// Random seed (optional)
    pub const SEED: &str = "r_seed";
}

/// A distribution family with its parameters, as written in the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    /// Distribution family
    pub family: DistributionFamily,
    /// Parameters, exactly as many as the family consumes
    pub params: Vec<f64>,
}

impl DistributionSpec {
    /// Build a spec, keeping only the parameters the family consumes
    pub fn new(family: DistributionFamily, params: &[f64]) -> Result<Self, DistributionError> {
        let expected = family.parameter_count();
        if params.len() < expected {
            return Err(DistributionError::MissingParameters {
                family,
                expected,
                got: params.len(),
            });
        }
        Ok(Self {
            family,
            params: params[..expected].to_vec(),
        })
    }

    /// Whether samples can exceed zero with non-negligible probability.
    ///
    /// Negative samples are clamped to zero, so an inter-arrival distribution
    /// failing this check would never advance the clock.
    pub fn can_be_positive(&self) -> bool {
        match (self.family, self.params.as_slice()) {
            (DistributionFamily::Uniform, [low, high, ..]) => low.max(*high) > 0.0,
            (DistributionFamily::Triangular, [_, high, ..]) => *high > 0.0,
            // beyond six standard deviations the tail is never drawn in practice
            (DistributionFamily::Normal, [mean, std_dev, ..]) => mean + 6.0 * std_dev > 0.0,
            (DistributionFamily::Uniform, _)
            | (DistributionFamily::Triangular, _)
            | (DistributionFamily::Normal, _) => false,
            _ => true,
        }
    }

    fn from_tokens(key: &str, tokens: &[String]) -> Result<Self, ConfigError> {
        let (tag, rest) = tokens
            .split_first()
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        let family = tag
            .parse::<DistributionFamily>()
            .map_err(|_| DistributionError::UnknownFamily(tag.clone()))?;
        let params = rest
            .iter()
            .take(3)
            .map(|token| parse_number::<f64>(key, token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(family, &params)?)
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "emergency-care-simulator",
    version = "0.1.0",
    about = "Emergency Care Simulator - Discrete-event simulation of patient flow",
    long_about = "Simulates patients arriving at an emergency-care facility and moving through registration, screening, consultation and exams, each served by a limited pool of attendants, nurses and doctors. Prints one line of statistics at the end of the run.

EXAMPLES:
    # Run with config.txt from the current directory
    emergency-care-simulator

    # Use another configuration file and a fixed seed
    emergency-care-simulator scenarios/busy-night.txt --seed 42

    # Print the CSV header only
    emergency-care-simulator --header

    # Generate a configuration template
    emergency-care-simulator --print-config > config.txt

    # Validate configuration without running
    emergency-care-simulator my-config.txt --dry-run

CONFIGURATION:
    Line-oriented text (two-token key, value list, # comments) or JSON (.json)."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(
        default_value = DEFAULT_CONFIG_PATH,
        help = "Configuration file path",
        long_help = "Path to a configuration file, line-oriented text or JSON (.json extension)."
    )]
    pub config: String,

    /// Print only the CSV header and exit
    #[arg(long, help = "Print only the CSV header")]
    pub header: bool,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Override the simulated time horizon
    #[arg(long, help = "Override the total simulated time")]
    pub horizon: Option<f64>,

    /// Column separator for CSV output
    #[arg(long, help = "Column separator for CSV output (default: tab)")]
    pub separator: Option<String>,

    /// Report format
    #[arg(
        long,
        default_value = "csv",
        help = "Output format (csv, json or text)",
        long_help = "Output format for the end-of-run statistics. Supported formats: csv, json, text. Default: csv"
    )]
    pub format: OutputFormat,

    /// Write the processed event log to this file
    #[arg(long, help = "Write one line per processed event to this file")]
    pub event_log: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Log records on stderr as JSON
    #[arg(long, help = "Write log records to stderr as JSON")]
    pub log_json: bool,

    /// Directory for daily rolling log files
    #[arg(long, value_name = "DIR", help = "Also write JSON log files into this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print a default configuration file and exit")]
    pub print_config: bool,
}

/// Configuration for the emergency care simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated time horizon; events scheduled later are never processed
    pub total_time: f64,

    /// Probability that a patient needs exams after consultation (0.0-1.0)
    pub exams_probability: f64,

    /// Probability of each priority class, NON_URGENT first (sums to 1.0)
    pub priority_probabilities: [f64; 5],

    /// Selection weight of each priority class when popping a queue (sums to 1.0)
    pub queue_weights: [f64; 5],

    /// Number of doctors
    pub doctors: usize,

    /// Number of nurses
    pub nurses: usize,

    /// Number of attendants
    pub attendants: usize,

    /// Inter-arrival time distribution
    pub arrival: DistributionSpec,

    /// Registration time distribution
    pub registration: DistributionSpec,

    /// Screening time distribution
    pub screening: DistributionSpec,

    /// Consultation time distribution
    pub consultation: DistributionSpec,

    /// Exams time distribution
    pub exams: DistributionSpec,

    /// Order of patients within a priority class
    #[serde(default)]
    pub queue_discipline: QueueDiscipline,

    /// Random seed for reproducible results
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A required key is absent
    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    /// A value could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Key whose value is malformed
        key: String,
        /// The offending token(s)
        value: String,
    },

    /// A probability or weight vector sums to zero or less
    #[error("Weights for {0} must have a positive sum")]
    DegenerateWeights(String),

    /// Distribution tag or parameters rejected
    #[error("Invalid distribution: {0}")]
    Distribution(#[from] DistributionError),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Horizon is negative or not finite
    #[error("Total simulated time must be a finite non-negative number, got {0}")]
    InvalidTotalTime(f64),

    /// Percentage value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid value
        field: String,
        /// The invalid value
        value: f64,
    },

    /// A weight vector has negative entries or sums to zero
    #[error("Invalid weights for {field}: {values:?}")]
    InvalidWeights {
        /// Name of the weight vector
        field: String,
        /// The offending weights
        values: [f64; 5],
    },

    /// A distribution cannot be built from its parameters
    #[error("Invalid {stage} distribution: {source}")]
    InvalidDistribution {
        /// Which distribution failed
        stage: String,
        /// Underlying error
        source: DistributionError,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_time: 1440.0,
            exams_probability: 0.3,
            priority_probabilities: [0.1, 0.2, 0.35, 0.25, 0.1],
            queue_weights: [1.0 / 15.0, 2.0 / 15.0, 3.0 / 15.0, 4.0 / 15.0, 5.0 / 15.0],
            doctors: 3,
            nurses: 4,
            attendants: 2,
            arrival: DistributionSpec {
                family: DistributionFamily::Exponential,
                params: vec![0.2],
            },
            registration: DistributionSpec {
                family: DistributionFamily::Triangular,
                params: vec![2.0, 8.0, 4.0],
            },
            screening: DistributionSpec {
                family: DistributionFamily::Uniform,
                params: vec![5.0, 15.0],
            },
            consultation: DistributionSpec {
                family: DistributionFamily::Gamma,
                params: vec![4.0, 5.0],
            },
            exams: DistributionSpec {
                family: DistributionFamily::Weibull,
                params: vec![30.0, 1.5],
            },
            queue_discipline: QueueDiscipline::Fifo,
            seed: None,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, token: &str) -> Result<T, ConfigError> {
    token.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: token.to_string(),
    })
}

fn normalized(key: &str, values: &[f64]) -> Result<[f64; 5], ConfigError> {
    if values.len() != 5 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: format!("expected 5 values, got {}", values.len()),
        });
    }
    let sum: f64 = values.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return Err(ConfigError::DegenerateWeights(key.to_string()));
    }
    let mut result = [0.0; 5];
    // already normalized vectors are kept bit for bit
    if (sum - 1.0).abs() <= 1e-12 {
        result.copy_from_slice(values);
        return Ok(result);
    }
    for (slot, value) in result.iter_mut().zip(values) {
        *slot = value / sum;
    }
    Ok(result)
}

/// Key/value-list entries of a configuration file, before typing
struct RawConfig {
    data: HashMap<String, Vec<String>>,
}

impl RawConfig {
    fn parse(content: &str) -> Self {
        let mut data = HashMap::new();
        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() >= 3 {
                let key = format!("{}_{}", tokens[0].to_lowercase(), tokens[1].to_lowercase());
                data.insert(key, tokens[2..].iter().map(|s| s.to_string()).collect());
            }
        }
        Self { data }
    }

    fn values(&self, key: &str) -> Result<&[String], ConfigError> {
        self.data
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    fn optional(&self, key: &str) -> Option<&str> {
        self.data
            .get(key)
            .and_then(|tokens| tokens.first())
            .map(String::as_str)
    }

    fn number<T: std::str::FromStr>(&self, key: &str) -> Result<T, ConfigError> {
        parse_number(key, &self.values(key)?[0])
    }

    fn weights(&self, key: &str) -> Result<[f64; 5], ConfigError> {
        let values = self
            .values(key)?
            .iter()
            .map(|token| parse_number::<f64>(key, token))
            .collect::<Result<Vec<_>, _>>()?;
        normalized(key, &values)
    }

    fn distribution(&self, key: &str) -> Result<DistributionSpec, ConfigError> {
        DistributionSpec::from_tokens(key, self.values(key)?)
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&args.config)?;

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a file (line-oriented text, or JSON by extension)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let mut config: Self = serde_json::from_str(&content)?;
                config.priority_probabilities =
                    normalized(keys::PRIORITY_PROBABILITIES, &config.priority_probabilities)?;
                config.queue_weights = normalized(keys::QUEUE_WEIGHTS, &config.queue_weights)?;
                Ok(config)
            }
            _ => Self::parse_text(&content),
        }
    }

    /// Parse the line-oriented configuration format
    pub fn parse_text(content: &str) -> Result<Self, ConfigError> {
        let raw = RawConfig::parse(content);

        let queue_discipline = match raw.optional(keys::QUEUE_DISCIPLINE) {
            Some(token) => token.parse::<QueueDiscipline>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: keys::QUEUE_DISCIPLINE.to_string(),
                    value: token.to_string(),
                }
            })?,
            None => QueueDiscipline::default(),
        };
        let seed = match raw.optional(keys::SEED) {
            Some(token) => Some(parse_number::<u64>(keys::SEED, token)?),
            None => None,
        };

        Ok(Self {
            total_time: raw.number(keys::TOTAL_TIME)?,
            exams_probability: raw.number(keys::EXAMS_PROBABILITY)?,
            priority_probabilities: raw.weights(keys::PRIORITY_PROBABILITIES)?,
            queue_weights: raw.weights(keys::QUEUE_WEIGHTS)?,
            doctors: raw.number(keys::DOCTORS)?,
            nurses: raw.number(keys::NURSES)?,
            attendants: raw.number(keys::ATTENDANTS)?,
            arrival: raw.distribution(keys::ARRIVAL)?,
            registration: raw.distribution(keys::REGISTRATION)?,
            screening: raw.distribution(keys::SCREENING)?,
            consultation: raw.distribution(keys::CONSULTATION)?,
            exams: raw.distribution(keys::EXAMS)?,
            queue_discipline,
            seed,
        })
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: &CliArgs) {
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.horizon {
            config.total_time = value;
        }
    }

    /// Render the configuration in the line-oriented file format
    pub fn to_config_text(&self) -> String {
        fn join(values: &[f64]) -> String {
            values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
        }

        let mut lines = vec![
            "# Emergency care simulation parameters".to_string(),
            format!(
                "T TTS {}    # total simulated time (minutes)",
                self.total_time
            ),
            format!(
                "P PRO {}    # probability of needing exams",
                self.exams_probability
            ),
            format!(
                "P PRI {}    # priority probabilities, NON_URGENT..EMERGENCY",
                join(&self.priority_probabilities)
            ),
            format!(
                "P QUE {}    # queue selection weights",
                join(&self.queue_weights)
            ),
            format!("Q MED {}    # doctors", self.doctors),
            format!("Q ENF {}    # nurses", self.nurses),
            format!("Q ATD {}    # attendants", self.attendants),
            format!("T CHE {}    # inter-arrival time", self.arrival),
            format!("T CAD {}    # registration time", self.registration),
            format!("T TRI {}    # screening time", self.screening),
            format!("T ATE {}    # consultation time", self.consultation),
            format!("T EXA {}    # exams time", self.exams),
            format!(
                "D QUE {}    # order within a priority class",
                self.queue_discipline
            ),
        ];
        if let Some(seed) = self.seed {
            lines.push(format!("R SEED {}", seed));
        }
        lines.join("\n") + "\n"
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.total_time.is_finite() || self.total_time < 0.0 {
            return Err(ConfigValidationError::InvalidTotalTime(self.total_time));
        }

        self.validate_probability("exams_probability", self.exams_probability)?;
        for value in self.priority_probabilities {
            self.validate_probability("priority_probabilities", value)?;
        }
        self.validate_weights("priority_probabilities", self.priority_probabilities)?;
        self.validate_weights("queue_weights", self.queue_weights)?;

        for (name, spec) in self.named_distributions() {
            crate::random::RandomDistribution::from_spec(spec).map_err(|source| {
                ConfigValidationError::InvalidDistribution {
                    stage: name.to_string(),
                    source,
                }
            })?;
        }
        if !self.arrival.can_be_positive() {
            return Err(ConfigValidationError::InvalidDistribution {
                stage: "arrival".to_string(),
                source: DistributionError::InvalidParameters {
                    family: self.arrival.family,
                    reason: format!("inter-arrival times of {} are never positive", self.arrival),
                },
            });
        }

        Ok(())
    }

    /// Helper method to validate probability values
    fn validate_probability(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    fn validate_weights(&self, field: &str, values: [f64; 5]) -> Result<(), ConfigValidationError> {
        let sum: f64 = values.iter().sum();
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) || sum <= 0.0 {
            return Err(ConfigValidationError::InvalidWeights {
                field: field.to_string(),
                values,
            });
        }
        Ok(())
    }

    /// Number of workers configured for a kind
    pub fn worker_count(&self, kind: WorkerKind) -> usize {
        match kind {
            WorkerKind::Attendant => self.attendants,
            WorkerKind::Nurse => self.nurses,
            WorkerKind::Doctor => self.doctors,
        }
    }

    /// Service time distribution of a care stage
    pub fn stage_distribution(&self, stage: Stage) -> &DistributionSpec {
        match stage {
            Stage::Registration => &self.registration,
            Stage::Screening => &self.screening,
            Stage::Consultation => &self.consultation,
            Stage::Exams => &self.exams,
        }
    }

    /// All five distributions with a display name, arrival first
    pub fn named_distributions(&self) -> [(&'static str, &DistributionSpec); 5] {
        [
            ("arrival", &self.arrival),
            ("registration", &self.registration),
            ("screening", &self.screening),
            ("consultation", &self.consultation),
            ("exams", &self.exams),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# sample configuration
T TTS 600        # ten hours
P PRO 0.5
P PRI 1 1 1 1 1
P QUE 0 0 0 0 2
Q MED 2
Q ENF 3
Q ATD 1
T CHE EXP 0.1
T CAD UNI 1 3
T TRI NOR 10 2
T ATE GAM 2 5 99
T EXA TRI 5 20 10
";

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.total_time, 1440.0);
        assert_eq!(config.doctors, 3);
        assert_eq!(config.nurses, 4);
        assert_eq!(config.attendants, 2);
        assert_eq!(config.queue_discipline, QueueDiscipline::Fifo);
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_text_configuration() {
        let config = SimulationConfig::parse_text(SAMPLE).unwrap();

        assert_eq!(config.total_time, 600.0);
        assert_eq!(config.exams_probability, 0.5);
        assert_eq!(config.priority_probabilities, [0.2; 5]);
        assert_eq!(config.queue_weights, [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.doctors, 2);
        assert_eq!(config.nurses, 3);
        assert_eq!(config.attendants, 1);
        assert_eq!(config.arrival.family, DistributionFamily::Exponential);
        assert_eq!(config.screening.params, vec![10.0, 2.0]);
        // surplus parameters are dropped
        assert_eq!(config.consultation.params, vec![2.0, 5.0]);
        assert_eq!(config.exams.params, vec![5.0, 20.0, 10.0]);
        config.validate().unwrap();
    }

    #[test]
    fn test_missing_key_is_reported() {
        let content = SAMPLE.replace("Q MED 2", "");
        let error = SimulationConfig::parse_text(&content).unwrap_err();
        assert!(matches!(error, ConfigError::MissingKey(ref key) if key == "q_med"));
    }

    #[test]
    fn test_unknown_distribution_is_reported() {
        let content = SAMPLE.replace("T CHE EXP 0.1", "T CHE FOO 0.1");
        let error = SimulationConfig::parse_text(&content).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Distribution(DistributionError::UnknownFamily(_))
        ));
    }

    #[test]
    fn test_insufficient_parameters_are_reported() {
        let content = SAMPLE.replace("T EXA TRI 5 20 10", "T EXA TRI 5 20");
        let error = SimulationConfig::parse_text(&content).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Distribution(DistributionError::MissingParameters {
                expected: 3,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_config_text_roundtrip() {
        let mut config = SimulationConfig::default();
        config.seed = Some(7);
        config.queue_discipline = QueueDiscipline::Lifo;

        let parsed = SimulationConfig::parse_text(&config.to_config_text()).unwrap();
        assert_eq!(parsed.doctors, config.doctors);
        assert_eq!(parsed.arrival, config.arrival);
        assert_eq!(parsed.exams, config.exams);
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.queue_discipline, QueueDiscipline::Lifo);
        for (a, b) in parsed.queue_weights.iter().zip(config.queue_weights.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = SimulationConfig::default();
        config.exams_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidProbability { .. })
        ));

        let mut config = SimulationConfig::default();
        config.total_time = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTotalTime(_))
        ));

        let mut config = SimulationConfig::default();
        config.queue_weights = [0.0; 5];
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidWeights { .. })
        ));

        let mut config = SimulationConfig::default();
        config.registration.params = vec![8.0, 2.0, 4.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from(["test", "cfg.txt", "--seed", "5", "--horizon", "60"])
            .unwrap();
        let mut config = SimulationConfig::default();
        SimulationConfig::apply_cli_overrides(&mut config, &args);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.total_time, 60.0);
    }
}
