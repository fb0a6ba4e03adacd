//! Parametric random distributions for arrival and service times
//!
//! Each configured distribution is turned into a [`RandomDistribution`] once,
//! when a simulation is reset; sampling afterwards never fails.

use crate::types::{DistributionFamily, DistributionSpec, SimulationConfig, Stage};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Beta, Distribution, Exp, Gamma, LogNormal, Normal, Pareto, Triangular, Weibull};
use std::fmt;

/// Errors raised while building a distribution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    /// The family tag is not one of the supported families
    #[error("Unknown distribution family: {0}")]
    UnknownFamily(String),

    /// Fewer parameters than the family requires
    #[error("{family} needs {expected} parameter(s), got {got}")]
    MissingParameters {
        /// Family being built
        family: DistributionFamily,
        /// Parameters required
        expected: usize,
        /// Parameters supplied
        got: usize,
    },

    /// The family rejected the parameter values
    #[error("Invalid parameters for {family}: {reason}")]
    InvalidParameters {
        /// Family being built
        family: DistributionFamily,
        /// Why the parameters were rejected
        reason: String,
    },
}

fn rejected<E: fmt::Display>(family: DistributionFamily) -> impl FnOnce(E) -> DistributionError {
    move |error| DistributionError::InvalidParameters {
        family,
        reason: error.to_string(),
    }
}

/// A ready-to-sample distribution of one of the supported families
#[derive(Debug, Clone)]
pub enum RandomDistribution {
    /// Beta(alpha, beta)
    Beta(Beta<f64>),
    /// Exponential(rate)
    Exponential(Exp<f64>),
    /// Gamma(shape, scale)
    Gamma(Gamma<f64>),
    /// LogNormal(mu, sigma)
    LogNormal(LogNormal<f64>),
    /// Normal(mean, std_dev)
    Normal(Normal<f64>),
    /// Pareto(shape) with unit scale
    Pareto(Pareto<f64>),
    /// Triangular(low, high, mode)
    Triangular(Triangular<f64>),
    /// Uniform between two bounds, given in any order
    Uniform(Uniform<f64>),
    /// Weibull(scale, shape)
    Weibull(Weibull<f64>),
}

impl RandomDistribution {
    /// Build a distribution from a family and its parameters.
    ///
    /// Surplus parameters are ignored; missing ones are an error.
    pub fn new(family: DistributionFamily, params: &[f64]) -> Result<Self, DistributionError> {
        let expected = family.parameter_count();
        if params.len() < expected {
            return Err(DistributionError::MissingParameters {
                family,
                expected,
                got: params.len(),
            });
        }
        let p = params;

        let distribution = match family {
            DistributionFamily::Beta => {
                Self::Beta(Beta::new(p[0], p[1]).map_err(rejected(family))?)
            }
            DistributionFamily::Exponential => {
                Self::Exponential(Exp::new(p[0]).map_err(rejected(family))?)
            }
            DistributionFamily::Gamma => {
                Self::Gamma(Gamma::new(p[0], p[1]).map_err(rejected(family))?)
            }
            DistributionFamily::LogNormal => {
                Self::LogNormal(LogNormal::new(p[0], p[1]).map_err(rejected(family))?)
            }
            DistributionFamily::Normal => {
                Self::Normal(Normal::new(p[0], p[1]).map_err(rejected(family))?)
            }
            DistributionFamily::Pareto => {
                Self::Pareto(Pareto::new(1.0, p[0]).map_err(rejected(family))?)
            }
            DistributionFamily::Triangular => {
                Self::Triangular(Triangular::new(p[0], p[1], p[2]).map_err(rejected(family))?)
            }
            DistributionFamily::Uniform => {
                if !p[0].is_finite() || !p[1].is_finite() {
                    return Err(DistributionError::InvalidParameters {
                        family,
                        reason: format!("bounds ({}, {}) must be finite", p[0], p[1]),
                    });
                }
                // bounds may come in either order
                Self::Uniform(Uniform::new_inclusive(p[0].min(p[1]), p[0].max(p[1])))
            }
            DistributionFamily::Weibull => {
                Self::Weibull(Weibull::new(p[0], p[1]).map_err(rejected(family))?)
            }
        };
        Ok(distribution)
    }

    /// Build a distribution from a configuration entry
    pub fn from_spec(spec: &DistributionSpec) -> Result<Self, DistributionError> {
        Self::new(spec.family, &spec.params)
    }

    /// Draw one sample
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Beta(d) => d.sample(rng),
            Self::Exponential(d) => d.sample(rng),
            Self::Gamma(d) => d.sample(rng),
            Self::LogNormal(d) => d.sample(rng),
            Self::Normal(d) => d.sample(rng),
            Self::Pareto(d) => d.sample(rng),
            Self::Triangular(d) => d.sample(rng),
            Self::Uniform(d) => d.sample(rng),
            Self::Weibull(d) => d.sample(rng),
        }
    }
}

/// Inter-arrival distribution plus one service distribution per care stage
#[derive(Debug, Clone)]
pub struct StageDistributions {
    arrival: RandomDistribution,
    stages: [RandomDistribution; 4],
}

impl StageDistributions {
    /// Build all five distributions of a configuration
    pub fn from_config(config: &SimulationConfig) -> Result<Self, DistributionError> {
        Ok(Self {
            arrival: RandomDistribution::from_spec(&config.arrival)?,
            stages: [
                RandomDistribution::from_spec(config.stage_distribution(Stage::Registration))?,
                RandomDistribution::from_spec(config.stage_distribution(Stage::Screening))?,
                RandomDistribution::from_spec(config.stage_distribution(Stage::Consultation))?,
                RandomDistribution::from_spec(config.stage_distribution(Stage::Exams))?,
            ],
        })
    }

    /// Inter-arrival time distribution
    pub fn arrival(&self) -> &RandomDistribution {
        &self.arrival
    }

    /// Service time distribution of a stage
    pub fn stage(&self, stage: Stage) -> &RandomDistribution {
        &self.stages[stage.index()]
    }
}
