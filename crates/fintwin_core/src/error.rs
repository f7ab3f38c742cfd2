use std::fmt;

use crate::model::InstanceId;

/// Errors raised when engine inputs fail their preconditions.
///
/// Every variant is a local precondition violation detected before any
/// computation starts. An unreached retirement target is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    InvalidProfile {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    InvalidEventImpact {
        instance_id: InstanceId,
        impact: f64,
    },
    /// An event was placed at an age the profile has already passed
    InvalidEventPlacement {
        age: u32,
        current_age: u32,
    },
    InvalidTarget {
        value: f64,
    },
    InvalidRuns {
        runs: usize,
        max: usize,
    },
    InvalidPercentile {
        value: f64,
    },
    /// `runs × years` would hold more per-age samples than `max_samples`
    SimulationTooLarge {
        runs: usize,
        years: u32,
        max_samples: usize,
    },
    InvalidNoiseParameters {
        profile_type: &'static str,
        reason: &'static str,
    },
    /// Monte Carlo simulation was cancelled before any run completed
    Cancelled,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidProfile {
                field,
                value,
                reason,
            } => write!(f, "invalid profile {field} ({value}): {reason}"),
            EngineError::InvalidEventImpact {
                instance_id,
                impact,
            } => write!(
                f,
                "event instance {} has non-finite impact {impact}",
                instance_id.0
            ),
            EngineError::InvalidEventPlacement { age, current_age } => write!(
                f,
                "event age {age} is before the current age {current_age}"
            ),
            EngineError::InvalidTarget { value } => {
                write!(f, "target net worth must be finite, got {value}")
            }
            EngineError::InvalidRuns { runs, max } => {
                write!(f, "run count must be between 1 and {max}, got {runs}")
            }
            EngineError::InvalidPercentile { value } => {
                write!(f, "percentile must lie in [0, 1], got {value}")
            }
            EngineError::SimulationTooLarge {
                runs,
                years,
                max_samples,
            } => write!(
                f,
                "{runs} runs over {years} years exceeds the limit of {max_samples} samples"
            ),
            EngineError::InvalidNoiseParameters {
                profile_type,
                reason,
            } => write!(f, "invalid {profile_type} noise parameters: {reason}"),
            EngineError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;
