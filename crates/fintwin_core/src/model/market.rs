use rand::{Rng, distr::Distribution};
use rand_distr::{Normal, StudentT};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Random perturbation added to the profile's return rate each simulated year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReturnNoise {
    /// No perturbation; every run follows the deterministic projection
    None,
    /// Zero-mean normal noise with the given standard deviation
    Normal { std_dev: f64 },
    /// Zero-centred Student's t noise for fat-tailed markets.
    /// - `scale`: multiplier on the standard t draw
    /// - `df`: degrees of freedom (lower = fatter tails, typically 4-6 for equities)
    StudentT { scale: f64, df: f64 },
}

impl Default for ReturnNoise {
    fn default() -> Self {
        ReturnNoise::Normal { std_dev: 0.15 }
    }
}

impl ReturnNoise {
    /// Check parameters and build a reusable sampler.
    pub fn sampler(&self) -> Result<NoiseSampler> {
        match *self {
            ReturnNoise::None => Ok(NoiseSampler::Zero),
            ReturnNoise::Normal { std_dev } => {
                if !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(EngineError::InvalidNoiseParameters {
                        profile_type: "Normal",
                        reason: "std_dev must be non-negative and finite",
                    });
                }
                if std_dev == 0.0 {
                    return Ok(NoiseSampler::Zero);
                }
                Normal::new(0.0, std_dev).map(NoiseSampler::Normal).map_err(|_| {
                    EngineError::InvalidNoiseParameters {
                        profile_type: "Normal",
                        reason: "std_dev must be non-negative and finite",
                    }
                })
            }
            ReturnNoise::StudentT { scale, df } => {
                if !scale.is_finite() || scale < 0.0 {
                    return Err(EngineError::InvalidNoiseParameters {
                        profile_type: "StudentT",
                        reason: "scale must be non-negative and finite",
                    });
                }
                let dist = StudentT::new(df).map_err(|_| EngineError::InvalidNoiseParameters {
                    profile_type: "StudentT",
                    reason: "degrees of freedom must be positive and finite",
                })?;
                if scale == 0.0 {
                    return Ok(NoiseSampler::Zero);
                }
                Ok(NoiseSampler::StudentT { dist, scale })
            }
        }
    }

    /// True when every draw is exactly zero
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match *self {
            ReturnNoise::None => true,
            ReturnNoise::Normal { std_dev } => std_dev == 0.0,
            ReturnNoise::StudentT { scale, .. } => scale == 0.0,
        }
    }
}

/// Prepared distribution for `ReturnNoise`
#[derive(Debug, Clone)]
pub enum NoiseSampler {
    Zero,
    Normal(Normal<f64>),
    StudentT { dist: StudentT<f64>, scale: f64 },
}

impl NoiseSampler {
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            NoiseSampler::Zero => 0.0,
            NoiseSampler::Normal(dist) => dist.sample(rng),
            NoiseSampler::StudentT { dist, scale } => scale * dist.sample(rng),
        }
    }
}
