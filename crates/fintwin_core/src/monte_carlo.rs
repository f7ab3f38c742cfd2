//! Monte Carlo sampling over perturbed return rates
//!
//! Each run repeats the deterministic walk with `annual_return_rate` plus a
//! fresh noise draw every year. Runs share no mutable state: the caller's RNG
//! is used only to draw one seed per run up front, so the result for a given
//! seed is the same whether runs execute sequentially or on the rayon pool.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::ledger::{EventLedger, ImpactSchedule};
use crate::model::{AgeBand, MonteCarloResult, NoiseSampler, Profile, ReturnNoise};
use crate::projection::{Variant, schedule_for, walk};

/// Upper bound on runs per call; each run holds a full path until aggregation.
pub const MAX_RUNS: usize = 100_000;

/// Upper bound on `runs × years`, the number of per-age values held at once
pub const MAX_SAMPLES: usize = 20_000_000;

#[cfg(feature = "parallel")]
const MAX_BATCH_SIZE: usize = 100;

fn default_runs() -> usize {
    1_000
}

fn default_percentiles() -> Vec<f64> {
    vec![0.10, 0.50, 0.90]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    #[serde(default = "default_runs")]
    pub runs: usize,
    #[serde(default)]
    pub noise: ReturnNoise,
    /// Percentiles reported per age, as fractions in [0, 1]
    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<f64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            noise: ReturnNoise::default(),
            percentiles: default_percentiles(),
        }
    }
}

impl MonteCarloConfig {
    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_noise(mut self, noise: ReturnNoise) -> Self {
        self.noise = noise;
        self
    }

    #[must_use]
    pub fn with_percentiles(mut self, percentiles: Vec<f64>) -> Self {
        self.percentiles = percentiles;
        self
    }

    /// Check run count and percentiles, and prepare the noise sampler.
    pub fn validate(&self) -> Result<NoiseSampler> {
        if self.runs == 0 || self.runs > MAX_RUNS {
            return Err(EngineError::InvalidRuns {
                runs: self.runs,
                max: MAX_RUNS,
            });
        }
        if let Some(&value) = self
            .percentiles
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(EngineError::InvalidPercentile { value });
        }
        self.noise.sampler()
    }
}

/// One run's outcome before aggregation
struct RunPath {
    final_net_worth: f64,
    path: Vec<f64>,
}

/// Run `config.runs` stochastic projections and aggregate them.
pub fn simulate<R: Rng + ?Sized>(
    profile: &Profile,
    ledger: &EventLedger,
    target_age: u32,
    target_net_worth: f64,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<MonteCarloResult> {
    let never = AtomicBool::new(false);
    simulate_with_cancel(
        profile,
        ledger,
        target_age,
        target_net_worth,
        config,
        rng,
        &never,
    )
}

/// Like `simulate`, but stops starting new runs once `cancel` is set.
///
/// Runs already in flight finish. The result covers the completed runs only
/// (`completed_runs < runs`); if none completed, `EngineError::Cancelled` is returned.
pub fn simulate_with_cancel<R: Rng + ?Sized>(
    profile: &Profile,
    ledger: &EventLedger,
    target_age: u32,
    target_net_worth: f64,
    config: &MonteCarloConfig,
    rng: &mut R,
    cancel: &AtomicBool,
) -> Result<MonteCarloResult> {
    profile.validate()?;
    ledger.validate()?;
    if !target_net_worth.is_finite() {
        return Err(EngineError::InvalidTarget {
            value: target_net_worth,
        });
    }
    let sampler = config.validate()?;

    let years = profile.years_until(target_age);
    if (config.runs as u64).saturating_mul(u64::from(years)) > MAX_SAMPLES as u64 {
        return Err(EngineError::SimulationTooLarge {
            runs: config.runs,
            years,
            max_samples: MAX_SAMPLES,
        });
    }
    let schedule = schedule_for(ledger, Variant::Simulated, years);
    let seeds: Vec<u64> = (0..config.runs).map(|_| rng.random()).collect();

    tracing::debug!(runs = config.runs, years, "starting Monte Carlo simulation");

    let paths = execute_runs(&seeds, |seed| {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        Some(run_once(profile, &schedule, target_age, &sampler, seed))
    });

    if paths.is_empty() {
        return Err(EngineError::Cancelled);
    }

    let result = aggregate(profile, target_net_worth, config, years, paths);
    tracing::debug!(
        completed_runs = result.completed_runs,
        success_probability = result.success_probability,
        "Monte Carlo simulation finished"
    );
    Ok(result)
}

fn run_once(
    profile: &Profile,
    schedule: &ImpactSchedule,
    target_age: u32,
    sampler: &NoiseSampler,
    seed: u64,
) -> RunPath {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut path = Vec::with_capacity(profile.years_until(target_age) as usize);
    let final_net_worth = walk(
        profile,
        schedule,
        target_age,
        |_| profile.annual_return_rate + sampler.sample(&mut rng),
        |point| path.push(point.net_worth),
    );
    RunPath {
        final_net_worth,
        path,
    }
}

#[cfg(feature = "parallel")]
fn execute_runs<F>(seeds: &[u64], run: F) -> Vec<RunPath>
where
    F: Fn(u64) -> Option<RunPath> + Sync,
{
    use rayon::prelude::*;

    let batches: Vec<Vec<RunPath>> = seeds
        .par_chunks(MAX_BATCH_SIZE)
        .map(|batch| batch.iter().filter_map(|&seed| run(seed)).collect())
        .collect();
    batches.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn execute_runs<F>(seeds: &[u64], run: F) -> Vec<RunPath>
where
    F: Fn(u64) -> Option<RunPath> + Sync,
{
    seeds.iter().filter_map(|&seed| run(seed)).collect()
}

fn aggregate(
    profile: &Profile,
    target_net_worth: f64,
    config: &MonteCarloConfig,
    years: u32,
    paths: Vec<RunPath>,
) -> MonteCarloResult {
    let completed_runs = paths.len();
    let successes = paths
        .iter()
        .filter(|p| p.final_net_worth >= target_net_worth)
        .count();

    let mut finals: Vec<f64> = paths.iter().map(|p| p.final_net_worth).collect();
    let mean_final_net_worth = finals.iter().sum::<f64>() / completed_runs as f64;

    // Transpose run paths into per-age columns. Columns grow as paths are
    // consumed and each path is dropped once copied, so the two never coexist in full.
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); years as usize];
    for run in paths {
        for (column, value) in columns.iter_mut().zip(run.path) {
            column.push(value);
        }
    }

    let bands = columns
        .into_iter()
        .enumerate()
        .map(|(offset, mut column)| AgeBand {
            age: profile.current_age + offset as u32 + 1,
            percentiles: percentiles_of(&mut column, &config.percentiles),
        })
        .collect();

    MonteCarloResult {
        runs: config.runs,
        completed_runs,
        target_net_worth,
        success_probability: successes as f64 / completed_runs as f64,
        mean_final_net_worth,
        final_percentiles: percentiles_of(&mut finals, &config.percentiles),
        bands,
    }
}

/// Sort `samples` in place and read the requested order statistics.
fn percentiles_of(samples: &mut [f64], percentiles: &[f64]) -> Vec<(f64, f64)> {
    samples.sort_by(f64::total_cmp);
    percentiles
        .iter()
        .map(|&p| (p, order_statistic(samples, p)))
        .collect()
}

/// Nearest-rank percentile of a sorted, non-empty slice
fn order_statistic(sorted: &[f64], percentile: f64) -> f64 {
    let n = sorted.len();
    let rank = (percentile * n as f64).ceil() as usize;
    sorted[rank.clamp(1, n) - 1]
}
