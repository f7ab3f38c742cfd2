//! Projection, search and Monte Carlo outputs
//!
//! All results are plain values built fresh by each engine call. Amounts keep
//! full precision; `round_currency` is applied only when reporting.

use serde::{Deserialize, Serialize};

/// Tolerance for floating-point percentile comparison
pub const PERCENTILE_TOLERANCE: f64 = 0.001;

/// Round an amount to whole currency units for display or export
#[must_use]
#[inline]
pub fn round_currency(value: f64) -> f64 {
    value.round()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub age: u32,
    pub net_worth: f64,
}

/// Net worth at the end of each simulated year, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryPoint> {
        self.points.iter()
    }

    /// Net worth recorded for `age`, if that age was simulated
    #[must_use]
    pub fn net_worth_at(&self, age: u32) -> Option<f64> {
        let first = self.points.first()?.age;
        let index = age.checked_sub(first)? as usize;
        self.points.get(index).map(|p| p.net_worth)
    }

    #[must_use]
    pub fn final_point(&self) -> Option<TrajectoryPoint> {
        self.points.last().copied()
    }

    /// Copy of the trajectory with every amount rounded to whole units
    #[must_use]
    pub fn rounded(&self) -> Trajectory {
        Trajectory {
            points: self
                .points
                .iter()
                .map(|p| TrajectoryPoint {
                    age: p.age,
                    net_worth: round_currency(p.net_worth),
                })
                .collect(),
        }
    }
}

/// Baseline and simulated trajectories over the same ages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryComparison {
    pub baseline: Trajectory,
    pub simulated: Trajectory,
}

impl TrajectoryComparison {
    /// `simulated - baseline` at `age`
    #[must_use]
    pub fn difference_at(&self, age: u32) -> Option<f64> {
        Some(self.simulated.net_worth_at(age)? - self.baseline.net_worth_at(age)?)
    }
}

/// Outcome of a single retirement age search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementSearch {
    pub age: u32,
    /// False when the search stopped at the age limit without meeting the target
    pub reached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementImpact {
    pub baseline_age: u32,
    pub simulated_age: u32,
    /// `simulated_age - baseline_age`; negative when events bring retirement forward
    pub delay: i32,
    pub baseline_reached: bool,
    pub simulated_reached: bool,
}

impl RetirementImpact {
    #[must_use]
    pub fn from_searches(baseline: RetirementSearch, simulated: RetirementSearch) -> Self {
        Self {
            baseline_age: baseline.age,
            simulated_age: simulated.age,
            delay: simulated.age as i32 - baseline.age as i32,
            baseline_reached: baseline.reached,
            simulated_reached: simulated.reached,
        }
    }
}

/// Find a percentile value from a slice of (percentile, value) pairs
#[inline]
pub fn find_percentile_value(values: &[(f64, f64)], target: f64) -> Option<f64> {
    values
        .iter()
        .find(|(p, _)| (*p - target).abs() < PERCENTILE_TOLERANCE)
        .map(|(_, v)| *v)
}

/// Percentile values of the simulated net worth at one age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub age: u32,
    /// (percentile, net worth) pairs in the order they were requested
    pub percentiles: Vec<(f64, f64)>,
}

impl AgeBand {
    #[must_use]
    pub fn value_at(&self, percentile: f64) -> Option<f64> {
        find_percentile_value(&self.percentiles, percentile)
    }
}

/// The conventional P10 / P50 / P90 triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSet {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl PercentileSet {
    /// Returns `None` if any of the three percentiles was not computed.
    pub fn from_values(values: &[(f64, f64)]) -> Option<Self> {
        Some(Self {
            p10: find_percentile_value(values, 0.10)?,
            p50: find_percentile_value(values, 0.50)?,
            p90: find_percentile_value(values, 0.90)?,
        })
    }
}

/// Aggregated outcome of many stochastic projections.
///
/// Per-run trajectories are reduced into `bands` and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Runs requested
    pub runs: usize,
    /// Runs actually executed; lower than `runs` only after cancellation
    pub completed_runs: usize,
    pub target_net_worth: f64,
    /// Fraction of completed runs whose final net worth met the target
    pub success_probability: f64,
    pub mean_final_net_worth: f64,
    pub final_percentiles: Vec<(f64, f64)>,
    pub bands: Vec<AgeBand>,
}

impl MonteCarloResult {
    #[must_use]
    pub fn band_at(&self, age: u32) -> Option<&AgeBand> {
        self.bands.iter().find(|b| b.age == age)
    }

    #[must_use]
    pub fn final_value_at(&self, percentile: f64) -> Option<f64> {
        find_percentile_value(&self.final_percentiles, percentile)
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.completed_runs < self.runs
    }
}
