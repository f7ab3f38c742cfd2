//! Scenario construction
//!
//! `ScenarioBuilder` assembles a validated `Scenario`. Run settings for the
//! Monte Carlo sampler live in `MonteCarloConfig`, re-exported here so callers
//! find all input types in one place.

pub mod builder;

pub use crate::monte_carlo::MonteCarloConfig;
pub use builder::ScenarioBuilder;
