//! Net worth projection and simulation library
//!
//! This crate projects a net worth trajectory forward year by year and measures
//! how injected life events change it. It supports:
//! - A baseline growth model (return, then contribution)
//! - An event ledger of signed one-off impacts placed at year offsets
//! - Deterministic baseline vs simulated trajectories
//! - Retirement age search against a target net worth
//! - Monte Carlo runs with perturbed returns, percentile bands and success probability
//!
//! # Builder DSL
//!
//! ```ignore
//! use fintwin_core::{LifeEvent, ScenarioBuilder};
//!
//! let scenario = ScenarioBuilder::new()
//!     .current_age(30)
//!     .net_worth(50_000.0)
//!     .return_rate(0.07)
//!     .contribution(20_000.0)
//!     .event(LifeEvent::new("inheritance", 50_000.0), 5)
//!     .build()?;
//!
//! let impact = scenario.calculate_retirement_impact(1_000_000.0)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod growth;
pub mod ledger;
pub mod monte_carlo;
pub mod projection;
pub mod retirement;
pub mod scenario;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{MonteCarloConfig, ScenarioBuilder};
pub use error::{EngineError, Result};
pub use ledger::EventLedger;
pub use model::{
    InjectedEvent, InstanceId, LifeEvent, LifeEventId, MonteCarloResult, Profile, ReturnNoise,
    RetirementImpact, RetirementSearch, Trajectory, TrajectoryComparison,
};
pub use projection::Variant;
pub use retirement::RETIREMENT_AGE_LIMIT;
pub use scenario::Scenario;
