//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `projection` - Deterministic baseline and simulated walks
//! - `retirement` - Retirement age search and impact
//! - `monte_carlo` - Stochastic runs, percentiles and cancellation
//! - `builder_dsl` - Scenario builder and session API
//! - `properties` - Property-based checks over random profiles

mod projection;
mod retirement;

use crate::model::Profile;

/// Age 30, $50k, 7% return, $20k yearly contribution
pub(crate) fn sample_profile() -> Profile {
    Profile::new(30, 50_000.0, 0.07, 20_000.0)
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected:.6}, got {actual:.6}"
    );
}
