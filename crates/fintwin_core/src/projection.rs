//! Deterministic year-by-year net worth projection
//!
//! A walk starts from the profile's initial net worth at `current_age`. Events
//! at offset 0 land immediately. Each simulated year then applies the growth
//! model and adds the impacts of events landing at the age just reached, so an
//! event earns no return in the year it lands but compounds afterwards.
//!
//! Baseline and simulated walks are always separate calls with their own
//! accumulator; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::growth::advance;
use crate::ledger::{EventLedger, ImpactSchedule};
use crate::model::{Profile, Trajectory, TrajectoryComparison, TrajectoryPoint};

/// Which trajectory a projection or search should follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Ignore the ledger entirely
    Baseline,
    /// Apply every ledger event
    Simulated,
}

/// Impact schedule for a walk of `years` under `variant`
pub(crate) fn schedule_for(ledger: &EventLedger, variant: Variant, years: u32) -> ImpactSchedule {
    match variant {
        Variant::Baseline => ImpactSchedule::none(),
        Variant::Simulated => ledger.schedule(years),
    }
}

/// Walk from `current_age` to `target_age`, reporting each year-end point.
///
/// `rate_for_year` supplies the return rate for each year offset, which lets
/// Monte Carlo runs perturb the rate while sharing this loop. Returns the
/// final net worth; a target before the current age returns the initial net
/// worth untouched.
pub(crate) fn walk<F, P>(
    profile: &Profile,
    schedule: &ImpactSchedule,
    target_age: u32,
    mut rate_for_year: F,
    mut on_point: P,
) -> f64
where
    F: FnMut(u32) -> f64,
    P: FnMut(TrajectoryPoint),
{
    if target_age < profile.current_age {
        return profile.initial_net_worth;
    }

    let mut net_worth = profile.initial_net_worth + schedule.at(0);
    for year in 0..profile.years_until(target_age) {
        net_worth = advance(net_worth, rate_for_year(year), profile.annual_contribution);
        net_worth += schedule.at(year + 1);
        on_point(TrajectoryPoint {
            age: profile.current_age + year + 1,
            net_worth,
        });
    }
    net_worth
}

fn run(profile: &Profile, ledger: &EventLedger, target_age: u32, variant: Variant) -> Trajectory {
    let schedule = schedule_for(ledger, variant, profile.years_until(target_age));
    let mut points = Vec::with_capacity(profile.years_until(target_age) as usize);
    walk(
        profile,
        &schedule,
        target_age,
        |_| profile.annual_return_rate,
        |point| points.push(point),
    );
    Trajectory { points }
}

/// Net worth at `target_age` with every ledger event applied
pub fn project(profile: &Profile, ledger: &EventLedger, target_age: u32) -> Result<f64> {
    profile.validate()?;
    ledger.validate()?;
    let schedule = schedule_for(ledger, Variant::Simulated, profile.years_until(target_age));
    Ok(walk(
        profile,
        &schedule,
        target_age,
        |_| profile.annual_return_rate,
        |_| {},
    ))
}

/// Net worth at `target_age` with no events
pub fn project_baseline(profile: &Profile, target_age: u32) -> Result<f64> {
    project(profile, &EventLedger::new(), target_age)
}

/// Full simulated trajectory, one point per year up to and including `target_age`
pub fn project_trajectory(
    profile: &Profile,
    ledger: &EventLedger,
    target_age: u32,
) -> Result<Trajectory> {
    project_variant(profile, ledger, target_age, Variant::Simulated)
}

pub fn project_variant(
    profile: &Profile,
    ledger: &EventLedger,
    target_age: u32,
    variant: Variant,
) -> Result<Trajectory> {
    profile.validate()?;
    ledger.validate()?;
    Ok(run(profile, ledger, target_age, variant))
}

/// Baseline and simulated trajectories from two independent walks
pub fn compare(
    profile: &Profile,
    ledger: &EventLedger,
    target_age: u32,
) -> Result<TrajectoryComparison> {
    profile.validate()?;
    ledger.validate()?;
    Ok(TrajectoryComparison {
        baseline: run(profile, ledger, target_age, Variant::Baseline),
        simulated: run(profile, ledger, target_age, Variant::Simulated),
    })
}
