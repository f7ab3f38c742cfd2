//! Retirement age search
//!
//! The search is a linear forward scan. Injected events can make net worth dip
//! and recover, so the trajectory is not monotonic in age and a bisection over
//! ages could skip the first crossing.

use crate::error::{EngineError, Result};
use crate::ledger::EventLedger;
use crate::model::{Profile, RetirementImpact, RetirementSearch};
use crate::projection::{Variant, schedule_for, walk};

/// Oldest age the search will consider
pub const RETIREMENT_AGE_LIMIT: u32 = 100;

/// First age at which the projected net worth meets `target_net_worth`.
///
/// Scans from `current_age` up to `RETIREMENT_AGE_LIMIT`. When the target is
/// never met the result is the limit with `reached == false`; that is a valid
/// outcome for the caller to present, not an error.
pub fn search_retirement_age(
    profile: &Profile,
    ledger: &EventLedger,
    target_net_worth: f64,
    variant: Variant,
) -> Result<RetirementSearch> {
    profile.validate()?;
    ledger.validate()?;
    if !target_net_worth.is_finite() {
        return Err(EngineError::InvalidTarget {
            value: target_net_worth,
        });
    }

    let limit = RETIREMENT_AGE_LIMIT.max(profile.current_age);
    let schedule = schedule_for(ledger, variant, profile.years_until(limit));

    // One walk to the limit yields the projection for every candidate age.
    let start = profile.initial_net_worth + schedule.at(0);
    let mut found = (start >= target_net_worth).then_some(profile.current_age);
    walk(
        profile,
        &schedule,
        limit,
        |_| profile.annual_return_rate,
        |point| {
            if found.is_none() && point.net_worth >= target_net_worth {
                found = Some(point.age);
            }
        },
    );

    let search = match found {
        Some(age) => RetirementSearch { age, reached: true },
        None => RetirementSearch {
            age: limit,
            reached: false,
        },
    };
    tracing::debug!(
        ?variant,
        target_net_worth,
        age = search.age,
        reached = search.reached,
        "retirement search finished"
    );
    Ok(search)
}

/// Age returned by `search_retirement_age`
pub fn find_retirement_age(
    profile: &Profile,
    ledger: &EventLedger,
    target_net_worth: f64,
    variant: Variant,
) -> Result<u32> {
    search_retirement_age(profile, ledger, target_net_worth, variant).map(|s| s.age)
}

/// Run the search for both variants and report how far the events move retirement.
pub fn calculate_retirement_impact(
    profile: &Profile,
    ledger: &EventLedger,
    target_net_worth: f64,
) -> Result<RetirementImpact> {
    let baseline = search_retirement_age(profile, ledger, target_net_worth, Variant::Baseline)?;
    let simulated = search_retirement_age(profile, ledger, target_net_worth, Variant::Simulated)?;
    Ok(RetirementImpact::from_searches(baseline, simulated))
}
