//! Tests for the retirement age search
//!
//! These tests verify that:
//! - The search returns the first age whose projection meets the target
//! - An unreachable target stops at the age limit
//! - Positive events bring retirement forward, negative ones push it back
//! - A dip below the target after an early crossing does not hide that crossing

use super::sample_profile;
use crate::ledger::EventLedger;
use crate::model::{LifeEvent, Profile};
use crate::projection::{Variant, project, project_trajectory};
use crate::retirement::{
    RETIREMENT_AGE_LIMIT, calculate_retirement_impact, find_retirement_age, search_retirement_age,
};

#[test]
fn test_first_crossing_matches_projection() {
    let profile = sample_profile();
    let ledger = EventLedger::new();
    let target = 1_000_000.0;

    let age = find_retirement_age(&profile, &ledger, target, Variant::Baseline).unwrap();
    assert!(project(&profile, &ledger, age).unwrap() >= target);
    assert!(project(&profile, &ledger, age - 1).unwrap() < target);
}

#[test]
fn test_unreachable_target_stops_at_limit() {
    let profile = sample_profile();
    let search = search_retirement_age(
        &profile,
        &EventLedger::new(),
        1e12,
        Variant::Simulated,
    )
    .unwrap();
    assert_eq!(search.age, RETIREMENT_AGE_LIMIT);
    assert!(!search.reached);
}

#[test]
fn test_empty_ledger_has_no_delay() {
    let impact = calculate_retirement_impact(&sample_profile(), &EventLedger::new(), 750_000.0)
        .unwrap();
    assert_eq!(impact.baseline_age, impact.simulated_age);
    assert_eq!(impact.delay, 0);
}

#[test]
fn test_negative_event_delays_retirement() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    ledger.add_event(
        LifeEvent::new("home", -150_000.0)
            .with_label("Buy a house")
            .with_category("housing"),
        3,
    );

    let impact = calculate_retirement_impact(&profile, &ledger, 1_000_000.0).unwrap();
    assert!(impact.delay > 0, "expected delay, got {impact:?}");
    assert!(impact.baseline_reached && impact.simulated_reached);
}

#[test]
fn test_positive_event_accelerates_retirement() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("inheritance", 300_000.0), 2);

    let impact = calculate_retirement_impact(&profile, &ledger, 1_000_000.0).unwrap();
    assert!(impact.delay < 0, "expected acceleration, got {impact:?}");
}

#[test]
fn test_non_monotonic_trajectory_finds_first_crossing() {
    // Crosses 100k at 35, drops below after a large expense at 36, recovers later
    let profile = Profile::new(30, 50_000.0, 0.0, 10_000.0);
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("medical", -80_000.0), 6);

    let trajectory = project_trajectory(&profile, &ledger, 45).unwrap();
    assert_eq!(trajectory.net_worth_at(35), Some(100_000.0));
    assert_eq!(trajectory.net_worth_at(36), Some(30_000.0));

    let age = find_retirement_age(&profile, &ledger, 100_000.0, Variant::Simulated).unwrap();
    assert_eq!(age, 35);
}

#[test]
fn test_event_during_dip_delays_second_target() {
    let profile = Profile::new(30, 50_000.0, 0.0, 10_000.0);
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("medical", -80_000.0), 6);

    // Baseline reaches 150k at 40; the simulated walk needs 8 more years
    let impact = calculate_retirement_impact(&profile, &ledger, 150_000.0).unwrap();
    assert_eq!(impact.baseline_age, 40);
    assert_eq!(impact.simulated_age, 48);
    assert_eq!(impact.delay, 8);
}
