//! Tests for the deterministic projector
//!
//! These tests verify that:
//! - One year of growth applies the return before the contribution
//! - An injected event shifts the simulated trajectory from the age it lands
//! - The event itself earns returns only in later years
//! - Baseline walks ignore the ledger and never change when events are added

use super::{assert_close, sample_profile};
use crate::growth::advance;
use crate::ledger::EventLedger;
use crate::model::{LifeEvent, Profile};
use crate::projection::{
    Variant, compare, project, project_baseline, project_trajectory, project_variant,
};

#[test]
fn test_first_year_growth() {
    let profile = sample_profile();
    let net_worth = project(&profile, &EventLedger::new(), 31).unwrap();
    assert_eq!(net_worth, 73_500.0);
}

#[test]
fn test_trajectory_matches_repeated_advance() {
    let profile = sample_profile();
    let trajectory = project_trajectory(&profile, &EventLedger::new(), 40).unwrap();
    assert_eq!(trajectory.len(), 10);

    let mut expected = profile.initial_net_worth;
    for point in trajectory.iter() {
        expected = advance(
            expected,
            profile.annual_return_rate,
            profile.annual_contribution,
        );
        assert_eq!(point.net_worth, expected, "mismatch at age {}", point.age);
    }
    assert_eq!(trajectory.final_point().unwrap().age, 40);
}

#[test]
fn test_event_lands_at_its_age_without_return() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("inheritance", 50_000.0), 5);

    let comparison = compare(&profile, &ledger, 40).unwrap();

    for age in 31..35 {
        assert_eq!(comparison.difference_at(age), Some(0.0), "age {age}");
    }
    assert_close(comparison.difference_at(35).unwrap(), 50_000.0);
    assert_close(comparison.difference_at(36).unwrap(), 50_000.0 * 1.07);
    assert_close(
        comparison.difference_at(40).unwrap(),
        50_000.0 * 1.07_f64.powi(5),
    );
}

#[test]
fn test_project_to_event_age_includes_event() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("inheritance", 50_000.0), 5);

    let simulated = project(&profile, &ledger, 35).unwrap();
    let baseline = project_baseline(&profile, 35).unwrap();
    assert_close(simulated - baseline, 50_000.0);
}

#[test]
fn test_duplicate_events_stack() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    let car = LifeEvent::new("car", -15_000.0).with_category("transport");
    ledger.add_event(car.clone(), 2);
    ledger.add_event(car, 2);

    let comparison = compare(&profile, &ledger, 32).unwrap();
    assert_close(comparison.difference_at(32).unwrap(), -30_000.0);
}

#[test]
fn test_removing_event_restores_baseline() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    let id = ledger.add_event(LifeEvent::new("sabbatical", -40_000.0), 3);

    let with_event = project(&profile, &ledger, 45).unwrap();
    ledger.remove_event(id);
    let without_event = project(&profile, &ledger, 45).unwrap();

    assert!(with_event < without_event);
    assert_eq!(without_event, project_baseline(&profile, 45).unwrap());
}

#[test]
fn test_baseline_variant_ignores_ledger() {
    let profile = sample_profile();
    let empty = project_trajectory(&profile, &EventLedger::new(), 50).unwrap();

    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("home", -80_000.0), 4);
    ledger.add_event(LifeEvent::new("bonus", 10_000.0), 9);
    let baseline = project_variant(&profile, &ledger, 50, Variant::Baseline).unwrap();

    assert_eq!(baseline, empty);
}

#[test]
fn test_zero_growth_is_flat() {
    let profile = Profile::new(25, 12_345.67, 0.0, 0.0);
    let trajectory = project_trajectory(&profile, &EventLedger::new(), 65).unwrap();
    assert_eq!(trajectory.len(), 40);
    assert!(trajectory.iter().all(|p| p.net_worth == 12_345.67));
}

#[test]
fn test_total_loss_rate_is_valid() {
    let profile = Profile::new(40, 500_000.0, -1.0, 10_000.0);
    let trajectory = project_trajectory(&profile, &EventLedger::new(), 43).unwrap();
    assert!(trajectory.iter().all(|p| p.net_worth == 10_000.0));
}

#[test]
fn test_negative_contribution_drains() {
    let profile = Profile::new(60, 100_000.0, 0.0, -25_000.0);
    let net_worth = project_baseline(&profile, 66).unwrap();
    assert_eq!(net_worth, -50_000.0);
}

#[test]
fn test_events_past_target_are_ignored() {
    let profile = sample_profile();
    let mut ledger = EventLedger::new();
    ledger.add_event(LifeEvent::new("late", 1_000_000.0), 20);

    assert_eq!(
        project(&profile, &ledger, 49).unwrap(),
        project_baseline(&profile, 49).unwrap()
    );
    assert!(project(&profile, &ledger, 50).unwrap() > project_baseline(&profile, 50).unwrap());
}

#[test]
fn test_rounding_only_on_report() {
    let profile = Profile::new(30, 1_000.0, 0.015, 0.333);
    let trajectory = project_trajectory(&profile, &EventLedger::new(), 60).unwrap();
    let rounded = trajectory.rounded();

    let last = trajectory.final_point().unwrap().net_worth;
    assert_ne!(last, last.round());
    assert_eq!(rounded.final_point().unwrap().net_worth, last.round());
}
