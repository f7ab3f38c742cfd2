//! Plain-text reports for the command-line front end
//!
//! Amounts are rounded to whole currency units here and nowhere earlier.

use std::fmt::Write;

use fintwin_core::model::PercentileSet;
use fintwin_core::{
    InjectedEvent, MonteCarloResult, RetirementImpact, Trajectory, TrajectoryComparison,
};

use crate::util::format::{format_currency, format_delay, format_percentage, format_signed_currency};

/// Ages shown in long tables: every `step` years plus the final age
fn sampled_ages(trajectory: &Trajectory, step: u32) -> Vec<u32> {
    let mut ages: Vec<u32> = trajectory
        .iter()
        .map(|p| p.age)
        .filter(|age| age % step == 0)
        .collect();
    if let Some(last) = trajectory.final_point()
        && ages.last() != Some(&last.age)
    {
        ages.push(last.age);
    }
    ages
}

pub fn projection_report(title: &str, comparison: &TrajectoryComparison, step: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    if comparison.simulated.is_empty() {
        let _ = writeln!(out, "  Target age is not after the current age; nothing to project.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>5}  {:>16}  {:>16}  {:>14}",
        "Age", "Baseline", "With events", "Difference"
    );
    for age in sampled_ages(&comparison.simulated, step.max(1)) {
        let baseline = comparison.baseline.net_worth_at(age).unwrap_or(0.0);
        let simulated = comparison.simulated.net_worth_at(age).unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:>5}  {:>16}  {:>16}  {:>14}",
            age,
            format_currency(baseline),
            format_currency(simulated),
            format_signed_currency(simulated - baseline)
        );
    }
    out
}

/// Injected events in ledger order with the age each one lands at
pub fn events_report<'a>(
    events: impl IntoIterator<Item = &'a InjectedEvent>,
    current_age: u32,
) -> String {
    let mut out = String::new();
    for injected in events {
        let name = injected
            .event
            .label
            .as_deref()
            .unwrap_or(injected.event.id.0.as_str());
        let _ = writeln!(
            out,
            "  age {:>3}  {:>14}  {name}",
            injected.landing_age(current_age),
            format_signed_currency(injected.impact())
        );
    }
    out
}

pub fn retirement_report(impact: &RetirementImpact, target_net_worth: f64) -> String {
    let describe = |age: u32, reached: bool| {
        if reached {
            format!("age {age}")
        } else {
            format!("not reached by age {age}")
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "Retirement target: {}", format_currency(target_net_worth));
    let _ = writeln!(
        out,
        "  Baseline:    {}",
        describe(impact.baseline_age, impact.baseline_reached)
    );
    let _ = writeln!(
        out,
        "  With events: {}",
        describe(impact.simulated_age, impact.simulated_reached)
    );
    let _ = writeln!(out, "  Impact:      {}", format_delay(impact.delay));
    out
}

pub fn monte_carlo_report(
    result: &MonteCarloResult,
    target_age: u32,
    seed: u64,
    step: u32,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Monte Carlo: {} runs (seed {seed})",
        result.completed_runs
    );
    if result.is_partial() {
        let _ = writeln!(
            out,
            "  Cancelled early: {} of {} runs completed",
            result.completed_runs, result.runs
        );
    }
    let _ = writeln!(
        out,
        "  {} probability of reaching {} by age {target_age}",
        format_percentage(result.success_probability),
        format_currency(result.target_net_worth)
    );
    let _ = writeln!(
        out,
        "  Mean final net worth: {}",
        format_currency(result.mean_final_net_worth)
    );
    if let Some(set) = PercentileSet::from_values(&result.final_percentiles) {
        let _ = writeln!(
            out,
            "  Final net worth: {} median, {} to {} (P10-P90)",
            format_currency(set.p50),
            format_currency(set.p10),
            format_currency(set.p90)
        );
    }

    let labels: Vec<String> = result
        .final_percentiles
        .iter()
        .map(|(p, _)| format!("P{:.0}", p * 100.0))
        .collect();
    let _ = write!(out, "{:>5}", "Age");
    for label in &labels {
        let _ = write!(out, "  {label:>14}");
    }
    let _ = writeln!(out);

    let step = step.max(1);
    let last_age = result.bands.last().map(|b| b.age);
    for band in result
        .bands
        .iter()
        .filter(|b| b.age % step == 0 || Some(b.age) == last_age)
    {
        let _ = write!(out, "{:>5}", band.age);
        for (_, value) in &band.percentiles {
            let _ = write!(out, "  {:>14}", format_currency(*value));
        }
        let _ = writeln!(out);
    }
    out
}
