//! A simulation session: one profile plus the events injected into it
//!
//! `Scenario` holds the inputs a front end edits between recomputes. Every
//! query runs a fresh projection over the current profile and ledger.

use rand::Rng;

use crate::error::Result;
use crate::ledger::EventLedger;
use crate::model::{
    InjectedEvent, InstanceId, LifeEvent, MonteCarloResult, Profile, RetirementImpact,
    RetirementSearch, Trajectory, TrajectoryComparison,
};
use crate::monte_carlo::{MonteCarloConfig, simulate};
use crate::projection::{Variant, compare, project, project_trajectory, project_variant};
use crate::retirement::{calculate_retirement_impact, search_retirement_age};

#[derive(Debug, Clone)]
pub struct Scenario {
    profile: Profile,
    ledger: EventLedger,
}

impl Scenario {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ledger: EventLedger::new(),
        }
    }

    #[must_use]
    pub fn with_ledger(profile: Profile, ledger: EventLedger) -> Self {
        Self { profile, ledger }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn ledger(&self) -> &EventLedger {
        &self.ledger
    }

    pub fn add_event(&mut self, event: LifeEvent, year: u32) -> InstanceId {
        self.ledger.add_event(event, year)
    }

    pub fn remove_event(&mut self, instance_id: InstanceId) -> Option<InjectedEvent> {
        self.ledger.remove_event(instance_id)
    }

    pub fn clear_events(&mut self) {
        self.ledger.clear_events();
    }

    pub fn events(&self) -> impl Iterator<Item = &InjectedEvent> {
        self.ledger.iter()
    }

    pub fn project(&self, target_age: u32) -> Result<f64> {
        project(&self.profile, &self.ledger, target_age)
    }

    pub fn trajectory(&self, target_age: u32) -> Result<Trajectory> {
        project_trajectory(&self.profile, &self.ledger, target_age)
    }

    pub fn baseline_trajectory(&self, target_age: u32) -> Result<Trajectory> {
        project_variant(&self.profile, &self.ledger, target_age, Variant::Baseline)
    }

    pub fn compare(&self, target_age: u32) -> Result<TrajectoryComparison> {
        compare(&self.profile, &self.ledger, target_age)
    }

    pub fn find_retirement_age(
        &self,
        target_net_worth: f64,
        variant: Variant,
    ) -> Result<RetirementSearch> {
        search_retirement_age(&self.profile, &self.ledger, target_net_worth, variant)
    }

    pub fn calculate_retirement_impact(&self, target_net_worth: f64) -> Result<RetirementImpact> {
        calculate_retirement_impact(&self.profile, &self.ledger, target_net_worth)
    }

    pub fn monte_carlo<R: Rng + ?Sized>(
        &self,
        target_age: u32,
        target_net_worth: f64,
        config: &MonteCarloConfig,
        rng: &mut R,
    ) -> Result<MonteCarloResult> {
        simulate(
            &self.profile,
            &self.ledger,
            target_age,
            target_net_worth,
            config,
            rng,
        )
    }
}
