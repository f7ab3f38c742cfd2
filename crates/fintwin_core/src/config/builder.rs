//! Fluent builder for scenarios
//!
//! ```ignore
//! use fintwin_core::{LifeEvent, ScenarioBuilder};
//!
//! let scenario = ScenarioBuilder::new()
//!     .current_age(30)
//!     .net_worth(50_000.0)
//!     .return_rate(0.07)
//!     .contribution(20_000.0)
//!     .event(LifeEvent::new("home", -60_000.0).with_category("housing"), 5)
//!     .build()?;
//! ```

use crate::error::{EngineError, Result};
use crate::ledger::EventLedger;
use crate::model::{LifeEvent, Profile};
use crate::scenario::Scenario;

#[derive(Debug, Clone, Copy)]
enum Placement {
    Offset(u32),
    Age(u32),
}

#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    profile: Profile,
    events: Vec<(LifeEvent, Placement)>,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: Profile::new(30, 0.0, 0.07, 0.0),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn current_age(mut self, age: u32) -> Self {
        self.profile.current_age = age;
        self
    }

    #[must_use]
    pub fn net_worth(mut self, amount: f64) -> Self {
        self.profile.initial_net_worth = amount;
        self
    }

    #[must_use]
    pub fn return_rate(mut self, rate: f64) -> Self {
        self.profile.annual_return_rate = rate;
        self
    }

    #[must_use]
    pub fn contribution(mut self, amount: f64) -> Self {
        self.profile.annual_contribution = amount;
        self
    }

    /// Inject `event` at `year` years after the current age
    #[must_use]
    pub fn event(mut self, event: LifeEvent, year: u32) -> Self {
        self.events.push((event, Placement::Offset(year)));
        self
    }

    /// Inject `event` at an absolute age. `build` rejects ages before the current age.
    #[must_use]
    pub fn event_at_age(mut self, event: LifeEvent, age: u32) -> Self {
        self.events.push((event, Placement::Age(age)));
        self
    }

    /// Validate the inputs and assemble the scenario.
    pub fn build(self) -> Result<Scenario> {
        self.profile.validate()?;
        let mut ledger = EventLedger::new();
        for (event, placement) in self.events {
            let year = match placement {
                Placement::Offset(year) => year,
                Placement::Age(age) if age < self.profile.current_age => {
                    return Err(EngineError::InvalidEventPlacement {
                        age,
                        current_age: self.profile.current_age,
                    });
                }
                Placement::Age(age) => age - self.profile.current_age,
            };
            ledger.add_event(event, year);
        }
        ledger.validate()?;
        Ok(Scenario::with_ledger(self.profile, ledger))
    }
}
