use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// The financial starting point of a projection.
///
/// A profile is never mutated by the engine. Callers build a new one when any
/// field changes and recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub current_age: u32,
    pub initial_net_worth: f64,
    /// Yearly return as a fraction (0.07 is 7%)
    pub annual_return_rate: f64,
    /// Added after the return each year; negative values model a net outflow
    pub annual_contribution: f64,
}

impl Profile {
    #[must_use]
    pub fn new(
        current_age: u32,
        initial_net_worth: f64,
        annual_return_rate: f64,
        annual_contribution: f64,
    ) -> Self {
        Self {
            current_age,
            initial_net_worth,
            annual_return_rate,
            annual_contribution,
        }
    }

    /// Reject profiles whose numbers would turn a projection into NaN or infinity.
    ///
    /// A return rate of -1.0 (total loss) is valid.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("initial_net_worth", self.initial_net_worth),
            ("annual_return_rate", self.annual_return_rate),
            ("annual_contribution", self.annual_contribution),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidProfile {
                    field,
                    value,
                    reason: "must be a finite number",
                });
            }
        }
        Ok(())
    }

    /// Number of whole years between the current age and `target_age`, zero if
    /// the target is not in the future.
    #[must_use]
    pub fn years_until(&self, target_age: u32) -> u32 {
        target_age.saturating_sub(self.current_age)
    }
}
