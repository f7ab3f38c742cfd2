use fintwin_core::{EngineError, LifeEvent, Scenario, ScenarioBuilder};

use super::scenario_data::{EventData, ScenarioData};

/// Error types for loading and converting scenario files
#[derive(Debug)]
pub enum DataError {
    Io(String),
    Parse(String),
    EventPlacement(String),
    Engine(EngineError),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "IO error: {msg}"),
            DataError::Parse(msg) => write!(f, "Parse error: {msg}"),
            DataError::EventPlacement(id) => {
                write!(f, "Event '{id}' must set exactly one of `year` or `age`")
            }
            DataError::Engine(e) => write!(f, "Invalid scenario: {e}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for DataError {
    fn from(e: EngineError) -> Self {
        DataError::Engine(e)
    }
}

fn to_life_event(data: &EventData) -> LifeEvent {
    let mut event = LifeEvent::new(data.id.as_str(), data.impact);
    if let Some(label) = &data.label {
        event = event.with_label(label.as_str());
    }
    if let Some(category) = &data.category {
        event = event.with_category(category.as_str());
    }
    event
}

impl ScenarioData {
    /// Build the engine session described by this file.
    pub fn to_scenario(&self) -> Result<Scenario, DataError> {
        let profile = self.profile;
        let mut builder = ScenarioBuilder::new()
            .current_age(profile.current_age)
            .net_worth(profile.initial_net_worth)
            .return_rate(profile.annual_return_rate)
            .contribution(profile.annual_contribution);

        for data in &self.events {
            let event = to_life_event(data);
            builder = match (data.year, data.age) {
                (Some(year), None) => builder.event(event, year),
                (None, Some(age)) => builder.event_at_age(event, age),
                _ => return Err(DataError::EventPlacement(data.id.clone())),
            };
        }

        Ok(builder.build()?)
    }
}
