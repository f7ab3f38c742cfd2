use fintwin_core::{MonteCarloConfig, Profile};
use serde::Deserialize;

fn default_target_age() -> u32 {
    65
}

fn default_target_net_worth() -> f64 {
    1_000_000.0
}

/// Goals the reports measure against
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TargetsData {
    #[serde(default = "default_target_age")]
    pub target_age: u32,
    #[serde(default = "default_target_net_worth")]
    pub target_net_worth: f64,
}

impl Default for TargetsData {
    fn default() -> Self {
        Self {
            target_age: default_target_age(),
            target_net_worth: default_target_net_worth(),
        }
    }
}

/// One event entry; placed by `year` offset or by absolute `age`, not both
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventData {
    pub id: String,
    pub impact: f64,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioData {
    #[serde(default)]
    pub name: Option<String>,
    pub profile: Profile,
    #[serde(default)]
    pub targets: TargetsData,
    #[serde(default)]
    pub events: Vec<EventData>,
    #[serde(default)]
    pub monte_carlo: MonteCarloConfig,
}

impl ScenarioData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintwin_core::ReturnNoise;

    const SAMPLE: &str = r#"
name: First home
profile:
  current_age: 30
  initial_net_worth: 50000.0
  annual_return_rate: 0.07
  annual_contribution: 20000.0
targets:
  target_net_worth: 1500000.0
events:
  - id: home
    label: Buy a house
    category: housing
    impact: -60000.0
    year: 5
  - id: inheritance
    impact: 50000.0
    age: 45
monte_carlo:
  runs: 2000
  noise:
    type: StudentT
    scale: 0.12
    df: 5.0
"#;

    #[test]
    fn test_parse_full_scenario() {
        let data = ScenarioData::from_yaml(SAMPLE).unwrap();
        assert_eq!(data.name.as_deref(), Some("First home"));
        assert_eq!(data.profile.current_age, 30);
        assert_eq!(data.profile.annual_contribution, 20_000.0);
        assert_eq!(data.targets.target_age, 65);
        assert_eq!(data.targets.target_net_worth, 1_500_000.0);
        assert_eq!(data.events.len(), 2);
        assert_eq!(data.events[0].year, Some(5));
        assert_eq!(data.events[1].age, Some(45));
        assert_eq!(data.monte_carlo.runs, 2_000);
        assert_eq!(
            data.monte_carlo.noise,
            ReturnNoise::StudentT {
                scale: 0.12,
                df: 5.0
            }
        );
        assert_eq!(data.monte_carlo.percentiles, vec![0.10, 0.50, 0.90]);
    }

    #[test]
    fn test_minimal_scenario_uses_defaults() {
        let yaml = r#"
profile:
  current_age: 40
  initial_net_worth: 0.0
  annual_return_rate: 0.05
  annual_contribution: 12000.0
"#;
        let data = ScenarioData::from_yaml(yaml).unwrap();
        assert!(data.events.is_empty());
        assert_eq!(data.targets, TargetsData::default());
        assert_eq!(data.monte_carlo, MonteCarloConfig::default());
    }
}
