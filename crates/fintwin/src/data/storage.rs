//! Reading scenario files

use std::fs;
use std::path::Path;

use super::convert::DataError;
use super::scenario_data::ScenarioData;

pub fn load_scenario(path: &Path) -> Result<ScenarioData, DataError> {
    let content = fs::read_to_string(path)
        .map_err(|e| DataError::Io(format!("{}: {e}", path.display())))?;
    let data = ScenarioData::from_yaml(&content)
        .map_err(|e| DataError::Parse(format!("{}: {e}", path.display())))?;
    tracing::debug!(
        path = %path.display(),
        events = data.events.len(),
        "Loaded scenario"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TargetsData;
    use fintwin_core::{MonteCarloConfig, Profile};

    #[test]
    fn test_load_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.yaml");
        fs::write(
            &path,
            "name: plan\nprofile:\n  current_age: 35\n  initial_net_worth: 120000.0\n  \
             annual_return_rate: 0.06\n  annual_contribution: 18000.0\nmonte_carlo:\n  runs: 500\n",
        )
        .unwrap();

        let loaded = load_scenario(&path).unwrap();
        assert_eq!(
            loaded,
            ScenarioData {
                name: Some("plan".to_string()),
                profile: Profile::new(35, 120_000.0, 0.06, 18_000.0),
                targets: TargetsData::default(),
                events: vec![],
                monte_carlo: MonteCarloConfig::default().with_runs(500),
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scenario(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "profile: [not, a, profile]").unwrap();
        assert!(matches!(load_scenario(&path), Err(DataError::Parse(_))));
    }
}
