//! Scenario file format owned by the command-line front end
//!
//! The engine never sees this format. `ScenarioData` is read from YAML and
//! converted into a `fintwin_core::Scenario` before any computation.

pub mod convert;
pub mod scenario_data;
pub mod storage;

pub use convert::DataError;
pub use scenario_data::{EventData, ScenarioData, TargetsData};
pub use storage::load_scenario;
