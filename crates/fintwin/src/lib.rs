//! Command-line front end for the fintwin projection engine
//!
//! Loads a YAML scenario, runs one of the engine queries and renders the
//! result as a text report or JSON.

pub mod data;
pub mod logging;
pub mod report;
pub mod util;

pub use data::{DataError, ScenarioData, load_scenario};
pub use logging::init_logging;
