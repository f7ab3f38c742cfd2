//! Identifiers for ledger entities
//!
//! A `LifeEventId` names a kind of event chosen by the caller, while an
//! `InstanceId` names one placement of that event inside a ledger.

use serde::{Deserialize, Serialize};

/// Stable identifier for a life event definition
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LifeEventId(pub String);

impl From<&str> for LifeEventId {
    fn from(value: &str) -> Self {
        LifeEventId(value.to_string())
    }
}

impl From<String> for LifeEventId {
    fn from(value: String) -> Self {
        LifeEventId(value)
    }
}

/// Unique identifier for one injected event within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);
