//! Life events and their placements on the timeline
//!
//! The engine only ever reads `impact`. Label, category and the metadata bag
//! are carried for callers that display or group events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{InstanceId, LifeEventId};

/// A one-off change to net worth, such as a home purchase or an inheritance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: LifeEventId,
    /// Signed monetary delta applied in the year the event lands
    pub impact: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl LifeEvent {
    pub fn new(id: impl Into<LifeEventId>, impact: f64) -> Self {
        Self {
            id: id.into(),
            impact,
            label: None,
            category: None,
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A `LifeEvent` placed at a year offset from the profile's current age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectedEvent {
    pub instance_id: InstanceId,
    pub event: LifeEvent,
    /// Offset in years from `Profile::current_age`, not a calendar year
    pub year: u32,
}

impl InjectedEvent {
    #[must_use]
    pub fn impact(&self) -> f64 {
        self.event.impact
    }

    /// Age at which this event lands for a profile starting at `current_age`
    #[must_use]
    pub fn landing_age(&self, current_age: u32) -> u32 {
        current_age.saturating_add(self.year)
    }
}
