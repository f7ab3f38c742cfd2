//! The ordered set of events injected into one simulation session
//!
//! Events form a multiset of impacts: adding the same event at the same year
//! twice doubles its effect. Each placement gets its own `InstanceId` so it
//! can be removed on its own.

use crate::error::{EngineError, Result};
use crate::model::{InjectedEvent, InstanceId, LifeEvent};

#[derive(Debug, Clone, Default)]
pub struct EventLedger {
    events: Vec<InjectedEvent>,
    next_instance_id: u64,
}

impl EventLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `event` at `year` (offset from the current age) and return the new instance id.
    ///
    /// Instance ids are never reused within a ledger, even after removal.
    pub fn add_event(&mut self, event: LifeEvent, year: u32) -> InstanceId {
        let instance_id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        self.events.push(InjectedEvent {
            instance_id,
            event,
            year,
        });
        instance_id
    }

    /// Remove exactly the matching instance. Unknown ids are a no-op.
    pub fn remove_event(&mut self, instance_id: InstanceId) -> Option<InjectedEvent> {
        let index = self
            .events
            .iter()
            .position(|e| e.instance_id == instance_id)?;
        Some(self.events.remove(index))
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Events landing at `year`, in insertion order
    pub fn events_at(&self, year: u32) -> impl Iterator<Item = &InjectedEvent> {
        self.events.iter().filter(move |e| e.year == year)
    }

    /// Sum of the impacts landing at `year`
    #[must_use]
    pub fn impact_at(&self, year: u32) -> f64 {
        self.events_at(year).map(InjectedEvent::impact).sum()
    }

    #[must_use]
    pub fn get(&self, instance_id: InstanceId) -> Option<&InjectedEvent> {
        self.events.iter().find(|e| e.instance_id == instance_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InjectedEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every impact must be finite for a projection to stay finite.
    pub fn validate(&self) -> Result<()> {
        match self.events.iter().find(|e| !e.impact().is_finite()) {
            Some(e) => Err(EngineError::InvalidEventImpact {
                instance_id: e.instance_id,
                impact: e.impact(),
            }),
            None => Ok(()),
        }
    }

    /// Per-year impact totals for offsets `0..=years`.
    ///
    /// Sized by the latest event inside the horizon; later offsets read as zero.
    pub(crate) fn schedule(&self, years: u32) -> ImpactSchedule {
        let len = self
            .events
            .iter()
            .map(|e| e.year)
            .filter(|&year| year <= years)
            .max()
            .map_or(0, |year| year as usize + 1);
        let mut impacts = vec![0.0; len];
        for event in &self.events {
            if let Some(slot) = impacts.get_mut(event.year as usize) {
                *slot += event.impact();
            }
        }
        ImpactSchedule { impacts }
    }
}

impl<'a> IntoIterator for &'a EventLedger {
    type Item = &'a InjectedEvent;
    type IntoIter = std::slice::Iter<'a, InjectedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Ledger impacts flattened to one total per year offset.
///
/// Built once per projection so a walk costs O(years + events) instead of
/// scanning the ledger every year.
#[derive(Debug, Clone, Default)]
pub(crate) struct ImpactSchedule {
    impacts: Vec<f64>,
}

impl ImpactSchedule {
    /// Schedule with no impacts, used for baseline walks
    pub(crate) fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn at(&self, year: u32) -> f64 {
        self.impacts.get(year as usize).copied().unwrap_or(0.0)
    }
}
