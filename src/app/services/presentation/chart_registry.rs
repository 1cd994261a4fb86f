//! Registry of bound chart payloads
//!
//! Owned by the session and keyed by [`ChartId`]. The first bind of an id
//! creates the chart; later binds replace the payload (last write wins).

use super::charts::{ChartData, ChartId};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// What a bind did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindOutcome {
    /// First payload for this chart
    Created,
    /// Payload replaced with different data
    Updated,
    /// Payload identical to the one already bound
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    charts: BTreeMap<ChartId, ChartData>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a payload to a chart, creating it on first use
    pub fn bind(&mut self, id: ChartId, data: ChartData) -> BindOutcome {
        let outcome = match self.charts.get(&id) {
            None => BindOutcome::Created,
            Some(existing) if *existing == data => BindOutcome::Unchanged,
            Some(_) => BindOutcome::Updated,
        };
        trace!("chart {:?}: {:?}", id, outcome);
        self.charts.insert(id, data);
        outcome
    }

    pub fn get(&self, id: ChartId) -> Option<&ChartData> {
        self.charts.get(&id)
    }

    pub fn contains(&self, id: ChartId) -> bool {
        self.charts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Bound charts in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (ChartId, &ChartData)> {
        self.charts.iter().map(|(id, data)| (*id, data))
    }

    /// Snapshot of every bound payload
    pub fn snapshot(&self) -> BTreeMap<ChartId, ChartData> {
        self.charts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::presentation::charts::Series;

    fn chart(value: f64) -> ChartData {
        ChartData::new(["x"], vec![Series::dense("s", [value])])
    }

    #[test]
    fn test_bind_creates_then_updates() {
        let mut registry = ChartRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.bind(ChartId::RoadwayTrend, chart(1.0)), BindOutcome::Created);
        assert_eq!(registry.bind(ChartId::RoadwayTrend, chart(1.0)), BindOutcome::Unchanged);
        assert_eq!(registry.bind(ChartId::RoadwayTrend, chart(2.0)), BindOutcome::Updated);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ChartId::RoadwayTrend).map(|c| c.datasets[0].values[0]),
            Some(Some(2.0))
        );
        assert!(!registry.contains(ChartId::AddendumMonth));
    }

    #[test]
    fn test_iter_in_identifier_order() {
        let mut registry = ChartRegistry::new();
        registry.bind(ChartId::AddendumMonth, chart(1.0));
        registry.bind(ChartId::RoadwayTiming, chart(1.0));

        let ids: Vec<ChartId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![ChartId::RoadwayTiming, ChartId::AddendumMonth]);
    }
}
