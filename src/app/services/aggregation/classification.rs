//! Threshold classification of monthly and yearly figures

use crate::config::{AddendumThresholds, InStateThresholds, RoadwayThresholds};
use crate::constants::narratives;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative tag attached to a narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Bad,
    Neutral,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Good => "good",
            Tone::Bad => "bad",
            Tone::Neutral => "neutral",
        })
    }
}

/// Narrative text with its tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub tone: Tone,
    pub message: String,
}

impl Insight {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Roadway month: late share at or above `late_high` is bad, at or below `late_low` good
pub fn classify_roadway_month(late_pct: f64, thresholds: &RoadwayThresholds) -> Insight {
    if late_pct >= thresholds.late_high {
        Insight::new(Tone::Bad, narratives::ROADWAY_HIGH_RISK)
    } else if late_pct <= thresholds.late_low {
        Insight::new(Tone::Good, narratives::ROADWAY_ON_TRACK)
    } else {
        Insight::new(Tone::Neutral, narratives::ROADWAY_MIXED)
    }
}

/// Addendum month: the early rule is checked before the final-week rule
pub fn classify_addendum_month(
    early_pct: f64,
    late_week_pct: f64,
    thresholds: &AddendumThresholds,
) -> Insight {
    if early_pct >= thresholds.early_good {
        Insight::new(Tone::Good, narratives::ADDENDUM_EARLY)
    } else if late_week_pct >= thresholds.late_bad {
        Insight::new(Tone::Bad, narratives::ADDENDUM_LATE)
    } else {
        Insight::new(Tone::Neutral, narratives::ADDENDUM_MIXED)
    }
}

/// In-state year: a dollar share below the majority threshold is bad
pub fn classify_instate_share(share_by_amount: f64, thresholds: &InStateThresholds) -> Insight {
    if share_by_amount < thresholds.majority_share {
        Insight::new(Tone::Bad, narratives::INSTATE_LEAVING)
    } else {
        Insight::new(Tone::Good, narratives::INSTATE_STAYING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadway_thresholds_are_inclusive() {
        let t = RoadwayThresholds::default();
        assert_eq!(classify_roadway_month(50.0, &t).tone, Tone::Bad);
        assert_eq!(classify_roadway_month(49.9, &t).tone, Tone::Neutral);
        assert_eq!(classify_roadway_month(20.0, &t).tone, Tone::Good);
        assert_eq!(classify_roadway_month(20.1, &t).tone, Tone::Neutral);
        assert_eq!(
            classify_roadway_month(0.0, &t).message,
            narratives::ROADWAY_ON_TRACK
        );
    }

    #[test]
    fn test_addendum_early_rule_takes_precedence() {
        let t = AddendumThresholds::default();
        assert_eq!(classify_addendum_month(70.0, 80.0, &t).tone, Tone::Good);
        assert_eq!(classify_addendum_month(30.0, 60.0, &t).tone, Tone::Bad);
        assert_eq!(classify_addendum_month(50.0, 50.0, &t).tone, Tone::Neutral);
    }

    #[test]
    fn test_instate_share_classification() {
        let t = InStateThresholds::default();
        assert_eq!(classify_instate_share(49.99, &t).tone, Tone::Bad);
        assert_eq!(classify_instate_share(50.0, &t).tone, Tone::Good);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = RoadwayThresholds {
            late_high: 30.0,
            late_low: 10.0,
        };
        assert_eq!(classify_roadway_month(35.0, &t).tone, Tone::Bad);
        assert_eq!(classify_roadway_month(15.0, &t).tone, Tone::Neutral);
    }
}
