use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::leads::{Lead, LeadSource};

/// Outcome label that marks a journey as finished
pub const COMPLETED_OUTCOME: &str = "Tier 1 Client";

/// An anonymized example of how a TV lead moved through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub id: String,
    pub source: LeadSource,
    pub created: NaiveDate,
    pub state: String,
    pub outcome: String,
    #[serde(default)]
    pub days_to_meeting: Option<u32>,
    #[serde(default)]
    pub days_to_client: Option<u32>,
    pub touchpoints: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchpointStep<'a> {
    pub label: &'a str,
    pub completed: bool,
}

impl Journey {
    pub fn is_completed(&self) -> bool {
        self.outcome == COMPLETED_OUTCOME
    }

    /// Touchpoints in order. Every step but the last is done; the last one
    /// is only done once the journey reached its final outcome.
    pub fn steps(&self) -> Vec<TouchpointStep<'_>> {
        let last = self.touchpoints.len().saturating_sub(1);
        self.touchpoints
            .iter()
            .enumerate()
            .map(|(i, label)| TouchpointStep {
                label,
                completed: self.is_completed() || i < last,
            })
            .collect()
    }
}

/// Example journey to show alongside a lead: the first one from the same state.
/// Leads without TV attribution never get one.
pub fn find_journey_for_lead<'a>(lead: &Lead, journeys: &'a [Journey]) -> Option<&'a Journey> {
    if !lead.attributed_to_tv {
        return None;
    }
    journeys.iter().find(|journey| journey.state == lead.state)
}
