use crate::data::Dataset;
use crate::error::EngineResult;
use crate::journey::{find_journey_for_lead, Journey};
use crate::leads::{Lead, LeadQuery, QueryResult};
use crate::metrics::{compute_aggregate_metrics, AggregateMetrics};
use crate::scoring::{classify_elapsed, compute_applicable_rules, ApplicableRule, WindowMatch};

/// Read-only view over a dataset. Every call recomputes from the immutable
/// inputs; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LeadQueryEngine {
    dataset: Dataset,
    home_dma: String,
}

/// Everything the detail view of one lead needs
#[derive(Debug, Clone)]
pub struct LeadDetail<'a> {
    pub lead: &'a Lead,
    pub rules: Vec<ApplicableRule<'a>>,
    pub journey: Option<&'a Journey>,
    pub window: Option<WindowMatch<'a>>,
}

impl LeadQueryEngine {
    pub fn new(dataset: Dataset, home_dma: impl Into<String>) -> Self {
        Self {
            dataset,
            home_dma: home_dma.into(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn home_dma(&self) -> &str {
        &self.home_dma
    }

    pub fn leads(&self) -> &[Lead] {
        &self.dataset.leads
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.dataset.leads.iter().find(|lead| lead.id == id)
    }

    pub fn query(&self, query: &LeadQuery) -> QueryResult<'_> {
        query.run(&self.dataset.leads)
    }

    pub fn applicable_rules<'a>(&'a self, lead: &Lead) -> Vec<ApplicableRule<'a>> {
        compute_applicable_rules(lead, &self.dataset.scoring_rules, &self.home_dma)
    }

    pub fn journey_for(&self, lead: &Lead) -> Option<&Journey> {
        find_journey_for_lead(lead, &self.dataset.journeys)
    }

    /// Attribution window for a TV lead's elapsed time, if it parses and falls in one
    pub fn window_for<'a>(&'a self, lead: &Lead) -> Option<WindowMatch<'a>> {
        if !lead.attributed_to_tv {
            return None;
        }
        let elapsed = lead.elapsed_since_spot()?;
        classify_elapsed(elapsed, &self.dataset.attribution_windows)
    }

    pub fn detail(&self, id: &str) -> Option<LeadDetail<'_>> {
        let lead = self.lead(id)?;
        Some(LeadDetail {
            lead,
            rules: self.applicable_rules(lead),
            journey: self.journey_for(lead),
            window: self.window_for(lead),
        })
    }

    /// Metrics over the whole collection, regardless of any active filter
    pub fn metrics(&self) -> EngineResult<AggregateMetrics> {
        compute_aggregate_metrics(&self.dataset.leads)
    }
}
