use super::filter::{filter_leads, SegmentFilter, SourceFilter};
use super::sort::{sort_leads, SortBy};
use super::types::Lead;

/// The filter and sort controls of the lead list.
/// `LeadQuery::default()` is the cleared state: all segments, all sources, best score first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadQuery {
    pub segment: SegmentFilter,
    pub source: SourceFilter,
    pub sort_by: SortBy,
}

/// Ordered matches plus the size of the collection they were drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub leads: Vec<&'a Lead>,
    pub total: usize,
}

impl QueryResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// "Showing 2 of 5 leads"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} leads", self.leads.len(), self.total)
    }
}

impl LeadQuery {
    pub fn new(segment: SegmentFilter, source: SourceFilter, sort_by: SortBy) -> Self {
        Self {
            segment,
            source,
            sort_by,
        }
    }

    /// True when any filter narrows the result. Sort order alone doesn't count.
    pub fn is_filtered(&self) -> bool {
        self.segment != SegmentFilter::All || self.source != SourceFilter::All
    }

    /// Filter, then sort
    pub fn run<'a>(&self, leads: &'a [Lead]) -> QueryResult<'a> {
        let filtered = filter_leads(leads, self.segment, self.source);
        tracing::debug!(
            segment = %self.segment,
            source = %self.source,
            sort = %self.sort_by,
            matched = filtered.len(),
            total = leads.len(),
            "Ran lead query"
        );
        QueryResult {
            leads: sort_leads(&filtered, self.sort_by),
            total: leads.len(),
        }
    }
}
