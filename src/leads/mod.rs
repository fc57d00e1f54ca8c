pub mod filter;
pub mod query;
pub mod sort;
pub mod types;

pub use filter::{filter_leads, SegmentFilter, SourceFilter};
pub use query::{LeadQuery, QueryResult};
pub use sort::{sort_leads, SortBy};
pub use types::{
    parse_elapsed, AttributionMethod, ConfidenceLevel, Lead, LeadSource, Segment, Topic,
    TvAttribution,
};
