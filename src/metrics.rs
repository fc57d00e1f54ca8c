use crate::error::{EngineResult, QueryError};
use crate::leads::{Lead, Segment};

/// Summary counters for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateMetrics {
    pub hot_count: usize,
    pub avg_score: u32,
    pub total: usize,
    pub tv_attributed: usize,
}

/// Reduce the full (unfiltered) lead collection.
///
/// # Errors
///
/// `QueryError::InvalidAggregation` for an empty collection, since the mean is undefined.
pub fn compute_aggregate_metrics(leads: &[Lead]) -> EngineResult<AggregateMetrics> {
    Ok(AggregateMetrics {
        hot_count: leads
            .iter()
            .filter(|l| l.score >= Segment::HOT_THRESHOLD)
            .count(),
        avg_score: mean_score(leads)?,
        total: leads.len(),
        tv_attributed: leads.iter().filter(|l| l.attributed_to_tv).count(),
    })
}

/// Mean score rounded to the nearest integer, halves rounding up
pub fn mean_score(leads: &[Lead]) -> EngineResult<u32> {
    if leads.is_empty() {
        return Err(QueryError::InvalidAggregation {
            metric: "mean score",
        });
    }
    let sum: u64 = leads.iter().map(|l| l.score as u64).sum();
    Ok((sum as f64 / leads.len() as f64).round() as u32)
}
