/// Property-based tests using proptest
/// Invariants of filtering, sorting and rule evaluation over arbitrary lead sets
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use lead_attribution::data::sample_scoring_rules;
use lead_attribution::leads::{
    filter_leads, sort_leads, Lead, LeadSource, Segment, SegmentFilter, SortBy, SourceFilter,
    Topic,
};
use lead_attribution::metrics::compute_aggregate_metrics;
use lead_attribution::scoring::{compute_applicable_rules, RuleCategory};

const TOPICS: [Topic; 5] = [
    Topic::RetirementPlanning,
    Topic::EstatePlanning,
    Topic::InvestmentReview,
    Topic::TaxPlanning,
    Topic::GeneralInquiry,
];

const SEGMENTS: [Segment; 3] = [Segment::Hot, Segment::Warm, Segment::Cool];

const DMAS: [&str; 3] = ["Greenville DMA", "Atlanta DMA", "greenville dma"];

const SPOT_TIMES: [&str; 4] = ["12 min", "2 hours", "N/A", "3 days"];

fn arb_lead() -> impl Strategy<Value = Lead> {
    (
        0u8..=100,
        0usize..LeadSource::ALL.len(),
        0usize..TOPICS.len(),
        0usize..SEGMENTS.len(),
        0i64..60,
        any::<bool>(),
        0usize..DMAS.len(),
        0usize..SPOT_TIMES.len(),
    )
        .prop_map(|(score, source, topic, segment, days, tv, dma, spot)| Lead {
            id: String::new(),
            name: "Lead".to_string(),
            score,
            source: LeadSource::ALL[source],
            state: "SC".to_string(),
            topic: TOPICS[topic],
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(days),
            status: "New".to_string(),
            attributed_to_tv: tv,
            advisor: "Advisor".to_string(),
            segment: SEGMENTS[segment],
            dma: DMAS[dma].to_string(),
            time_since_spot: SPOT_TIMES[spot].to_string(),
            tv_attribution: None,
        })
}

/// Leads with unique, position-revealing ids
fn arb_leads() -> impl Strategy<Value = Vec<Lead>> {
    prop::collection::vec(arb_lead(), 0..24).prop_map(|mut leads| {
        for (i, lead) in leads.iter_mut().enumerate() {
            lead.id = format!("lead-{:03}", i);
        }
        leads
    })
}

fn arb_segment_filter() -> impl Strategy<Value = SegmentFilter> {
    prop_oneof![
        Just(SegmentFilter::All),
        Just(SegmentFilter::Only(Segment::Hot)),
        Just(SegmentFilter::Only(Segment::Warm)),
        Just(SegmentFilter::Only(Segment::Cool)),
    ]
}

fn arb_source_filter() -> impl Strategy<Value = SourceFilter> {
    prop_oneof![
        Just(SourceFilter::All),
        Just(SourceFilter::Internet),
        Just(SourceFilter::Referral),
        Just(SourceFilter::Other),
        (0usize..LeadSource::ALL.len()).prop_map(|i| SourceFilter::Exact(LeadSource::ALL[i])),
    ]
}

fn arb_sort() -> impl Strategy<Value = SortBy> {
    (0usize..SortBy::ALL.len()).prop_map(|i| SortBy::ALL[i])
}

fn position(lead: &Lead) -> usize {
    lead.id.trim_start_matches("lead-").parse().unwrap()
}

// Property: filtering is a conjunction of two independent predicates
proptest! {
    #[test]
    fn filter_output_is_subset_satisfying_both(
        leads in arb_leads(),
        segment in arb_segment_filter(),
        source in arb_source_filter(),
    ) {
        let result = filter_leads(&leads, segment, source);

        for lead in &result {
            prop_assert!(segment.matches(lead));
            prop_assert!(source.matches(lead));
        }
        let expected = leads
            .iter()
            .filter(|l| segment.matches(l) && source.matches(l))
            .count();
        prop_assert_eq!(result.len(), expected);

        // input order is preserved
        let positions: Vec<usize> = result.iter().map(|l| position(l)).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filter_is_idempotent(
        leads in arb_leads(),
        segment in arb_segment_filter(),
        source in arb_source_filter(),
    ) {
        let once: Vec<Lead> = filter_leads(&leads, segment, source)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_leads(&once, segment, source);
        prop_assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            prop_assert_eq!(*a, b);
        }
    }

    #[test]
    fn internet_other_and_grouped_sources_partition(leads in arb_leads()) {
        let internet = filter_leads(&leads, SegmentFilter::All, SourceFilter::Internet).len();
        let referral = filter_leads(&leads, SegmentFilter::All, SourceFilter::Referral).len();
        let other = filter_leads(&leads, SegmentFilter::All, SourceFilter::Other).len();
        let tv = filter_leads(&leads, SegmentFilter::All, SourceFilter::Exact(LeadSource::Tv)).len();
        prop_assert_eq!(internet + referral + other + tv, leads.len());
    }
}

// Property: sorting is a stable permutation
proptest! {
    #[test]
    fn sort_is_stable(leads in arb_leads(), sort_by in arb_sort()) {
        let refs: Vec<&Lead> = leads.iter().collect();
        let sorted = sort_leads(&refs, sort_by);
        prop_assert_eq!(sorted.len(), leads.len());

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let tied = match sort_by {
                SortBy::ScoreDesc | SortBy::ScoreAsc => a.score == b.score,
                SortBy::Newest | SortBy::Oldest => a.created_at == b.created_at,
            };
            if tied {
                prop_assert!(position(a) < position(b));
            }
            match sort_by {
                SortBy::ScoreDesc => prop_assert!(a.score >= b.score),
                SortBy::ScoreAsc => prop_assert!(a.score <= b.score),
                SortBy::Newest => prop_assert!(a.created_at >= b.created_at),
                SortBy::Oldest => prop_assert!(a.created_at <= b.created_at),
            }
        }
    }

    #[test]
    fn desc_then_asc_is_ascending(leads in arb_leads()) {
        let refs: Vec<&Lead> = leads.iter().collect();
        let result = sort_leads(&sort_leads(&refs, SortBy::ScoreDesc), SortBy::ScoreAsc);
        prop_assert!(result.windows(2).all(|w| w[0].score <= w[1].score));
    }
}

// Property: rule evaluation is a pure function of the lead
proptest! {
    #[test]
    fn applicable_rules_are_deterministic(lead in arb_lead()) {
        let rules = sample_scoring_rules();
        let first = compute_applicable_rules(&lead, &rules, "Greenville DMA");
        let second = compute_applicable_rules(&lead, &rules, "Greenville DMA");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn geo_active_iff_exact_dma(lead in arb_lead()) {
        let rules = sample_scoring_rules();
        let applied = compute_applicable_rules(&lead, &rules, "Greenville DMA");
        for a in applied.iter().filter(|a| a.rule.category == RuleCategory::Geo) {
            prop_assert_eq!(a.active, lead.dma == "Greenville DMA");
        }
    }

    #[test]
    fn hot_count_never_exceeds_total(leads in arb_leads()) {
        match compute_aggregate_metrics(&leads) {
            Ok(metrics) => {
                prop_assert!(metrics.hot_count <= metrics.total);
                prop_assert!(metrics.avg_score <= 100);
                prop_assert_eq!(metrics.total, leads.len());
            }
            Err(_) => prop_assert!(leads.is_empty()),
        }
    }
}
