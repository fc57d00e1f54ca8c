//! Built-in anonymized demo dataset. Patterns only, no PII.

use chrono::NaiveDate;

use super::{ClientProfile, Dataset};
use crate::journey::Journey;
use crate::leads::{AttributionMethod, Lead, LeadSource, Segment, Topic, TvAttribution};
use crate::scoring::{AttributionWindow, DurationUnit, RuleCategory, ScoringRule};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid calendar dates")
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        client: sample_client(),
        leads: sample_leads(),
        scoring_rules: sample_scoring_rules(),
        attribution_windows: sample_attribution_windows(),
        journeys: sample_journeys(),
    }
}

pub fn sample_client() -> ClientProfile {
    ClientProfile {
        name: "Market864".to_string(),
        location: "Greenville, SC".to_string(),
        dma_code: 567,
        dma_name: "Greenville-Spartanburg-Asheville-Anderson".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    score: u8,
    source: LeadSource,
    state: &str,
    topic: Topic,
    created_at: NaiveDate,
    status: &str,
    advisor: &str,
    segment: Segment,
    dma: &str,
    time_since_spot: &str,
    tv_attribution: Option<TvAttribution>,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        score,
        source,
        state: state.to_string(),
        topic,
        created_at,
        status: status.to_string(),
        attributed_to_tv: tv_attribution.is_some(),
        advisor: advisor.to_string(),
        segment,
        dma: dma.to_string(),
        time_since_spot: time_since_spot.to_string(),
        tv_attribution,
    }
}

pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead-001",
            "James R.",
            92,
            LeadSource::Tv,
            "SC",
            Topic::RetirementPlanning,
            date(2026, 2, 3),
            "Meeting Scheduled",
            "Michael Giordano",
            Segment::Hot,
            "Greenville DMA",
            "12 min",
            Some(TvAttribution {
                confidence: 0.92,
                method: AttributionMethod::TimeWindow,
            }),
        ),
        lead(
            "lead-002",
            "Patricia M.",
            78,
            LeadSource::InternetLead,
            "SC",
            Topic::EstatePlanning,
            date(2026, 2, 2),
            "Contacted",
            "Brandon Cabaniss",
            Segment::Warm,
            "Greenville DMA",
            "N/A",
            None,
        ),
        lead(
            "lead-003",
            "Robert & Susan L.",
            85,
            LeadSource::ClientReferral,
            "GA",
            Topic::RetirementPlanning,
            date(2026, 2, 1),
            "Meeting Scheduled",
            "Jeremy Strickler",
            Segment::Hot,
            "Atlanta DMA",
            "N/A",
            None,
        ),
        lead(
            "lead-004",
            "Michael T.",
            71,
            LeadSource::Tv,
            "NC",
            Topic::InvestmentReview,
            date(2026, 1, 30),
            "New",
            "Michael Giordano",
            Segment::Warm,
            "Greenville DMA",
            "2 hours",
            Some(TvAttribution {
                confidence: 0.64,
                method: AttributionMethod::TimeWindow,
            }),
        ),
        lead(
            "lead-005",
            "Elizabeth K.",
            65,
            LeadSource::LinkedIn,
            "SC",
            Topic::TaxPlanning,
            date(2026, 1, 28),
            "Contacted",
            "Brandon Cabaniss",
            Segment::Cool,
            "Greenville DMA",
            "N/A",
            None,
        ),
    ]
}

pub fn sample_scoring_rules() -> Vec<ScoringRule> {
    let rule = |factor: &str, weight: u32, category: RuleCategory| ScoringRule {
        factor: factor.to_string(),
        weight,
        category,
    };
    vec![
        rule("TV spot time window (15min)", 40, RuleCategory::Timing),
        rule("TV spot time window (4hr)", 25, RuleCategory::Timing),
        rule("Geographic match (Greenville DMA)", 30, RuleCategory::Geo),
        rule("Source = \"Mike Giordano @ WYFF\"", 35, RuleCategory::Source),
        rule("Topic = Retirement Planning", 25, RuleCategory::Intent),
        rule("Topic = Life Change/Estate", 20, RuleCategory::Intent),
        rule("Direct navigation (no referrer)", 10, RuleCategory::Behavior),
        rule("AUM indicator present", 15, RuleCategory::Qualification),
    ]
}

pub fn sample_attribution_windows() -> Vec<AttributionWindow> {
    let window = |label: &str, value: u64, unit: DurationUnit, weight: u8, decays: bool| {
        AttributionWindow {
            label: label.to_string(),
            duration_value: value,
            duration_unit: unit,
            weight,
            decays,
        }
    };
    vec![
        window("Immediate Response", 15, DurationUnit::Minutes, 40, false),
        window("Same Evening", 4, DurationUnit::Hours, 25, false),
        window("Next Day", 24, DurationUnit::Hours, 15, false),
        window("Within Week", 7, DurationUnit::Days, 10, true),
    ]
}

pub fn sample_journeys() -> Vec<Journey> {
    let journey = |id: &str,
                   created: NaiveDate,
                   state: &str,
                   outcome: &str,
                   days: Option<(u32, u32)>,
                   touchpoints: &[&str]| Journey {
        id: id.to_string(),
        source: LeadSource::Tv,
        created,
        state: state.to_string(),
        outcome: outcome.to_string(),
        days_to_meeting: days.map(|(meeting, _)| meeting),
        days_to_client: days.map(|(_, client)| client),
        touchpoints: touchpoints.iter().map(|t| t.to_string()).collect(),
    };
    vec![
        journey(
            "tv-001",
            date(2024, 10, 9),
            "SC",
            "Tier 1 Client",
            Some((3, 45)),
            &["TV Spot", "Website Visit", "Form Submit", "Call", "Meeting", "Signed"],
        ),
        journey(
            "tv-002",
            date(2024, 10, 9),
            "SC",
            "Tier 1 Client",
            Some((5, 32)),
            &["TV Spot", "Direct Call", "Meeting", "Signed"],
        ),
        journey(
            "tv-003",
            date(2025, 1, 3),
            "NC",
            "Tier 1 Client",
            Some((7, 28)),
            &[
                "TV Spot",
                "Website Visit",
                "Form Submit",
                "Email",
                "Call",
                "Meeting",
                "Signed",
            ],
        ),
        journey(
            "tv-004",
            date(2025, 1, 10),
            "NC",
            "In Progress",
            None,
            &["TV Spot", "Website Visit", "Form Submit"],
        ),
        journey(
            "tv-005",
            date(2025, 5, 13),
            "Unknown",
            "In Progress",
            None,
            &["TV Spot", "Website Visit"],
        ),
    ]
}
