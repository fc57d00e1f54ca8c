use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Where a lead came from. Fixed CRM vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "Internet Lead")]
    InternetLead,
    #[serde(rename = "Client Referral")]
    ClientReferral,
    LinkedIn,
    Networking,
    #[serde(rename = "COI Referral")]
    CoiReferral,
    Advisor,
    Other,
}

impl LeadSource {
    pub const ALL: [LeadSource; 8] = [
        LeadSource::Tv,
        LeadSource::InternetLead,
        LeadSource::ClientReferral,
        LeadSource::LinkedIn,
        LeadSource::Networking,
        LeadSource::CoiReferral,
        LeadSource::Advisor,
        LeadSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Tv => "TV",
            LeadSource::InternetLead => "Internet Lead",
            LeadSource::ClientReferral => "Client Referral",
            LeadSource::LinkedIn => "LinkedIn",
            LeadSource::Networking => "Networking",
            LeadSource::CoiReferral => "COI Referral",
            LeadSource::Advisor => "Advisor",
            LeadSource::Other => "Other",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = anyhow::Error;

    /// Exact, case-sensitive match against the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown lead source: {}", s))
    }
}

/// Interest category captured on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Retirement Planning")]
    RetirementPlanning,
    #[serde(rename = "Estate Planning")]
    EstatePlanning,
    #[serde(rename = "Investment Review")]
    InvestmentReview,
    #[serde(rename = "Tax Planning")]
    TaxPlanning,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::RetirementPlanning => "Retirement Planning",
            Topic::EstatePlanning => "Estate Planning",
            Topic::InvestmentReview => "Investment Review",
            Topic::TaxPlanning => "Tax Planning",
            Topic::GeneralInquiry => "General Inquiry",
        };
        f.write_str(s)
    }
}

/// Lead temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Hot,
    Warm,
    Cool,
}

impl Segment {
    pub const HOT_THRESHOLD: u8 = 80;
    pub const WARM_THRESHOLD: u8 = 60;

    /// Segment implied by a score alone (hot >= 80, warm >= 60, otherwise cool).
    /// Independent of the segment stored on a lead.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::HOT_THRESHOLD {
            Segment::Hot
        } else if score >= Self::WARM_THRESHOLD {
            Segment::Warm
        } else {
            Segment::Cool
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Segment::Hot => "Hot",
            Segment::Warm => "Warm",
            Segment::Cool => "Cool",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Segment::Hot => "hot",
            Segment::Warm => "warm",
            Segment::Cool => "cool",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionMethod {
    TimeWindow,
    GeoMatch,
}

impl fmt::Display for AttributionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributionMethod::TimeWindow => f.write_str("Time Window"),
            AttributionMethod::GeoMatch => f.write_str("Geo Match"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceLevel::High
        } else if confidence >= 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => f.write_str("High"),
            ConfidenceLevel::Medium => f.write_str("Medium"),
            ConfidenceLevel::Low => f.write_str("Low"),
        }
    }
}

/// How strongly a lead is credited to a TV spot.
/// Confidence and method only ever travel together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvAttribution {
    pub confidence: f64, // 0.0..=1.0
    pub method: AttributionMethod,
}

impl TvAttribution {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    /// Confidence as a whole percentage, e.g. 0.92 -> 92
    pub fn percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// A single sales contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub score: u8, // 0..=100, checked by data::validate_dataset
    pub source: LeadSource,
    pub state: String, // region code, e.g. "SC"
    pub topic: Topic,
    pub created_at: NaiveDate,
    pub status: String, // pipeline stage label
    pub attributed_to_tv: bool,
    pub advisor: String,
    pub segment: Segment,
    pub dma: String,
    pub time_since_spot: String, // "12 min", "2 hours" or "N/A"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_attribution: Option<TvAttribution>,
}

impl Lead {
    /// Parse `time_since_spot` into a duration.
    /// Returns None for "N/A" or anything humantime can't read.
    pub fn elapsed_since_spot(&self) -> Option<Duration> {
        parse_elapsed(&self.time_since_spot)
    }

    /// One-line explanation of how the TV credit was assigned
    pub fn attribution_summary(&self) -> Option<String> {
        self.tv_attribution.map(|attribution| match attribution.method {
            AttributionMethod::TimeWindow => format!(
                "Arrived {} after TV spot in {}",
                self.time_since_spot, self.dma
            ),
            AttributionMethod::GeoMatch => {
                format!("Located in {}, no direct time correlation", self.dma)
            }
        })
    }
}

/// Parse a human elapsed-time string such as "12 min" or "2 hours".
pub fn parse_elapsed(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return None;
    }
    // humantime wants "12min", not "12 min"
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    humantime::parse_duration(&compact).ok()
}
