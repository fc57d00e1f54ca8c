use super::types::{Lead, LeadSource, Segment};
use std::fmt;
use std::str::FromStr;

/// Segment filter. Unknown values parse to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    #[default]
    All,
    Only(Segment),
}

impl SegmentFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        match self {
            SegmentFilter::All => true,
            SegmentFilter::Only(segment) => lead.segment == *segment,
        }
    }

    /// Lenient parse: anything other than "hot", "warm" or "cool" means all leads
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "hot" => SegmentFilter::Only(Segment::Hot),
            "warm" => SegmentFilter::Only(Segment::Warm),
            "cool" => SegmentFilter::Only(Segment::Cool),
            "all" => SegmentFilter::All,
            other => {
                tracing::warn!("Unrecognized segment filter '{}', showing all segments", other);
                SegmentFilter::All
            }
        }
    }
}

impl FromStr for SegmentFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SegmentFilter::parse_lenient(s))
    }
}

impl fmt::Display for SegmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentFilter::All => f.write_str("all"),
            SegmentFilter::Only(segment) => write!(f, "{}", segment),
        }
    }
}

/// Source filter. The named groups are not literal source values:
/// `Internet` covers "Internet Lead" and "LinkedIn", `Other` is everything
/// outside TV, Internet Lead, LinkedIn and Client Referral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Internet,
    Referral,
    Other,
    Exact(LeadSource),
}

/// Sources with a dedicated filter group; `SourceFilter::Other` is the complement
const GROUPED_SOURCES: [LeadSource; 4] = [
    LeadSource::Tv,
    LeadSource::InternetLead,
    LeadSource::LinkedIn,
    LeadSource::ClientReferral,
];

impl SourceFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Internet => {
                matches!(lead.source, LeadSource::InternetLead | LeadSource::LinkedIn)
            }
            SourceFilter::Referral => lead.source == LeadSource::ClientReferral,
            SourceFilter::Other => !GROUPED_SOURCES.contains(&lead.source),
            SourceFilter::Exact(source) => lead.source == *source,
        }
    }

    /// Lenient parse. Group names first ("Internet", "Referral", "Other"),
    /// then any literal source name ("TV", "Networking", ...). Anything else
    /// means all sources.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "all" => SourceFilter::All,
            "Internet" => SourceFilter::Internet,
            "Referral" => SourceFilter::Referral,
            "Other" => SourceFilter::Other,
            other => match other.parse::<LeadSource>() {
                Ok(source) => SourceFilter::Exact(source),
                Err(_) => {
                    tracing::warn!("Unrecognized source filter '{}', showing all sources", other);
                    SourceFilter::All
                }
            },
        }
    }
}

impl FromStr for SourceFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SourceFilter::parse_lenient(s))
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFilter::All => f.write_str("all"),
            SourceFilter::Internet => f.write_str("Internet"),
            SourceFilter::Referral => f.write_str("Referral"),
            SourceFilter::Other => f.write_str("Other"),
            SourceFilter::Exact(source) => write!(f, "{}", source),
        }
    }
}

/// Keep leads matching both filters, in input order. The input is untouched.
pub fn filter_leads<'a>(
    leads: &'a [Lead],
    segment: SegmentFilter,
    source: SourceFilter,
) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|lead| segment.matches(lead) && source.matches(lead))
        .collect()
}
