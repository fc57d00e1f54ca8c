use crate::leads::{Lead, LeadSource, Segment, Topic};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Timing,
    Geo,
    Source,
    Intent,
    Behavior,
    Qualification,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleCategory::Timing => "timing",
            RuleCategory::Geo => "geo",
            RuleCategory::Source => "source",
            RuleCategory::Intent => "intent",
            RuleCategory::Behavior => "behavior",
            RuleCategory::Qualification => "qualification",
        };
        f.write_str(s)
    }
}

/// A weighted factor used to explain a lead's score.
///
/// Timing and intent rules are told apart by their `factor` text:
/// "15min" / "4hr" for timing, "Retirement" / "Estate" for intent.
/// Renaming a factor without keeping those markers deactivates the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub factor: String,
    pub weight: u32,
    pub category: RuleCategory,
}

/// A rule paired with whether it applies to a particular lead
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicableRule<'a> {
    pub rule: &'a ScoringRule,
    pub active: bool,
    /// Weight as a fraction of the heaviest rule's weight, for breakdown bars
    pub relative_weight: f64,
}

/// Score above which a lead counts as qualified
pub const QUALIFIED_SCORE: u8 = Segment::HOT_THRESHOLD;

/// Evaluate every rule against `lead`. All rules are checked independently;
/// this explains the score already on the lead, it never computes one.
pub fn compute_applicable_rules<'a>(
    lead: &Lead,
    rules: &'a [ScoringRule],
    home_dma: &str,
) -> Vec<ApplicableRule<'a>> {
    let max_weight = rules.iter().map(|r| r.weight).max().unwrap_or(0);

    rules
        .iter()
        .map(|rule| ApplicableRule {
            rule,
            active: is_rule_active(rule, lead, home_dma),
            relative_weight: if max_weight > 0 {
                rule.weight as f64 / max_weight as f64
            } else {
                0.0
            },
        })
        .collect()
}

fn is_rule_active(rule: &ScoringRule, lead: &Lead, home_dma: &str) -> bool {
    match rule.category {
        RuleCategory::Timing => {
            lead.attributed_to_tv
                && ((rule.factor.contains("15min") && lead.time_since_spot.contains("min"))
                    || rule.factor.contains("4hr"))
        }
        RuleCategory::Geo => lead.dma == home_dma,
        RuleCategory::Source => lead.source == LeadSource::Tv,
        RuleCategory::Intent => {
            (rule.factor.contains("Retirement") && lead.topic == Topic::RetirementPlanning)
                || (rule.factor.contains("Estate") && lead.topic == Topic::EstatePlanning)
        }
        RuleCategory::Behavior => lead.attributed_to_tv,
        RuleCategory::Qualification => lead.score >= QUALIFIED_SCORE,
    }
}
