pub mod rules;
pub mod windows;

pub use rules::{compute_applicable_rules, ApplicableRule, RuleCategory, ScoringRule, QUALIFIED_SCORE};
pub use windows::{classify_elapsed, AttributionWindow, DurationUnit, WindowMatch};
