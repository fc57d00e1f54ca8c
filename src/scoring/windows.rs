use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    fn seconds(&self) -> u64 {
        match self {
            DurationUnit::Minutes => 60,
            DurationUnit::Hours => 60 * 60,
            DurationUnit::Days => 24 * 60 * 60,
        }
    }
}

/// A time bucket after a spot airs within which a response is credited to it.
///
/// Stepwise windows credit their full weight anywhere inside the bucket.
/// Decaying windows fall off linearly from full weight at the previous
/// window's end to zero at their own end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionWindow {
    pub label: String,
    pub duration_value: u64,
    pub duration_unit: DurationUnit,
    pub weight: u8, // 0..=100
    #[serde(default)]
    pub decays: bool,
}

impl AttributionWindow {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_value.saturating_mul(self.duration_unit.seconds()))
    }

    /// Compact form, e.g. "15m", "4h", "7days"
    pub fn format_duration(&self) -> String {
        humantime::format_duration(self.duration()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowMatch<'a> {
    pub window: &'a AttributionWindow,
    pub effective_weight: f64,
}

/// Find the window an elapsed time falls into.
///
/// `windows` must be ordered by ascending duration (see `data::validate_dataset`).
/// A boundary value belongs to the earlier window. Returns None past the last window.
pub fn classify_elapsed(elapsed: Duration, windows: &[AttributionWindow]) -> Option<WindowMatch<'_>> {
    let mut span_start = Duration::ZERO;

    for window in windows {
        let span_end = window.duration();
        if elapsed <= span_end {
            let weight = window.weight as f64;
            let effective_weight = if window.decays && span_end > span_start {
                let remaining = span_end.saturating_sub(elapsed.max(span_start));
                weight * (remaining.as_secs_f64() / (span_end - span_start).as_secs_f64())
            } else {
                weight
            };
            return Some(WindowMatch {
                window,
                effective_weight,
            });
        }
        span_start = span_end;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_attribution_windows;

    fn minutes(n: u64) -> Duration {
        Duration::from_secs(n * 60)
    }

    fn hours(n: u64) -> Duration {
        minutes(n * 60)
    }

    #[test]
    fn test_duration_conversion() {
        let windows = sample_attribution_windows();
        assert_eq!(windows[0].duration(), minutes(15));
        assert_eq!(windows[1].duration(), hours(4));
        assert_eq!(windows[2].duration(), hours(24));
        assert_eq!(windows[3].duration(), hours(24 * 7));
    }

    #[test]
    fn test_format_duration() {
        let windows = sample_attribution_windows();
        assert_eq!(windows[0].format_duration(), "15m");
        assert_eq!(windows[1].format_duration(), "4h");
    }

    #[test]
    fn test_classify_immediate() {
        let windows = sample_attribution_windows();
        let matched = classify_elapsed(minutes(12), &windows).unwrap();
        assert_eq!(matched.window.label, "Immediate Response");
        assert_eq!(matched.effective_weight, 40.0);
    }

    #[test]
    fn test_classify_boundary_belongs_to_earlier_window() {
        let windows = sample_attribution_windows();
        let matched = classify_elapsed(minutes(15), &windows).unwrap();
        assert_eq!(matched.window.label, "Immediate Response");

        let matched = classify_elapsed(minutes(16), &windows).unwrap();
        assert_eq!(matched.window.label, "Same Evening");
        assert_eq!(matched.effective_weight, 25.0);
    }

    #[test]
    fn test_classify_decaying_window() {
        let windows = sample_attribution_windows();
        // week window spans day 1 to day 7; day 4 leaves half of it
        let matched = classify_elapsed(hours(24 * 4), &windows).unwrap();
        assert_eq!(matched.window.label, "Within Week");
        assert!((matched.effective_weight - 5.0).abs() < 1e-9);

        let end = classify_elapsed(hours(24 * 7), &windows).unwrap();
        assert_eq!(end.effective_weight, 0.0);
    }

    #[test]
    fn test_classify_past_last_window() {
        let windows = sample_attribution_windows();
        assert!(classify_elapsed(hours(24 * 8), &windows).is_none());
        assert!(classify_elapsed(minutes(1), &[]).is_none());
    }

    #[test]
    fn test_window_yaml_parse() {
        let yaml = r#"
label: "Same Evening"
duration_value: 4
duration_unit: hours
weight: 25
"#;
        let window: AttributionWindow = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(window.duration(), hours(4));
        assert!(!window.decays);
    }
}
