use std::collections::HashSet;

use super::Dataset;

/// Validate a dataset at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_dataset(dataset: &Dataset) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Leads
    let mut seen_ids = HashSet::new();
    for (i, lead) in dataset.leads.iter().enumerate() {
        if !seen_ids.insert(lead.id.as_str()) {
            errors.push(format!("leads[{}].id: duplicate id '{}'", i, lead.id));
        }
        if lead.score > 100 {
            errors.push(format!(
                "leads[{}].score: {} is outside 0-100",
                i, lead.score
            ));
        }
        if let Some(attribution) = lead.tv_attribution {
            if !(0.0..=1.0).contains(&attribution.confidence) {
                errors.push(format!(
                    "leads[{}].tv_attribution.confidence: {} is outside 0-1",
                    i, attribution.confidence
                ));
            }
            if !lead.attributed_to_tv {
                errors.push(format!(
                    "leads[{}].tv_attribution: present but attributed_to_tv is false",
                    i
                ));
            }
        }
    }

    // Scoring rules
    for (i, rule) in dataset.scoring_rules.iter().enumerate() {
        if rule.weight == 0 {
            errors.push(format!(
                "scoring_rules[{}].weight: must be positive ('{}')",
                i, rule.factor
            ));
        }
    }

    // Attribution windows
    let mut previous = None;
    for (i, window) in dataset.attribution_windows.iter().enumerate() {
        if window.weight > 100 {
            errors.push(format!(
                "attribution_windows[{}].weight: {} is outside 0-100",
                i, window.weight
            ));
        }
        let duration = window.duration();
        if duration.is_zero() {
            errors.push(format!(
                "attribution_windows[{}].duration_value: must be positive",
                i
            ));
        }
        if let Some(prev) = previous {
            if duration <= prev {
                errors.push(format!(
                    "attribution_windows[{}]: '{}' must be longer than the window before it",
                    i, window.label
                ));
            }
        }
        previous = Some(duration);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
