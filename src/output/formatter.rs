use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::data::ClientProfile;
use crate::engine::LeadDetail;
use crate::journey::Journey;
use crate::leads::{ConfidenceLevel, Lead, LeadQuery, QueryResult, Segment};
use crate::metrics::AggregateMetrics;
use crate::scoring::{ApplicableRule, AttributionWindow, WindowMatch};

/// Width of a full-weight bar in the score breakdown
const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// "TV 92%" badge for attributed leads
pub fn format_confidence_badge(lead: &Lead, use_colors: bool) -> Option<String> {
    let attribution = lead.tv_attribution?;
    let badge = format!("TV {}%", attribution.percent());
    if !use_colors {
        return Some(badge);
    }
    Some(match attribution.level() {
        ConfidenceLevel::High => badge.green().to_string(),
        ConfidenceLevel::Medium => badge.yellow().to_string(),
        ConfidenceLevel::Low => badge.dimmed().to_string(),
    })
}

fn format_score_cell(score: u8, use_colors: bool) -> String {
    let padded = format!("{:>3}", score);
    if !use_colors {
        return padded;
    }
    match Segment::from_score(score) {
        Segment::Hot => padded.green().bold().to_string(),
        Segment::Warm => padded.yellow().to_string(),
        Segment::Cool => padded.dimmed().to_string(),
    }
}

/// Format query results as one line per lead:
/// index, score, name, topic, then source / DMA / time since spot
pub fn format_lead_table(result: &QueryResult, use_colors: bool) -> String {
    if result.is_empty() {
        return "No leads match your filters.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";

    result
        .leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score = format_score_cell(lead.score, use_colors);
            let flame = if lead.segment == Segment::Hot { " *" } else { "" };
            let context = format!(
                "{} \u{2022} {} \u{2022} {} after spot",
                lead.source, lead.dma, lead.time_since_spot
            );
            let context = match term_width {
                // index + score + separators + name column
                Some(width) if width > 60 => truncate(&context, width - 48),
                Some(_) => truncate(&context, 20),
                None => context,
            };
            let badge = format_confidence_badge(lead, use_colors)
                .map(|b| format!("{}{}", separator, b))
                .unwrap_or_default();

            if use_colors {
                format!(
                    "{} {}{}{:<20}{}{:<20}{}{}{}",
                    index_str.dimmed(),
                    score,
                    separator,
                    format!("{}{}", lead.name, flame).bold(),
                    separator,
                    lead.topic.to_string(),
                    separator,
                    context.dimmed(),
                    badge
                )
            } else {
                format!(
                    "{} {}{}{:<20}{}{:<20}{}{}{}",
                    index_str,
                    score,
                    separator,
                    format!("{}{}", lead.name, flame),
                    separator,
                    lead.topic.to_string(),
                    separator,
                    context,
                    badge
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: id, score, name, source, segment, created (no headers, no colors)
pub fn format_tsv(leads: &[&Lead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                lead.id, lead.score, lead.name, lead.source, lead.segment, lead.created_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Showing 2 of 5 leads (segment: hot, source: all, sort: score-desc)"
pub fn format_query_summary(result: &QueryResult, query: &LeadQuery) -> String {
    let mut summary = format!(
        "{} (segment: {}, source: {}, sort: {})",
        result.summary(),
        query.segment,
        query.source,
        query.sort_by
    );
    if query.is_filtered() {
        summary.push_str(" - run without --segment/--source to clear filters");
    }
    summary
}

fn format_bar(rule: &ApplicableRule, use_colors: bool) -> String {
    let filled = (rule.relative_weight * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = format!("{}{}", "\u{2588}".repeat(filled), " ".repeat(BAR_WIDTH - filled));
    if !use_colors {
        return bar;
    }
    if rule.active {
        bar.cyan().to_string()
    } else {
        bar.dimmed().to_string()
    }
}

/// Score breakdown: one bar per rule, active rules marked with '+'
pub fn format_breakdown(rules: &[ApplicableRule], use_colors: bool) -> String {
    rules
        .iter()
        .map(|rule| {
            let marker = if rule.active { "+" } else { " " };
            let factor = truncate(&rule.rule.factor, 36);
            format!(
                "  {} {:<36} {} {:>3}  {}",
                marker,
                factor,
                format_bar(rule, use_colors),
                rule.rule.weight,
                rule.rule.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Journey card: outcome, source, dates, then the touchpoint chain.
/// Completed steps get a check mark.
pub fn format_journey(journey: &Journey, use_colors: bool) -> String {
    let chain = journey
        .steps()
        .iter()
        .map(|step| {
            if step.completed {
                let label = format!("\u{2713} {}", step.label);
                if use_colors {
                    label.green().to_string()
                } else {
                    label
                }
            } else {
                format!("\u{25cb} {}", step.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" -> ");

    let outcome = if !use_colors {
        journey.outcome.clone()
    } else if journey.is_completed() {
        journey.outcome.green().to_string()
    } else {
        journey.outcome.yellow().to_string()
    };

    let days = |d: Option<u32>| d.map(|d| format!("{}d", d)).unwrap_or_else(|| "-".to_string());
    format!(
        "  {}  {}\n  Source: {}  Created: {}  State: {}\n  Days to meeting / client: {} / {}\n  {}",
        journey.id,
        outcome,
        journey.source,
        journey.created,
        journey.state,
        days(journey.days_to_meeting),
        days(journey.days_to_client),
        chain
    )
}

/// Lead list shown in real mode: journey cards stand in for scored leads
pub fn format_real_leads_view(journeys: &[Journey], requirement: &str, use_colors: bool) -> String {
    let converted = journeys.iter().filter(|j| j.is_completed()).count();
    let mut out = vec![
        format!(
            "{} TV-attributed leads tracked ({} converted to Tier 1)",
            journeys.len(),
            converted
        ),
        format!("Lead scoring segments require: {}", requirement),
    ];
    for journey in journeys {
        out.push(String::new());
        out.push(format_journey(journey, use_colors));
    }
    out.join("\n")
}

/// Dashboard header: who the data belongs to and which DMA counts as home
pub fn format_client_header(client: &ClientProfile, home_dma: &str, use_colors: bool) -> String {
    let name = if use_colors {
        client.name.bold().to_string()
    } else {
        client.name.clone()
    };
    format!(
        "{}  {}\nDMA {} {} (home: {})",
        name, client.location, client.dma_code, client.dma_name, home_dma
    )
}

pub fn format_window_match(window: &WindowMatch) -> String {
    format!(
        "{} (within {}, weight {:.1})",
        window.window.label,
        window.window.format_duration(),
        window.effective_weight
    )
}

/// Multi-line detail view of one lead
pub fn format_lead_detail(detail: &LeadDetail, use_colors: bool) -> String {
    let lead = detail.lead;
    let segment = Segment::from_score(lead.score).label();

    let mut out = Vec::new();
    if use_colors {
        out.push(format!("{}  [{}]  {}", lead.name.bold(), segment, lead.id.dimmed()));
    } else {
        out.push(format!("{}  [{}]  {}", lead.name, segment, lead.id));
    }
    out.push(format!("  Score: {}", lead.score));
    out.push(format!("  Topic: {}", lead.topic));
    out.push(format!("  Source: {}", lead.source));
    out.push(format!("  State: {}  DMA: {}", lead.state, lead.dma));
    out.push(format!("  Status: {}", lead.status));
    out.push(format!("  Advisor: {}", lead.advisor));
    out.push(format!("  Created: {}", lead.created_at));

    out.push(String::new());
    out.push("Attribution Confidence".to_string());
    match (lead.tv_attribution, lead.attribution_summary()) {
        (Some(attribution), Some(summary)) => {
            out.push(format!(
                "  {}% {} ({})",
                attribution.percent(),
                attribution.level(),
                attribution.method
            ));
            out.push(format!("  {}", summary));
        }
        _ => out.push("  No TV attribution".to_string()),
    }
    if let Some(window) = &detail.window {
        out.push(format!("  Window: {}", format_window_match(window)));
    }

    out.push(String::new());
    out.push("Score Breakdown".to_string());
    if detail.rules.is_empty() {
        out.push("  No scoring rules configured".to_string());
    } else {
        out.push(format_breakdown(&detail.rules, use_colors));
    }

    if let Some(journey) = detail.journey {
        out.push(String::new());
        out.push("Attribution Journey".to_string());
        out.push(format_journey(journey, use_colors));
    }

    out.join("\n")
}

pub fn format_metrics(metrics: &AggregateMetrics) -> String {
    format!(
        "Hot leads:      {} (score {}+)\nAverage score:  {}\nTotal leads:    {}\nTV attributed:  {}",
        metrics.hot_count,
        Segment::HOT_THRESHOLD,
        metrics.avg_score,
        metrics.total,
        metrics.tv_attributed
    )
}

pub fn format_windows(windows: &[AttributionWindow]) -> String {
    if windows.is_empty() {
        return "No attribution windows configured.".to_string();
    }
    windows
        .iter()
        .map(|w| {
            let decay = if w.decays { "decays" } else { "stepwise" };
            format!(
                "{:<20} {:>8}  weight {:>3}  {}",
                w.label,
                w.format_duration(),
                w.weight,
                decay
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Placeholder shown in real mode for views that need a live integration
pub fn format_locked(view: &str, requirement: &str) -> String {
    format!("{} requires integration: {}", view, requirement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dataset;
    use crate::engine::LeadQueryEngine;
    use crate::leads::{SegmentFilter, SortBy, SourceFilter};

    fn engine() -> LeadQueryEngine {
        LeadQueryEngine::new(sample_dataset(), "Greenville DMA")
    }

    #[test]
    fn test_lead_table_empty() {
        let engine = engine();
        let query = LeadQuery::new(
            SegmentFilter::Only(Segment::Cool),
            SourceFilter::Referral,
            SortBy::ScoreDesc,
        );
        let result = engine.query(&query);
        assert_eq!(format_lead_table(&result, false), "No leads match your filters.");
    }

    #[test]
    fn test_lead_table_rows() {
        let engine = engine();
        let result = engine.query(&LeadQuery::default());
        let table = format_lead_table(&result, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with(" 1.  92"));
        assert!(lines[0].contains("James R. *"));
        assert!(lines[0].contains("TV 92%"));
        assert!(lines[4].contains("Elizabeth K."));
        assert!(!lines[4].contains("TV "));
    }

    #[test]
    fn test_tsv() {
        let engine = engine();
        let result = engine.query(&LeadQuery::new(
            SegmentFilter::All,
            SourceFilter::Exact(crate::leads::LeadSource::Tv),
            SortBy::Oldest,
        ));
        let tsv = format_tsv(&result.leads);
        assert_eq!(
            tsv,
            "lead-004\t71\tMichael T.\tTV\twarm\t2026-01-30\nlead-001\t92\tJames R.\tTV\thot\t2026-02-03"
        );
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_query_summary_mentions_clearing_only_when_filtered() {
        let engine = engine();
        let query = LeadQuery::default();
        let summary = format_query_summary(&engine.query(&query), &query);
        assert_eq!(
            summary,
            "Showing 5 of 5 leads (segment: all, source: all, sort: score-desc)"
        );

        let query = LeadQuery::new(SegmentFilter::Only(Segment::Hot), SourceFilter::All, SortBy::ScoreDesc);
        let summary = format_query_summary(&engine.query(&query), &query);
        assert!(summary.starts_with("Showing 2 of 5 leads"));
        assert!(summary.contains("clear filters"));
    }

    #[test]
    fn test_detail_for_tv_lead() {
        let engine = engine();
        let detail = engine.detail("lead-001").unwrap();
        let text = format_lead_detail(&detail, false);
        assert!(text.starts_with("James R.  [Hot]  lead-001"));
        assert!(text.contains("92% High (Time Window)"));
        assert!(text.contains("Arrived 12 min after TV spot in Greenville DMA"));
        assert!(text.contains("Window: Immediate Response"));
        assert!(text.contains("Attribution Journey"));
        assert!(text.contains("tv-001"));
    }

    #[test]
    fn test_detail_for_non_tv_lead() {
        let engine = engine();
        let detail = engine.detail("lead-005").unwrap();
        let text = format_lead_detail(&detail, false);
        assert!(text.contains("[Warm]"));
        assert!(text.contains("No TV attribution"));
        assert!(!text.contains("Attribution Journey"));
    }

    #[test]
    fn test_breakdown_marks_active_rules() {
        let engine = engine();
        let detail = engine.detail("lead-001").unwrap();
        let text = format_breakdown(&detail.rules, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("  + TV spot time window (15min)"));
        assert!(lines[5].starts_with("    Topic = Life Change/Estate"));
        // heaviest rule gets a full bar
        assert!(lines[0].contains(&"\u{2588}".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_journey_chain() {
        let dataset = sample_dataset();
        let text = format_journey(&dataset.journeys[3], false);
        assert!(text.starts_with("  tv-004  In Progress\n  Source: TV  Created: 2025-01-10  State: NC"));
        assert!(text.contains("Days to meeting / client: - / -"));
        assert!(text.ends_with("\u{2713} TV Spot -> \u{2713} Website Visit -> \u{25cb} Form Submit"));
    }

    #[test]
    fn test_metrics() {
        let metrics = engine().metrics().unwrap();
        let text = format_metrics(&metrics);
        assert!(text.contains("Hot leads:      2 (score 80+)"));
        assert!(text.contains("Average score:  78"));
    }

    #[test]
    fn test_windows() {
        let dataset = sample_dataset();
        let text = format_windows(&dataset.attribution_windows);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().last().unwrap().ends_with("decays"));
        assert_eq!(format_windows(&[]), "No attribution windows configured.");
    }

    #[test]
    fn test_real_leads_view_lists_every_journey() {
        let dataset = sample_dataset();
        let text = format_real_leads_view(&dataset.journeys, "Scoring engine deployment", false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "5 TV-attributed leads tracked (3 converted to Tier 1)");
        assert_eq!(lines[1], "Lead scoring segments require: Scoring engine deployment");
        for journey in &dataset.journeys {
            assert!(text.contains(&format!("  {}  {}", journey.id, journey.outcome)));
        }
        assert!(text.contains("Days to meeting / client: 3d / 45d"));
        assert!(text.ends_with("\u{2713} TV Spot -> \u{25cb} Website Visit"));
    }

    #[test]
    fn test_real_leads_view_without_journeys() {
        let text = format_real_leads_view(&[], "Scoring engine deployment", false);
        assert_eq!(
            text,
            "0 TV-attributed leads tracked (0 converted to Tier 1)\nLead scoring segments require: Scoring engine deployment"
        );
    }

    #[test]
    fn test_client_header() {
        let engine = engine();
        let text = format_client_header(&engine.dataset().client, engine.home_dma(), false);
        assert_eq!(
            text,
            "Market864  Greenville, SC\nDMA 567 Greenville-Spartanburg-Asheville-Anderson (home: Greenville DMA)"
        );
    }

    #[test]
    fn test_locked_placeholder() {
        assert_eq!(
            format_locked("Lead list", "Scoring engine deployment"),
            "Lead list requires integration: Scoring engine deployment"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 8), "a lon...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }
}
