pub mod formatter;

pub use formatter::{
    format_breakdown, format_client_header, format_confidence_badge, format_journey, format_lead_detail,
    format_lead_table, format_locked, format_metrics, format_query_summary, format_real_leads_view, format_tsv,
    format_window_match, format_windows, should_use_colors,
};
