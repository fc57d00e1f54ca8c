use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::leads::{LeadQuery, SegmentFilter, SortBy, SourceFilter};

pub const DEFAULT_HOME_DMA: &str = "Greenville DMA";

/// Which presentation the CLI renders.
/// `Real` shows what an unintegrated account sees: lead-level views are locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    #[default]
    Demo,
    Real,
}

impl DataMode {
    pub fn shows_lead_data(&self) -> bool {
        matches!(self, DataMode::Demo)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// DMA label that counts as a geographic match (exact, case-sensitive)
    #[serde(default = "default_home_dma")]
    pub home_dma: String,

    /// JSON dataset to load instead of the built-in sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub mode: DataMode,

    /// Defaults for `list` when no flags are given
    #[serde(default)]
    pub list: ListDefaults,
}

/// Filter strings are kept raw so unknown values fall back to "all" instead of failing the load
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ListDefaults {
    #[serde(default = "default_filter")]
    pub segment: String,
    #[serde(default = "default_filter")]
    pub source: String,
    #[serde(default)]
    pub sort: SortBy,
}

fn default_home_dma() -> String {
    DEFAULT_HOME_DMA.to_string()
}

fn default_filter() -> String {
    "all".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_dma: default_home_dma(),
            data_file: None,
            mode: DataMode::default(),
            list: ListDefaults::default(),
        }
    }
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            segment: default_filter(),
            source: default_filter(),
            sort: SortBy::default(),
        }
    }
}

impl ListDefaults {
    pub fn to_query(&self) -> LeadQuery {
        LeadQuery::new(
            SegmentFilter::parse_lenient(&self.segment),
            SourceFilter::parse_lenient(&self.source),
            self.sort,
        )
    }
}
