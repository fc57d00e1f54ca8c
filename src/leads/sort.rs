use super::types::Lead;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    ScoreDesc,
    ScoreAsc,
    Newest,
    Oldest,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::ScoreDesc,
        SortBy::ScoreAsc,
        SortBy::Newest,
        SortBy::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::ScoreDesc => "score-desc",
            SortBy::ScoreAsc => "score-asc",
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid sort '{}'. Expected one of: score-desc, score-asc, newest, oldest",
                    s
                )
            })
    }
}

/// Return a new ordering of `leads`. Stable: equal keys keep their input order.
pub fn sort_leads<'a>(leads: &[&'a Lead], sort_by: SortBy) -> Vec<&'a Lead> {
    let mut sorted = leads.to_vec();
    match sort_by {
        SortBy::ScoreDesc => sorted.sort_by(|a, b| b.score.cmp(&a.score)),
        SortBy::ScoreAsc => sorted.sort_by(|a, b| a.score.cmp(&b.score)),
        SortBy::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    sorted
}
