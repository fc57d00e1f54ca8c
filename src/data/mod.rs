pub mod sample;
pub mod validation;

pub use sample::{
    sample_attribution_windows, sample_client, sample_dataset, sample_journeys, sample_leads,
    sample_scoring_rules,
};
pub use validation::validate_dataset;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::journey::Journey;
use crate::leads::Lead;
use crate::scoring::{AttributionWindow, ScoringRule};

/// The advertiser the dashboard is built for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub location: String,
    pub dma_code: u32,
    pub dma_name: String,
}

/// Everything the engine reads. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub client: ClientProfile,
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub scoring_rules: Vec<ScoringRule>,
    #[serde(default)]
    pub attribution_windows: Vec<AttributionWindow>,
    #[serde(default)]
    pub journeys: Vec<Journey>,
}

/// Load a dataset from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the JSON does not match
/// the dataset layout. Invariants are checked separately by `validate_dataset`.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file at {}", path.display()))?;

    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset JSON in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        leads = dataset.leads.len(),
        rules = dataset.scoring_rules.len(),
        windows = dataset.attribution_windows.len(),
        journeys = dataset.journeys.len(),
        "Loaded dataset"
    );

    Ok(dataset)
}

/// Use the dataset file when one is given, otherwise the built-in sample
pub fn load_or_sample(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => load_dataset(path),
        None => {
            tracing::debug!("Using built-in sample dataset");
            Ok(sample_dataset())
        }
    }
}

/// Save a dataset to a JSON file atomically
///
/// Uses atomic-write-file so a failed write never leaves a truncated file behind.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, dataset).context("Failed to serialize dataset")?;

    file.commit()
        .with_context(|| format!("Failed to save dataset to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open dataset file"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dataset.json");

        let dataset = sample_dataset();
        save_dataset(&path, &dataset).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"leads\": 5 }").unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse dataset JSON"));
    }

    #[test]
    fn test_optional_tables_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.json");
        std::fs::write(
            &path,
            r#"{
                "client": {
                    "name": "Acme",
                    "location": "Asheville, NC",
                    "dma_code": 567,
                    "dma_name": "Greenville-Spartanburg-Asheville-Anderson"
                },
                "leads": []
            }"#,
        )
        .unwrap();

        let dataset = load_dataset(&path).unwrap();
        assert!(dataset.leads.is_empty());
        assert!(dataset.scoring_rules.is_empty());
        assert!(dataset.journeys.is_empty());
    }

    #[test]
    fn test_load_or_sample_without_path() {
        let dataset = load_or_sample(None).unwrap();
        assert_eq!(dataset.leads.len(), 5);
    }
}
