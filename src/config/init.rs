use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{get_config_path, Config};

const HEADER: &str = "\
# lead-attribution configuration
#
# home_dma:  DMA label counted as a geographic match (exact, case-sensitive)
# data_file: optional JSON dataset (see `lead-attribution export`)
# mode:      demo | real
# list:      defaults for `lead-attribution list`
#   segment: all | hot | warm | cool
#   source:  all | TV | Internet | Referral | Other | <source name>
#   sort:    score-desc | score-asc | newest | oldest
";

/// Render the default config as commented YAML
pub fn render_default_config() -> Result<String> {
    let body = serde_saphyr::to_string(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!("{}\n{}", HEADER, body))
}

/// Write a default config file.
///
/// Uses `path` when given, otherwise ~/.config/lead-attribution/config.yaml.
/// Refuses to replace an existing file unless `force` is set.
/// Returns the path that was written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    ensure_parent_dir(&config_path)?;

    let contents = render_default_config()?;
    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(contents.as_bytes())
        .context("Failed to write config")?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", config_path.display()))?;

    tracing::info!("Wrote default config to {}", config_path.display());
    Ok(config_path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
    }
    Ok(())
}
