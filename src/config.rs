//! Configuration loading.
//!
//! Settings come from an optional TOML file merged with environment
//! overrides. Scoring weights and thresholds are design constants, not
//! configuration; only deployment concerns live here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::services::similarity::DEFAULT_SIMILAR_LIMIT;

/// Default database filename, looked up in the working directory.
pub const DEFAULT_DATABASE: &str = "docsense.db";

/// Config file names probed when no explicit path is given.
const CONFIG_BASENAMES: &[&str] = &["docsense.toml", "config.toml"];

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// SQLite database file for the document corpus.
    pub database: PathBuf,
    /// Number of similar documents returned per analysis.
    pub similar_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            similar_limit: DEFAULT_SIMILAR_LIMIT,
        }
    }
}

/// On-disk configuration shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<PathBuf>,
    similar_limit: Option<usize>,
}

impl Settings {
    /// Load settings: file config (explicit path or probed basenames),
    /// then `DOCSENSE_DATABASE` from the environment, then CLI overrides
    /// applied by the caller.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_path {
            Some(path) => Some(read_config(path)?),
            None => find_default_config()?,
        };

        let mut settings = Self::default();
        if let Some(file) = file {
            if let Some(database) = file.database {
                settings.database = database;
            }
            if let Some(limit) = file.similar_limit {
                settings.similar_limit = limit;
            }
        }

        if let Ok(database) = std::env::var("DOCSENSE_DATABASE") {
            if !database.is_empty() {
                settings.database = PathBuf::from(database);
            }
        }

        Ok(settings)
    }
}

fn read_config(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read config {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
}

fn find_default_config() -> anyhow::Result<Option<FileConfig>> {
    for basename in CONFIG_BASENAMES {
        let path = Path::new(basename);
        if path.exists() {
            return Ok(Some(read_config(path)?));
        }
    }
    Ok(None)
}
