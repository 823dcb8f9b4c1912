use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use super::types::ShapesConfig;
use crate::error::ShapesError;

/// A `.shapes` config together with the directory its paths are relative to.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ShapesConfig,
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: ShapesConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Batch files named by the config, in pattern order.
    ///
    /// Plain paths are taken as written; a glob must match at least one file
    /// or the whole config is rejected. Matches of one glob are sorted, and a
    /// file reached through several entries is evaluated once.
    pub fn resolve_requests(&self) -> Result<Vec<PathBuf>> {
        let mut batches = Vec::new();

        for entry in &self.config.requests {
            let path = self.config_dir.join(entry);
            if !is_glob_pattern(entry) {
                push_unique(&mut batches, path);
                continue;
            }

            let mut matched = glob::glob(&path.to_string_lossy())
                .with_context(|| format!("invalid glob pattern: {}", entry))?
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("failed to read glob entry: {}", entry))?;
            matched.retain(|p| p.is_file());
            if matched.is_empty() {
                return Err(ShapesError::NoMatches(entry.clone()).into());
            }

            matched.sort();
            for path in matched {
                push_unique(&mut batches, path);
            }
        }

        Ok(batches)
    }

    pub fn resolve_output(&self) -> Option<PathBuf> {
        self.config
            .output
            .as_ref()
            .map(|output| self.config_dir.join(output))
    }
}

/// Escaping only changes a string that holds glob metacharacters.
fn is_glob_pattern(entry: &str) -> bool {
    Pattern::escape(entry) != entry
}

fn push_unique(batches: &mut Vec<PathBuf>, path: PathBuf) {
    if !batches.contains(&path) {
        batches.push(path);
    }
}
