use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunable limits for the puzzle runners. Every field falls back to its
/// default when missing from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Step cap for fixed-point searches.
    pub max_steps: usize,
    /// Heights at or above this never belong to a basin.
    pub basin_boundary: u8,
    pub top_basins: usize,
    pub octopus_steps: usize,
    pub sync_limit: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            basin_boundary: 9,
            top_basins: 3,
            octopus_steps: 100,
            sync_limit: 10_000,
        }
    }
}

impl SimConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"max_steps": 50}"#).unwrap();
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.basin_boundary, 9);
        assert_eq!(config.top_basins, 3);
    }

    #[test]
    fn empty_object_is_default() {
        let config: SimConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("gridsim-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"octopus_steps": 10, "sync_limit": 500}"#).unwrap();
        let config = SimConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.octopus_steps, 10);
        assert_eq!(config.sync_limit, 500);
        assert_eq!(config.max_steps, 1000);
    }

    #[test]
    fn load_reports_path_on_error() {
        let err = SimConfig::load("/nonexistent/gridsim.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/gridsim.json"));
    }
}
