//! Engine configuration loader.

use std::path::Path;

use reward_core::RewardConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for reward configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RewardConfig`] defaults. The result is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<RewardConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<RewardConfig> {
        let config: RewardConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
