//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use reward_core::RewardConfig;

use crate::loaders::{Catalog, CatalogLoader, ConfigLoader, LoadResult, PlayerLoader, PlayerRecord};

/// Content factory that loads all reward content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── players.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<RewardConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(RewardConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item/ability catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }

    /// Load the player roster from `players.ron`.
    pub fn load_players(&self) -> LoadResult<Vec<PlayerRecord>> {
        let path = self.data_dir.join("players.ron");
        PlayerLoader::load(&path)
    }
}
