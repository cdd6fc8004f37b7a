//! Content loaders for reading reward data from files.
//!
//! Each loader converts one RON/TOML file into `reward-core` types.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod players;

pub use catalog::{Catalog, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use players::{PlayerLoader, PlayerRecord};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
