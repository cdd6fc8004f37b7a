//! Catalog access for the reward engine.
//!
//! The catalog is static content: the engine only ever asks it for a random
//! entry of one kind at one tier. Mutable player data lives in repositories.
mod catalog;

use async_trait::async_trait;
use reward_core::{CatalogEntry, CatalogKind, Rarity};
use thiserror::Error;

pub use catalog::CatalogOracleImpl;

/// Failure inside a catalog backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Random access to the item and ability catalogs.
#[async_trait]
pub trait CatalogOracle: Send + Sync {
    /// Draws one entry of `kind` at `tier`, uniformly among matches.
    ///
    /// Returns `Ok(None)` when the catalog holds no such entry.
    async fn random_entry(
        &self,
        kind: CatalogKind,
        tier: Rarity,
    ) -> Result<Option<CatalogEntry>, OracleError>;
}
