//! [`CatalogOracle`] backed by an in-memory index.
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reward_core::{CatalogEntry, CatalogKind, Rarity};

use super::{CatalogOracle, OracleError};
use crate::rolls::{RollSource, ThreadRolls};

/// CatalogOracle implementation with entries indexed by kind and rarity.
///
/// Every entry is indexed under its own rarity, `Unique` ones included;
/// filtering those out is the sampler's job.
pub struct CatalogOracleImpl {
    entries: HashMap<(CatalogKind, Rarity), Vec<CatalogEntry>>,
    rolls: Arc<dyn RollSource>,
}

impl CatalogOracleImpl {
    pub fn new() -> Self {
        Self::with_rolls(Arc::new(ThreadRolls))
    }

    /// Uses `rolls` to pick among matching entries.
    pub fn with_rolls(rolls: Arc<dyn RollSource>) -> Self {
        Self {
            entries: HashMap::new(),
            rolls,
        }
    }

    /// Add a catalog entry
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries
            .entry((entry.kind, entry.rarity))
            .or_default()
            .push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CatalogOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CatalogEntry> for CatalogOracleImpl {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut oracle = Self::new();
        oracle.extend(iter);
        oracle
    }
}

#[async_trait]
impl CatalogOracle for CatalogOracleImpl {
    async fn random_entry(
        &self,
        kind: CatalogKind,
        tier: Rarity,
    ) -> Result<Option<CatalogEntry>, OracleError> {
        let Some(matches) = self.entries.get(&(kind, tier)).filter(|m| !m.is_empty()) else {
            return Ok(None);
        };
        let pick = self.rolls.index(matches.len());
        Ok(matches.get(pick).cloned())
    }
}
