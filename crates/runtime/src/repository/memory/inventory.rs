use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use reward_core::{AbilityStack, InventoryState, ItemStack, PlayerId};

use crate::repository::{InventoryRepository, RepositoryError, Result};

/// In-memory implementation of InventoryRepository.
///
/// Writes swap the item and ability lists under one write lock, so a reader
/// never observes half of an applied batch.
pub struct InMemoryInventoryRepo {
    inventories: RwLock<HashMap<PlayerId, InventoryState>>,
}

impl InMemoryInventoryRepo {
    pub fn new() -> Self {
        Self {
            inventories: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, player: PlayerId, inventory: InventoryState) -> Result<()> {
        let mut inventories = self
            .inventories
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        inventories.insert(player, inventory);
        Ok(())
    }

    /// Applies an arbitrary change, standing in for other commands that touch
    /// the inventory while a batch awaits approval.
    pub fn update<F>(&self, player: &PlayerId, change: F) -> Result<()>
    where
        F: FnOnce(&mut InventoryState),
    {
        let mut inventories = self
            .inventories
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let inventory = inventories
            .get_mut(player)
            .ok_or_else(|| RepositoryError::PlayerNotFound(player.clone()))?;
        change(inventory);
        Ok(())
    }

    pub fn get(&self, player: &PlayerId) -> Result<Option<InventoryState>> {
        let inventories = self
            .inventories
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inventories.get(player).cloned())
    }
}

impl Default for InMemoryInventoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(PlayerId, InventoryState)> for InMemoryInventoryRepo {
    fn from_iter<I: IntoIterator<Item = (PlayerId, InventoryState)>>(iter: I) -> Self {
        Self {
            inventories: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepo {
    async fn fetch_live(&self, player: &PlayerId) -> Result<InventoryState> {
        self.get(player)?
            .ok_or_else(|| RepositoryError::PlayerNotFound(player.clone()))
    }

    async fn apply_batch(
        &self,
        player: &PlayerId,
        items: Vec<ItemStack>,
        abilities: Vec<AbilityStack>,
    ) -> Result<()> {
        self.update(player, |inventory| {
            inventory.items = items;
            inventory.abilities = abilities;
        })
    }
}
