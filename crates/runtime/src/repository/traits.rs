//! Repository contracts for reading player data and writing rewards.

use async_trait::async_trait;
use reward_core::{AbilityStack, InventoryState, ItemStack, LuckLevel, PlayerId};

use super::Result;

/// Read access to the player attributes that drive reward generation.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Current stored luck level.
    async fn luck(&self, player: &PlayerId) -> Result<LuckLevel>;

    /// Current role name, used for role-affinity checks.
    async fn role(&self, player: &PlayerId) -> Result<String>;
}

/// Authoritative inventory store.
///
/// `fetch_live` must return the current persisted state, not a cached copy:
/// confirmation merges into whatever it returns.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Read the live items, abilities, and item limit for a player.
    async fn fetch_live(&self, player: &PlayerId) -> Result<InventoryState>;

    /// Replace the player's items and abilities in one atomic write.
    ///
    /// On error nothing must have been written.
    async fn apply_batch(
        &self,
        player: &PlayerId,
        items: Vec<ItemStack>,
        abilities: Vec<AbilityStack>,
    ) -> Result<()>;
}
