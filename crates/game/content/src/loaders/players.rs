//! Player roster loader.
//!
//! The roster seeds in-memory repositories for local runs and tests. In a
//! deployment the same data lives in the persistent store.

use std::path::Path;

use reward_core::{InventoryState, LuckLevel, PlayerId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A player's luck, role, and inventory as stored in the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    #[serde(default)]
    pub luck: LuckLevel,
    pub role: String,
    pub inventory: InventoryState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRoster {
    players: Vec<PlayerRecord>,
}

/// Loader for the player roster from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<PlayerRecord>> {
        let content = read_file(path)?;
        let roster: PlayerRoster = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player roster RON: {}", e))?;

        Ok(roster.players)
    }
}
