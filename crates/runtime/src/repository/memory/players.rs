use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use reward_core::{LuckLevel, PlayerId};

use crate::repository::{PlayerRepository, RepositoryError, Result};

/// Luck and role of a single player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub luck: LuckLevel,
    pub role: String,
}

impl PlayerProfile {
    pub fn new(luck: impl Into<LuckLevel>, role: impl Into<String>) -> Self {
        Self {
            luck: luck.into(),
            role: role.into(),
        }
    }
}

/// In-memory implementation of PlayerRepository.
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, PlayerProfile>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, player: PlayerId, profile: PlayerProfile) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(player, profile);
        Ok(())
    }

    /// Changes a player's role, as the role bookkeeping layer would.
    pub fn set_role(&self, player: &PlayerId, role: impl Into<String>) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let profile = players
            .get_mut(player)
            .ok_or_else(|| RepositoryError::PlayerNotFound(player.clone()))?;
        profile.role = role.into();
        Ok(())
    }

    fn profile(&self, player: &PlayerId) -> Result<PlayerProfile> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players
            .get(player)
            .cloned()
            .ok_or_else(|| RepositoryError::PlayerNotFound(player.clone()))
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(PlayerId, PlayerProfile)> for InMemoryPlayerRepo {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PlayerProfile)>>(iter: I) -> Self {
        Self {
            players: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepo {
    async fn luck(&self, player: &PlayerId) -> Result<LuckLevel> {
        Ok(self.profile(player)?.luck)
    }

    async fn role(&self, player: &PlayerId) -> Result<String> {
        Ok(self.profile(player)?.role)
    }
}
