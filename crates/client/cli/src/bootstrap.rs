//! Wires bundled content into an in-memory reward engine.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use reward_content::ContentFactory;
use reward_runtime::{
    CatalogOracleImpl, InMemoryInventoryRepo, InMemoryPlayerRepo, PlayerProfile, RewardEngine,
    RollSource, SeededRolls, ThreadRolls,
};

use crate::config::CliConfig;
use crate::notifier::ConsoleNotifier;

/// Engine plus the stores backing it, kept for the final inventory dump.
pub struct Session {
    pub engine: RewardEngine,
    pub inventory: Arc<InMemoryInventoryRepo>,
}

pub fn build_session(config: &CliConfig, data_dir: &Path, quiet: bool) -> Result<Session> {
    let factory = ContentFactory::new(data_dir);
    let reward_config = factory.load_config()?;
    let catalog = factory.load_catalog()?;
    let roster = factory.load_players()?;
    tracing::info!(
        data_dir = %data_dir.display(),
        items = catalog.items.len(),
        abilities = catalog.abilities.len(),
        players = roster.len(),
        "content loaded"
    );

    let rolls: Arc<dyn RollSource> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded rolls");
            Arc::new(SeededRolls::new(seed))
        }
        None => Arc::new(ThreadRolls),
    };

    let mut oracle = CatalogOracleImpl::with_rolls(Arc::clone(&rolls));
    oracle.extend(catalog.into_entries());

    let players: InMemoryPlayerRepo = roster
        .iter()
        .map(|record| {
            (
                record.id.clone(),
                PlayerProfile::new(record.luck, record.role.clone()),
            )
        })
        .collect();
    let inventory: Arc<InMemoryInventoryRepo> = Arc::new(
        roster
            .into_iter()
            .map(|record| (record.id, record.inventory))
            .collect(),
    );

    let mut builder = RewardEngine::builder()
        .config(reward_config)
        .catalog(Arc::new(oracle))
        .players(Arc::new(players))
        .inventory(inventory.clone())
        .notifier(Arc::new(ConsoleNotifier::new(quiet)))
        .rolls(rolls);
    if let Some(size) = config.event_buffer {
        builder = builder.event_buffer_size(size);
    }
    let engine = builder.build().context("Failed to build reward engine")?;

    Ok(Session { engine, inventory })
}
