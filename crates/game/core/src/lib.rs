//! Deterministic reward math and data types shared across the workspace.
//!
//! `reward-core` owns the rarity chance curves, the tier selector, catalog
//! records, reward batches, and the inventory merge used at confirmation time.
//! Everything here is pure: callers supply uniform rolls and catalog draws,
//! and the runtime crate wires these pieces to live collaborators.
pub mod batch;
pub mod catalog;
pub mod config;
pub mod curve;
pub mod error;
pub mod preview;
pub mod rarity;
pub mod selector;
pub mod state;

pub use batch::{BatchKind, RewardBatch, RewardDraw};
pub use catalog::{CatalogEntry, CatalogKind};
pub use config::RewardConfig;
pub use curve::{
    ChanceCurve, chance, common_chance, distribution, epic_chance, legendary_chance,
    mythical_chance, rare_chance, uncommon_chance,
};
pub use error::ConfigError;
pub use preview::{PreviewLine, RewardPreview};
pub use rarity::Rarity;
pub use selector::{SATURATION_LEVEL, select};
pub use state::{
    AbilityStack, ChannelRef, InventoryState, ItemStack, LuckLevel, MergeOutcome, MergeReport,
    PlayerId,
};
