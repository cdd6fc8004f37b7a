//! Reward draws and the bundles they are grouped into.
use crate::catalog::{CatalogEntry, CatalogKind};
use crate::rarity::Rarity;
use crate::state::{InventoryState, LuckLevel, PlayerId};

/// The bundle shapes the engine knows how to build.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BatchKind {
    /// One item and one any-ability, each on its own tier roll.
    CarePackage,
    /// A random number of items, each on its own tier roll.
    ItemRain,
    /// A single any-ability.
    PowerDrop,
}

impl BatchKind {
    /// Human-readable label shown in previews.
    pub const fn label(self) -> &'static str {
        match self {
            BatchKind::CarePackage => "Care Package",
            BatchKind::ItemRain => "Item Rain",
            BatchKind::PowerDrop => "Power Drop",
        }
    }

    /// True if building this batch draws abilities, which need the player's role.
    pub const fn includes_abilities(self) -> bool {
        matches!(self, BatchKind::CarePackage | BatchKind::PowerDrop)
    }
}

/// A single sampled catalog entry and the tier it was rolled under.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardDraw {
    pub entry: CatalogEntry,
    pub tier: Rarity,
}

impl RewardDraw {
    pub fn new(entry: CatalogEntry, tier: Rarity) -> Self {
        Self { entry, tier }
    }

    pub fn kind(&self) -> CatalogKind {
        self.entry.kind
    }
}

/// A tentative, unpersisted set of proposed rewards.
///
/// `preview_inventory` is the snapshot read at generation time. It feeds the
/// preview only; confirmation always merges into a freshly fetched inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardBatch {
    pub kind: BatchKind,
    pub player: PlayerId,
    pub luck: LuckLevel,
    /// True when `luck` came from an admin override instead of the stored value.
    pub luck_overridden: bool,
    pub draws: Vec<RewardDraw>,
    pub preview_inventory: InventoryState,
}

impl RewardBatch {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn items(&self) -> impl Iterator<Item = &RewardDraw> {
        self.draws
            .iter()
            .filter(|draw| draw.kind() == CatalogKind::Item)
    }

    pub fn abilities(&self) -> impl Iterator<Item = &RewardDraw> {
        self.draws
            .iter()
            .filter(|draw| draw.kind() == CatalogKind::Ability)
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}
