//! Structured preview of a tentative batch.
//!
//! The preview is data, not text. Turning it into an embed, a console table,
//! or anything else is left to whoever shows it to the approver.

use crate::batch::{BatchKind, RewardBatch};
use crate::catalog::CatalogKind;
use crate::rarity::Rarity;
use crate::state::{LuckLevel, PlayerId};

/// One line of a preview, describing a single draw.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewLine {
    pub kind: CatalogKind,
    pub tier: Rarity,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardPreview {
    pub label: String,
    pub kind: BatchKind,
    pub player: PlayerId,
    pub luck: LuckLevel,
    pub luck_overridden: bool,
    pub lines: Vec<PreviewLine>,
    /// Item count after merging into the preview snapshot.
    pub projected_item_count: u32,
    pub item_limit: u32,
    /// Set when `projected_item_count` would exceed `item_limit`.
    pub overflow: bool,
}

impl RewardPreview {
    /// Builds a preview from the batch's own snapshot.
    ///
    /// The overflow flag is advisory: the live inventory may differ by the
    /// time the batch is confirmed.
    pub fn from_batch(batch: &RewardBatch) -> Self {
        let lines = batch
            .draws
            .iter()
            .map(|draw| PreviewLine {
                kind: draw.entry.kind,
                tier: draw.tier,
                name: draw.entry.name.clone(),
                description: draw.entry.description.clone(),
            })
            .collect();

        let snapshot = &batch.preview_inventory;
        let projected_item_count = snapshot
            .item_count()
            .saturating_add(batch.items().count() as u32);

        Self {
            label: batch.label().to_string(),
            kind: batch.kind,
            player: batch.player.clone(),
            luck: batch.luck,
            luck_overridden: batch.luck_overridden,
            lines,
            projected_item_count,
            item_limit: snapshot.item_limit,
            overflow: projected_item_count > snapshot.item_limit,
        }
    }
}
