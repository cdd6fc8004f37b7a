//! Assembly of reward batches from independent tier rolls.
//!
//! Every draw gets its own uniform roll and its own call to the selector,
//! all at the same luck level. The luck level is whatever the caller passes:
//! the stored value or an admin override.

use reward_core::{CatalogKind, LuckLevel, RewardConfig, RewardDraw, select};

use crate::api::Result;
use crate::rolls::RollSource;
use crate::sampler::{ConstrainedSampler, DrawConstraint};

/// Builds the draws of each [`BatchKind`](reward_core::BatchKind).
pub struct BatchBuilder<'a> {
    sampler: ConstrainedSampler<'a>,
    rolls: &'a dyn RollSource,
    config: &'a RewardConfig,
}

impl<'a> BatchBuilder<'a> {
    pub fn new(
        sampler: ConstrainedSampler<'a>,
        rolls: &'a dyn RollSource,
        config: &'a RewardConfig,
    ) -> Self {
        Self {
            sampler,
            rolls,
            config,
        }
    }

    /// One item and one ability usable by `role`, on independent tiers.
    pub async fn care_package(&self, luck: LuckLevel, role: &str) -> Result<Vec<RewardDraw>> {
        let item = self.draw_item(luck).await?;
        let ability = self.draw_ability(luck, role).await?;
        Ok(vec![item, ability])
    }

    /// Between `item_rain_min` and `item_rain_max` items, each on its own tier.
    pub async fn item_rain(&self, luck: LuckLevel) -> Result<Vec<RewardDraw>> {
        let count = self
            .rolls
            .count(self.config.item_rain_min, self.config.item_rain_max);
        tracing::debug!(count, "item rain size rolled");

        let mut draws = Vec::with_capacity(count as usize);
        for _ in 0..count {
            draws.push(self.draw_item(luck).await?);
        }
        Ok(draws)
    }

    /// A single ability usable by `role`.
    pub async fn power_drop(&self, luck: LuckLevel, role: &str) -> Result<Vec<RewardDraw>> {
        Ok(vec![self.draw_ability(luck, role).await?])
    }

    async fn draw_item(&self, luck: LuckLevel) -> Result<RewardDraw> {
        let tier = self.roll_tier(luck);
        let entry = self
            .sampler
            .draw_constrained(
                CatalogKind::Item,
                tier,
                &DrawConstraint::Drawable,
                self.config.max_draw_attempts,
            )
            .await?;
        Ok(RewardDraw::new(entry, tier))
    }

    async fn draw_ability(&self, luck: LuckLevel, role: &str) -> Result<RewardDraw> {
        let tier = self.roll_tier(luck);
        let entry = self
            .sampler
            .draw_constrained(
                CatalogKind::Ability,
                tier,
                &DrawConstraint::role_affinity(role),
                self.config.max_draw_attempts,
            )
            .await?;
        Ok(RewardDraw::new(entry, tier))
    }

    fn roll_tier(&self, luck: LuckLevel) -> reward_core::Rarity {
        let roll = self.rolls.roll();
        let tier = select(luck, roll);
        tracing::debug!(%luck, roll, %tier, "tier rolled");
        tier
    }
}
