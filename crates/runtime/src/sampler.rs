//! Constrained catalog sampling with a bounded retry loop.
//!
//! A draw is taken at a fixed tier and tested against a predicate. Rejected
//! draws are resampled at the same tier, never re-rolled to a different one,
//! and the loop stops after `max_attempts` catalog draws with
//! [`RewardError::ConstraintExhausted`].

use reward_core::{CatalogEntry, CatalogKind, Rarity};

use crate::api::{Result, RewardError};
use crate::oracle::CatalogOracle;

/// Acceptance test for a sampled catalog entry.
pub trait DrawPredicate: Send + Sync {
    fn accepts(&self, entry: &CatalogEntry) -> bool;
}

impl<F> DrawPredicate for F
where
    F: Fn(&CatalogEntry) -> bool + Send + Sync,
{
    fn accepts(&self, entry: &CatalogEntry) -> bool {
        self(entry)
    }
}

/// The two constraint families applied by batch building.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawConstraint {
    /// Items: anything outside the `Unique` and `RoleSpecific` tiers.
    Drawable,
    /// Abilities: any-abilities, or role-specific ones for this role.
    RoleAffinity { role: String },
}

impl DrawConstraint {
    pub fn role_affinity(role: impl Into<String>) -> Self {
        Self::RoleAffinity { role: role.into() }
    }
}

impl DrawPredicate for DrawConstraint {
    fn accepts(&self, entry: &CatalogEntry) -> bool {
        match self {
            DrawConstraint::Drawable => entry.is_randomly_drawable(),
            DrawConstraint::RoleAffinity { role } => {
                entry.is_randomly_drawable() && entry.is_usable_by(role)
            }
        }
    }
}

/// Draws catalog entries until one satisfies a predicate.
pub struct ConstrainedSampler<'a> {
    catalog: &'a dyn CatalogOracle,
}

impl<'a> ConstrainedSampler<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle) -> Self {
        Self { catalog }
    }

    /// Draws a `kind` entry at `tier` accepted by `predicate`.
    ///
    /// # Errors
    ///
    /// - [`RewardError::CatalogLookupFailed`] as soon as the catalog has no
    ///   entry at all for `(kind, tier)`
    /// - [`RewardError::ConstraintExhausted`] after `max_attempts` rejected
    ///   draws
    /// - [`RewardError::Oracle`] if the catalog backend fails
    pub async fn draw_constrained(
        &self,
        kind: CatalogKind,
        tier: Rarity,
        predicate: &dyn DrawPredicate,
        max_attempts: u32,
    ) -> Result<CatalogEntry> {
        for attempt in 1..=max_attempts {
            let entry = self
                .catalog
                .random_entry(kind, tier)
                .await?
                .ok_or(RewardError::CatalogLookupFailed { kind, tier })?;

            if predicate.accepts(&entry) {
                tracing::debug!(%kind, %tier, attempt, name = %entry.name, "draw accepted");
                return Ok(entry);
            }

            tracing::debug!(%kind, %tier, attempt, name = %entry.name, "draw rejected, resampling");
        }

        tracing::warn!(%kind, %tier, max_attempts, "constraint exhausted");
        Err(RewardError::ConstraintExhausted {
            kind,
            tier,
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::oracle::OracleError;

    /// Hands out queued entries in order and records the tier of each draw.
    struct ScriptedCatalog {
        entries: Mutex<VecDeque<CatalogEntry>>,
        tiers: Mutex<Vec<Rarity>>,
    }

    impl ScriptedCatalog {
        fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
            Self {
                entries: Mutex::new(entries.into_iter().collect()),
                tiers: Mutex::new(Vec::new()),
            }
        }

        fn tiers(&self) -> Vec<Rarity> {
            self.tiers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogOracle for ScriptedCatalog {
        async fn random_entry(
            &self,
            _kind: CatalogKind,
            tier: Rarity,
        ) -> std::result::Result<Option<CatalogEntry>, OracleError> {
            self.tiers.lock().unwrap().push(tier);
            Ok(self.entries.lock().unwrap().pop_front())
        }
    }

    #[tokio::test]
    async fn unique_draw_is_resampled_at_same_tier() {
        let catalog = ScriptedCatalog::new([
            CatalogEntry::item("Crown of the Town", "One of a kind", Rarity::Unique),
            CatalogEntry::item("Lantern", "Lights the way", Rarity::Rare),
        ]);
        let sampler = ConstrainedSampler::new(&catalog);

        let entry = sampler
            .draw_constrained(CatalogKind::Item, Rarity::Rare, &DrawConstraint::Drawable, 10)
            .await
            .unwrap();

        assert_eq!(entry.name, "Lantern");
        assert_eq!(catalog.tiers(), vec![Rarity::Rare, Rarity::Rare]);
    }

    #[tokio::test]
    async fn other_role_ability_is_resampled_at_same_tier() {
        let catalog = ScriptedCatalog::new([
            CatalogEntry::ability("Investigate", "Learn a role", Rarity::Epic).with_role("Detective"),
            CatalogEntry::ability("Shield", "Blocks one kill", Rarity::Epic),
        ]);
        let sampler = ConstrainedSampler::new(&catalog);

        let entry = sampler
            .draw_constrained(
                CatalogKind::Ability,
                Rarity::Epic,
                &DrawConstraint::role_affinity("Coroner"),
                10,
            )
            .await
            .unwrap();

        assert_eq!(entry.name, "Shield");
        assert!(entry.is_any_ability());
        assert_eq!(catalog.tiers(), vec![Rarity::Epic, Rarity::Epic]);
    }

    #[tokio::test]
    async fn attempt_limit_counts_every_draw() {
        let catalog = ScriptedCatalog::new(
            std::iter::repeat_with(|| CatalogEntry::item("Crown", "", Rarity::Unique)).take(5),
        );
        let sampler = ConstrainedSampler::new(&catalog);

        let error = sampler
            .draw_constrained(CatalogKind::Item, Rarity::Common, &DrawConstraint::Drawable, 3)
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            RewardError::ConstraintExhausted { attempts: 3, .. }
        ));
        assert_eq!(catalog.tiers().len(), 3);
    }

    #[test]
    fn drawable_rejects_unique() {
        let constraint = DrawConstraint::Drawable;
        assert!(constraint.accepts(&CatalogEntry::item("Rope", "", Rarity::Common)));
        assert!(!constraint.accepts(&CatalogEntry::item("Crown", "", Rarity::Unique)));
    }

    #[test]
    fn role_affinity_accepts_any_or_own_role() {
        let constraint = DrawConstraint::role_affinity("Coroner");
        let any = CatalogEntry::ability("Shield", "", Rarity::Rare);
        let own = CatalogEntry::ability("Autopsy", "", Rarity::Rare).with_role("Coroner");
        let other = CatalogEntry::ability("Investigate", "", Rarity::Rare).with_role("Detective");

        assert!(constraint.accepts(&any));
        assert!(constraint.accepts(&own));
        assert!(!constraint.accepts(&other));
    }

    #[test]
    fn closures_are_predicates() {
        let only_shield = |entry: &CatalogEntry| entry.name == "Shield";
        assert!(only_shield.accepts(&CatalogEntry::ability("Shield", "", Rarity::Rare)));
    }
}
