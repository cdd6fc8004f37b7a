//! High-level reward engine.
//!
//! The engine owns the collaborators, builds batches on request, and routes
//! approver decisions through the approval workflow. It is cheap to clone and
//! safe to share across tasks: every collaborator sits behind an `Arc`.

use std::sync::Arc;

use chrono::Utc;
use reward_core::{
    BatchKind, ChannelRef, LuckLevel, PlayerId, RewardBatch, RewardConfig, RewardPreview,
};
use tokio::sync::broadcast;

use crate::api::{NoopNotifier, Notifier, Result, RewardError};
use crate::approval::{ApplyResult, ApprovalWorkflow, PendingApproval};
use crate::batch::BatchBuilder;
use crate::events::{Event, EventBus, GenerationEvent, Topic};
use crate::oracle::CatalogOracle;
use crate::repository::{InventoryRepository, PlayerRepository};
use crate::rolls::{RollSource, ThreadRolls};
use crate::sampler::ConstrainedSampler;

/// Entry point for generating and resolving reward batches.
#[derive(Clone)]
pub struct RewardEngine {
    catalog: Arc<dyn CatalogOracle>,
    players: Arc<dyn PlayerRepository>,
    inventory: Arc<dyn InventoryRepository>,
    notifier: Arc<dyn Notifier>,
    rolls: Arc<dyn RollSource>,
    config: RewardConfig,
    events: EventBus,
}

impl RewardEngine {
    /// Create a new engine builder
    pub fn builder() -> RewardEngineBuilder {
        RewardEngineBuilder::new()
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Subscribe to reward events on a topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Builds a tentative batch for `player`. Nothing is persisted.
    ///
    /// `luck_override` replaces the stored luck for this batch's tier rolls
    /// only; the stored value is left untouched.
    pub async fn generate_batch(
        &self,
        kind: BatchKind,
        player: &PlayerId,
        luck_override: Option<LuckLevel>,
    ) -> Result<RewardBatch> {
        let result = self.build_batch(kind, player, luck_override).await;

        match &result {
            Ok(batch) => {
                tracing::info!(
                    %player,
                    %kind,
                    luck = %batch.luck,
                    overridden = batch.luck_overridden,
                    draws = batch.len(),
                    "reward batch generated"
                );
                self.events.publish(GenerationEvent::BatchGenerated {
                    player: player.clone(),
                    kind,
                    luck: batch.luck,
                    luck_overridden: batch.luck_overridden,
                    draws: batch.len(),
                });
            }
            Err(error) => {
                tracing::warn!(%player, %kind, %error, "reward batch generation failed");
                self.events.publish(GenerationEvent::GenerationFailed {
                    player: player.clone(),
                    kind,
                    error: error.to_string(),
                });
            }
        }

        result
    }

    /// Structured preview of a batch, projected onto its generation-time snapshot.
    pub fn render_preview(&self, batch: &RewardBatch) -> RewardPreview {
        RewardPreview::from_batch(batch)
    }

    /// Holds `batch` for a decision from `approver_channel`.
    pub fn stage(
        &self,
        batch: RewardBatch,
        approver_channel: ChannelRef,
        player_channel: ChannelRef,
    ) -> PendingApproval {
        PendingApproval::new(batch, approver_channel, player_channel, Utc::now())
    }

    /// True once the pending batch has outlived the configured approval window.
    pub fn is_expired(&self, pending: &PendingApproval) -> bool {
        pending.is_expired(Utc::now(), self.config.approval_ttl_secs)
    }

    /// Reconciles and persists a confirmed batch.
    ///
    /// Failures are reported through the returned [`ApplyResult`], never
    /// retried, and leave the stored inventory untouched.
    pub async fn on_confirm(&self, pending: PendingApproval) -> ApplyResult {
        self.workflow().confirm(pending).await
    }

    /// Discards a declined batch and tells the approver.
    pub async fn on_decline(&self, pending: PendingApproval) -> ApplyResult {
        self.workflow().decline(pending).await
    }

    /// Discards a batch whose approval window ran out.
    pub async fn on_expire(&self, pending: PendingApproval) -> ApplyResult {
        self.workflow().expire(pending).await
    }

    async fn build_batch(
        &self,
        kind: BatchKind,
        player: &PlayerId,
        luck_override: Option<LuckLevel>,
    ) -> Result<RewardBatch> {
        let (luck, luck_overridden) = match luck_override {
            Some(luck) => (luck, true),
            None => (self.players.luck(player).await?, false),
        };
        let preview_inventory = self.inventory.fetch_live(player).await?;

        let sampler = ConstrainedSampler::new(self.catalog.as_ref());
        let builder = BatchBuilder::new(sampler, self.rolls.as_ref(), &self.config);

        // Item Rain never reads the role.
        let role = if kind.includes_abilities() {
            self.players.role(player).await?
        } else {
            String::new()
        };
        let draws = match kind {
            BatchKind::ItemRain => builder.item_rain(luck).await?,
            BatchKind::CarePackage => builder.care_package(luck, &role).await?,
            BatchKind::PowerDrop => builder.power_drop(luck, &role).await?,
        };

        Ok(RewardBatch {
            kind,
            player: player.clone(),
            luck,
            luck_overridden,
            draws,
            preview_inventory,
        })
    }

    fn workflow(&self) -> ApprovalWorkflow<'_> {
        ApprovalWorkflow::new(
            self.players.as_ref(),
            self.inventory.as_ref(),
            self.notifier.as_ref(),
            &self.events,
        )
    }
}

/// Builder for [`RewardEngine`].
///
/// The catalog oracle and both repositories are required. The notifier
/// defaults to [`NoopNotifier`] and rolls default to [`ThreadRolls`].
pub struct RewardEngineBuilder {
    config: RewardConfig,
    event_buffer_size: usize,
    catalog: Option<Arc<dyn CatalogOracle>>,
    players: Option<Arc<dyn PlayerRepository>>,
    inventory: Option<Arc<dyn InventoryRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    rolls: Option<Arc<dyn RollSource>>,
}

impl RewardEngineBuilder {
    fn new() -> Self {
        Self {
            config: RewardConfig::default(),
            event_buffer_size: 100,
            catalog: None,
            players: None,
            inventory: None,
            notifier: None,
            rolls: None,
        }
    }

    /// Override reward configuration
    pub fn config(mut self, config: RewardConfig) -> Self {
        self.config = config;
        self
    }

    /// Capacity of each event topic
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = size;
        self
    }

    /// Set required catalog oracle
    pub fn catalog(mut self, catalog: Arc<dyn CatalogOracle>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set required player repository
    pub fn players(mut self, players: Arc<dyn PlayerRepository>) -> Self {
        self.players = Some(players);
        self
    }

    /// Set required inventory repository
    pub fn inventory(mut self, inventory: Arc<dyn InventoryRepository>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Set notifier (optional)
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Set roll source (optional)
    pub fn rolls(mut self, rolls: Arc<dyn RollSource>) -> Self {
        self.rolls = Some(rolls);
        self
    }

    /// Build the engine, validating configuration and collaborators
    pub fn build(self) -> Result<RewardEngine> {
        self.config.validate()?;

        let catalog = self
            .catalog
            .ok_or(RewardError::MissingCollaborator("catalog oracle"))?;
        let players = self
            .players
            .ok_or(RewardError::MissingCollaborator("player repository"))?;
        let inventory = self
            .inventory
            .ok_or(RewardError::MissingCollaborator("inventory repository"))?;

        Ok(RewardEngine {
            catalog,
            players,
            inventory,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(NoopNotifier)),
            rolls: self.rolls.unwrap_or_else(|| Arc::new(ThreadRolls)),
            config: self.config,
            events: EventBus::with_capacity(self.event_buffer_size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::CatalogOracleImpl;
    use crate::repository::{InMemoryInventoryRepo, InMemoryPlayerRepo};

    #[test]
    fn build_requires_catalog() {
        let result = RewardEngine::builder()
            .players(Arc::new(InMemoryPlayerRepo::new()))
            .inventory(Arc::new(InMemoryInventoryRepo::new()))
            .build();

        assert!(matches!(
            result,
            Err(RewardError::MissingCollaborator("catalog oracle"))
        ));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let result = RewardEngine::builder()
            .config(RewardConfig::new().with_max_draw_attempts(0))
            .catalog(Arc::new(CatalogOracleImpl::new()))
            .players(Arc::new(InMemoryPlayerRepo::new()))
            .inventory(Arc::new(InMemoryInventoryRepo::new()))
            .build();

        assert!(matches!(result, Err(RewardError::InvalidConfig(_))));
    }
}
