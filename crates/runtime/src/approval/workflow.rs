//! Confirm, decline, and expiry handling for staged batches.

use reward_core::{ChannelRef, InventoryState, MergeReport, PlayerId, RewardBatch};

use super::{ApplyResult, ApprovalStatus, PendingApproval};
use crate::api::{Notifier, ReconcileStage, Result, RewardError, RewardNotice};
use crate::events::{ApprovalEvent, EventBus};
use crate::repository::{InventoryRepository, PlayerRepository};

/// Borrowed view of the collaborators needed to resolve an approval.
pub(crate) struct ApprovalWorkflow<'a> {
    players: &'a dyn PlayerRepository,
    inventory: &'a dyn InventoryRepository,
    notifier: &'a dyn Notifier,
    events: &'a EventBus,
}

impl<'a> ApprovalWorkflow<'a> {
    pub(crate) fn new(
        players: &'a dyn PlayerRepository,
        inventory: &'a dyn InventoryRepository,
        notifier: &'a dyn Notifier,
        events: &'a EventBus,
    ) -> Self {
        Self {
            players,
            inventory,
            notifier,
            events,
        }
    }

    /// Reconciles the batch against live state and persists it.
    ///
    /// On success the display is refreshed and both channels are notified.
    /// On failure nothing is written and only the approver hears about it.
    pub(crate) async fn confirm(&self, pending: PendingApproval) -> ApplyResult {
        let (batch, preview, approver, player_channel) = pending.into_parts();
        tracing::debug!(
            player = %batch.player,
            kind = %batch.kind,
            status = %ApprovalStatus::Reconciling,
            "confirm received"
        );

        match self.reconcile(&batch).await {
            Ok((inventory, report)) => {
                let result = ApplyResult::applied(inventory, report);
                tracing::info!(
                    player = %batch.player,
                    kind = %batch.kind,
                    draws = batch.len(),
                    overflow = result.overflow,
                    "reward batch applied"
                );
                for outcome in result.report.role_mismatches() {
                    tracing::warn!(player = %batch.player, ?outcome, "role changed before confirm");
                }

                self.refresh(&batch.player).await;
                let notice = RewardNotice::Applied { preview };
                self.notify(&approver, &notice).await;
                self.notify(&player_channel, &notice).await;

                self.events.publish(ApprovalEvent::BatchApplied {
                    player: batch.player.clone(),
                    kind: batch.kind,
                    draws: batch.len(),
                    overflow: result.overflow,
                });
                result
            }
            Err(error) => {
                let reason = error.to_string();
                tracing::warn!(
                    player = %batch.player,
                    kind = %batch.kind,
                    error = %reason,
                    "reward batch failed"
                );

                self.notify(
                    &approver,
                    &RewardNotice::Failed {
                        preview,
                        reason: reason.clone(),
                    },
                )
                .await;

                self.events.publish(ApprovalEvent::BatchFailed {
                    player: batch.player.clone(),
                    kind: batch.kind,
                    error: reason,
                });
                ApplyResult::failed(error)
            }
        }
    }

    /// Discards the batch without touching the inventory.
    pub(crate) async fn decline(&self, pending: PendingApproval) -> ApplyResult {
        let (batch, preview, approver, _) = pending.into_parts();
        tracing::info!(player = %batch.player, kind = %batch.kind, "reward batch declined");

        self.notify(&approver, &RewardNotice::Declined { preview })
            .await;
        self.events.publish(ApprovalEvent::BatchDeclined {
            player: batch.player,
            kind: batch.kind,
        });
        ApplyResult::discarded()
    }

    /// Discards a batch nobody answered in time.
    pub(crate) async fn expire(&self, pending: PendingApproval) -> ApplyResult {
        let (batch, preview, approver, _) = pending.into_parts();
        tracing::info!(player = %batch.player, kind = %batch.kind, "reward batch expired");

        self.notify(&approver, &RewardNotice::Expired { preview })
            .await;
        self.events.publish(ApprovalEvent::BatchExpired {
            player: batch.player,
            kind: batch.kind,
        });
        ApplyResult::discarded()
    }

    async fn reconcile(&self, batch: &RewardBatch) -> Result<(InventoryState, MergeReport)> {
        let player = &batch.player;
        let fetch_failed = |source| RewardError::ReconciliationFailed {
            stage: ReconcileStage::Fetch,
            source,
        };

        let mut live = self
            .inventory
            .fetch_live(player)
            .await
            .map_err(fetch_failed)?;

        // Items merge the same way for every role.
        let role = if batch.abilities().next().is_some() {
            self.players.role(player).await.map_err(fetch_failed)?
        } else {
            String::new()
        };

        let report = live.merge_draws(&batch.draws, &role);

        self.inventory
            .apply_batch(player, live.items.clone(), live.abilities.clone())
            .await
            .map_err(|source| RewardError::ReconciliationFailed {
                stage: ReconcileStage::Persist,
                source,
            })?;

        Ok((live, report))
    }

    async fn refresh(&self, player: &PlayerId) {
        if let Err(error) = self.notifier.refresh_inventory_display(player).await {
            tracing::warn!(%player, %error, "inventory display refresh failed");
        }
    }

    async fn notify(&self, channel: &ChannelRef, notice: &RewardNotice) {
        if let Err(error) = self.notifier.notify_channel(channel, notice).await {
            tracing::warn!(%channel, status = notice.status(), %error, "notification failed");
        }
    }
}
