use chrono::{DateTime, TimeDelta, Utc};
use reward_core::{ChannelRef, InventoryState, MergeReport, PlayerId, RewardBatch, RewardPreview};

use crate::api::RewardError;

/// Resolution state of a staged batch.
///
/// A generated batch is a plain [`RewardBatch`]; once staged it is a
/// [`PendingApproval`] until resolved.
///
/// ```text
/// PendingApproval -> Reconciling -> Applied
///                 |              \-> Failed
///                 \-> Discarded (declined or expired)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ApprovalStatus {
    Reconciling,
    Applied,
    Discarded,
    Failed,
}

/// A batch waiting for an approver's decision.
///
/// Confirming, declining, or expiring consumes the value, so a resolved
/// batch cannot be resolved again.
#[derive(Debug)]
pub struct PendingApproval {
    batch: RewardBatch,
    preview: RewardPreview,
    approver_channel: ChannelRef,
    player_channel: ChannelRef,
    created_at: DateTime<Utc>,
}

impl PendingApproval {
    pub fn new(
        batch: RewardBatch,
        approver_channel: ChannelRef,
        player_channel: ChannelRef,
        created_at: DateTime<Utc>,
    ) -> Self {
        let preview = RewardPreview::from_batch(&batch);
        Self {
            batch,
            preview,
            approver_channel,
            player_channel,
            created_at,
        }
    }

    pub fn batch(&self) -> &RewardBatch {
        &self.batch
    }

    pub fn preview(&self) -> &RewardPreview {
        &self.preview
    }

    pub fn player(&self) -> &PlayerId {
        &self.batch.player
    }

    pub fn approver_channel(&self) -> &ChannelRef {
        &self.approver_channel
    }

    pub fn player_channel(&self) -> &ChannelRef {
        &self.player_channel
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True once `ttl_secs` have passed since staging.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        let Some(ttl) = i64::try_from(ttl_secs).ok().and_then(TimeDelta::try_seconds) else {
            return false;
        };
        now.signed_duration_since(self.created_at) >= ttl
    }

    pub(crate) fn into_parts(self) -> (RewardBatch, RewardPreview, ChannelRef, ChannelRef) {
        (
            self.batch,
            self.preview,
            self.approver_channel,
            self.player_channel,
        )
    }
}

/// Outcome of resolving a [`PendingApproval`].
#[derive(Debug)]
pub struct ApplyResult {
    pub status: ApprovalStatus,
    /// True only when the merged inventory was persisted.
    pub applied: bool,
    pub failure: Option<RewardError>,
    /// Per-draw merge outcomes; empty unless applied.
    pub report: MergeReport,
    /// The inventory as written, when applied.
    pub inventory: Option<InventoryState>,
    /// Set when the written inventory holds more items than its limit.
    pub overflow: bool,
}

impl ApplyResult {
    pub(crate) fn applied(inventory: InventoryState, report: MergeReport) -> Self {
        Self {
            status: ApprovalStatus::Applied,
            applied: true,
            failure: None,
            report,
            overflow: inventory.exceeds_item_limit(),
            inventory: Some(inventory),
        }
    }

    pub(crate) fn discarded() -> Self {
        Self {
            status: ApprovalStatus::Discarded,
            applied: false,
            failure: None,
            report: MergeReport::default(),
            inventory: None,
            overflow: false,
        }
    }

    pub(crate) fn failed(error: RewardError) -> Self {
        Self {
            status: ApprovalStatus::Failed,
            applied: false,
            failure: Some(error),
            report: MergeReport::default(),
            inventory: None,
            overflow: false,
        }
    }

    /// Human-readable failure, if any.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }
}
