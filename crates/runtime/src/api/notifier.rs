//! Outbound messages sent when a staged batch is resolved.
//!
//! The engine decides who hears about what; a [`Notifier`] only knows how to
//! deliver. Rendering notices into chat embeds or console text is up to the
//! implementation.

use async_trait::async_trait;
use reward_core::{ChannelRef, PlayerId, RewardPreview};

use super::errors::NotifyError;

/// What a notice reports about a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewardNotice {
    /// The batch was merged into the live inventory.
    Applied { preview: RewardPreview },
    /// The approver rejected the batch; nothing was written.
    Declined { preview: RewardPreview },
    /// Confirmation failed; nothing was written.
    Failed {
        preview: RewardPreview,
        reason: String,
    },
    /// Nobody answered within the approval window.
    Expired { preview: RewardPreview },
}

impl RewardNotice {
    pub fn preview(&self) -> &RewardPreview {
        match self {
            RewardNotice::Applied { preview }
            | RewardNotice::Declined { preview }
            | RewardNotice::Failed { preview, .. }
            | RewardNotice::Expired { preview } => preview,
        }
    }

    /// Short status word for logs and headings.
    pub fn status(&self) -> &'static str {
        match self {
            RewardNotice::Applied { .. } => "applied",
            RewardNotice::Declined { .. } => "declined",
            RewardNotice::Failed { .. } => "failed",
            RewardNotice::Expired { .. } => "expired",
        }
    }
}

/// Delivery of reward notices and inventory display refreshes.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a notice to a channel.
    async fn notify_channel(
        &self,
        channel: &ChannelRef,
        notice: &RewardNotice,
    ) -> Result<(), NotifyError>;

    /// Re-render the player's inventory wherever it is displayed.
    async fn refresh_inventory_display(&self, player: &PlayerId) -> Result<(), NotifyError>;
}

/// Notifier that drops everything. Used when no delivery layer is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify_channel(
        &self,
        _channel: &ChannelRef,
        _notice: &RewardNotice,
    ) -> Result<(), NotifyError> {
        Ok(())
    }

    async fn refresh_inventory_display(&self, _player: &PlayerId) -> Result<(), NotifyError> {
        Ok(())
    }
}
