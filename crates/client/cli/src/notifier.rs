//! Notifier that prints notices to the terminal.
use async_trait::async_trait;
use console::style;
use reward_core::{ChannelRef, PlayerId};
use reward_runtime::{Notifier, NotifyError, RewardNotice};

/// Prints each notice as a one-line message addressed to its channel.
///
/// Quiet mode suppresses output so JSON stays machine-readable on stdout.
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify_channel(
        &self,
        channel: &ChannelRef,
        notice: &RewardNotice,
    ) -> Result<(), NotifyError> {
        if self.quiet {
            return Ok(());
        }

        let preview = notice.preview();
        let line = match notice {
            RewardNotice::Applied { .. } => style(format!(
                "{} for {} was added to their inventory",
                preview.label, preview.player
            ))
            .green(),
            RewardNotice::Declined { .. } => style(format!(
                "{} for {} was declined",
                preview.label, preview.player
            ))
            .yellow(),
            RewardNotice::Failed { reason, .. } => style(format!(
                "{} for {} could not be applied: {reason}",
                preview.label, preview.player
            ))
            .red(),
            RewardNotice::Expired { .. } => style(format!(
                "{} for {} expired without a decision",
                preview.label, preview.player
            ))
            .dim(),
        };
        println!("[#{channel}] {line}");
        Ok(())
    }

    async fn refresh_inventory_display(&self, player: &PlayerId) -> Result<(), NotifyError> {
        tracing::debug!(%player, "inventory display refreshed");
        Ok(())
    }
}
