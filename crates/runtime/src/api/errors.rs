//! Unified error types surfaced by the reward runtime.
//!
//! Wraps failures from the catalog oracle, repositories, and notifier so
//! callers can decide how to present them. Nothing here is retried.
use std::fmt;

use reward_core::{CatalogKind, ConfigError, Rarity};
use thiserror::Error;

pub use crate::oracle::OracleError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RewardError>;

#[derive(Debug, Error)]
pub enum RewardError {
    #[error("catalog has no {kind} at {tier} rarity")]
    CatalogLookupFailed { kind: CatalogKind, tier: Rarity },

    #[error("no acceptable {kind} at {tier} rarity after {attempts} draws")]
    ConstraintExhausted {
        kind: CatalogKind,
        tier: Rarity,
        attempts: u32,
    },

    #[error("reconciliation failed while {stage} the inventory")]
    ReconciliationFailed {
        stage: ReconcileStage,
        #[source]
        source: RepositoryError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("reward engine requires a {0} to be configured before building")]
    MissingCollaborator(&'static str),

    #[error("invalid reward configuration")]
    InvalidConfig(#[from] ConfigError),
}

/// Step of the confirm path that failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReconcileStage {
    /// Re-reading live inventory or role before the merge.
    Fetch,
    /// Writing the merged inventory.
    Persist,
}

impl fmt::Display for ReconcileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReconcileStage::Fetch => "fetching",
            ReconcileStage::Persist => "persisting",
        };
        write!(f, "{}", label)
    }
}

/// Failure reported by a [`Notifier`](super::Notifier) implementation.
#[derive(Debug, Clone, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);
