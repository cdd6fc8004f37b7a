//! Event types for different topics.

use reward_core::{BatchKind, LuckLevel, PlayerId};
use serde::{Deserialize, Serialize};

/// Events emitted while building batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationEvent {
    /// A batch was built and is ready for preview.
    BatchGenerated {
        player: PlayerId,
        kind: BatchKind,
        luck: LuckLevel,
        luck_overridden: bool,
        draws: usize,
    },

    /// Building a batch failed; nothing was staged.
    GenerationFailed {
        player: PlayerId,
        kind: BatchKind,
        error: String,
    },
}

/// Events emitted when a staged batch reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalEvent {
    BatchApplied {
        player: PlayerId,
        kind: BatchKind,
        draws: usize,
        overflow: bool,
    },

    BatchDeclined { player: PlayerId, kind: BatchKind },

    BatchFailed {
        player: PlayerId,
        kind: BatchKind,
        error: String,
    },

    BatchExpired { player: PlayerId, kind: BatchKind },
}
