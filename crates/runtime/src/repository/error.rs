//! Error types raised by repository implementations.

use reward_core::PlayerId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
