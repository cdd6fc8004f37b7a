//! Errors raised by pure core operations.

use thiserror::Error;

/// Rejected [`RewardConfig`](crate::RewardConfig) values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_draw_attempts must be at least 1")]
    ZeroDrawAttempts,

    #[error("item rain range {min}..={max} is empty or starts at zero")]
    InvalidItemRainRange { min: u32, max: u32 },
}
