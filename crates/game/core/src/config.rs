use crate::error::ConfigError;

/// Tunable parameters for reward generation and approval.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Catalog draws attempted per reward before giving up on a constraint.
    pub max_draw_attempts: u32,
    /// Smallest number of items in an Item Rain.
    pub item_rain_min: u32,
    /// Largest number of items in an Item Rain.
    pub item_rain_max: u32,
    /// How long a staged batch may wait for a decision, in seconds.
    ///
    /// The engine only reports expiry; the interaction layer decides when to
    /// act on it.
    pub approval_ttl_secs: u64,
}

impl RewardConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_DRAW_ATTEMPTS: u32 = 10;
    pub const DEFAULT_ITEM_RAIN_MIN: u32 = 1;
    pub const DEFAULT_ITEM_RAIN_MAX: u32 = 3;
    pub const DEFAULT_APPROVAL_TTL_SECS: u64 = 15 * 60;

    pub fn new() -> Self {
        Self {
            max_draw_attempts: Self::DEFAULT_MAX_DRAW_ATTEMPTS,
            item_rain_min: Self::DEFAULT_ITEM_RAIN_MIN,
            item_rain_max: Self::DEFAULT_ITEM_RAIN_MAX,
            approval_ttl_secs: Self::DEFAULT_APPROVAL_TTL_SECS,
        }
    }

    pub fn with_max_draw_attempts(mut self, attempts: u32) -> Self {
        self.max_draw_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_draw_attempts == 0 {
            return Err(ConfigError::ZeroDrawAttempts);
        }
        if self.item_rain_min == 0 || self.item_rain_min > self.item_rain_max {
            return Err(ConfigError::InvalidItemRainRange {
                min: self.item_rain_min,
                max: self.item_rain_max,
            });
        }
        Ok(())
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self::new()
    }
}
