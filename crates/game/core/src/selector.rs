//! Tier selection from a luck level and a uniform roll.

use crate::curve::distribution;
use crate::rarity::Rarity;
use crate::state::LuckLevel;

/// Luck level from which every selection yields `Mythical`.
///
/// This shortcut bypasses the curves entirely and can disagree with them;
/// below it the cumulative walk decides.
pub const SATURATION_LEVEL: u32 = 398;

/// Picks a tier for `level` using `roll`, a uniform draw from `[0, 1)`.
///
/// Walks the cumulative chances in ascending rarity and returns the first tier
/// whose running total exceeds `roll`. When clamping leaves the chances summing
/// below `roll`, the walk falls through to `Mythical`.
pub fn select(level: LuckLevel, roll: f64) -> Rarity {
    if level.get() >= SATURATION_LEVEL {
        return Rarity::Mythical;
    }

    let mut cumulative = 0.0;
    for (tier, probability) in distribution(level) {
        cumulative += probability;
        if cumulative > roll {
            return tier;
        }
    }

    Rarity::Mythical
}
