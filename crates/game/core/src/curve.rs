//! Rarity chance curves.
//!
//! Each drawable tier maps a luck level to a probability with the same
//! piecewise template:
//!
//! ```text
//! rising(level)  = base + rising_slope * level                        (level <= flip)
//! falling(level) = chance(flip) - falling_slope * (level - flip)      (level >  flip)
//! chance(level)  = clamp(round4(...), 0, 1)
//! ```
//!
//! `Common` and `Mythical` have no flip point: Common only decays, Mythical
//! only grows and is clamped at exactly 1.0. At level 0 the six chances sum to
//! 1.0.
//!
//! `Rare` at level 48 is a literal 0.49 rather than the formula's 0.50. The
//! falling branch starts from `chance(flip)`, so Rare falls from 0.49.

use crate::rarity::Rarity;
use crate::state::LuckLevel;

/// Level at which [`rare_chance`] returns [`RARE_IRREGULAR_CHANCE`].
pub const RARE_IRREGULAR_LEVEL: u32 = 48;

/// Fixed Rare chance at [`RARE_IRREGULAR_LEVEL`].
pub const RARE_IRREGULAR_CHANCE: f64 = 0.49;

/// Parameters of one tier's piecewise curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChanceCurve {
    pub base: f64,
    pub rising_slope: f64,
    /// Level where growth reverses. `None` means monotone.
    pub flip: Option<u32>,
    pub falling_slope: f64,
}

impl ChanceCurve {
    pub const COMMON: Self = Self::monotone(0.800, -0.050);
    pub const UNCOMMON: Self = Self::flipping(0.150, 0.030, 16, 0.020);
    pub const RARE: Self = Self::flipping(0.020, 0.010, 48, 0.010);
    pub const EPIC: Self = Self::flipping(0.015, 0.005, 98, 0.005);
    pub const LEGENDARY: Self = Self::flipping(0.010, 0.0025, 198, 0.0025);
    pub const MYTHICAL: Self = Self::monotone(0.005, 0.0025);

    const fn monotone(base: f64, rising_slope: f64) -> Self {
        Self {
            base,
            rising_slope,
            flip: None,
            falling_slope: 0.0,
        }
    }

    const fn flipping(base: f64, rising_slope: f64, flip: u32, falling_slope: f64) -> Self {
        Self {
            base,
            rising_slope,
            flip: Some(flip),
            falling_slope,
        }
    }

    /// Curve for a tier, or `None` for tiers that are never drawn.
    pub const fn for_tier(tier: Rarity) -> Option<Self> {
        match tier {
            Rarity::Common => Some(Self::COMMON),
            Rarity::Uncommon => Some(Self::UNCOMMON),
            Rarity::Rare => Some(Self::RARE),
            Rarity::Epic => Some(Self::EPIC),
            Rarity::Legendary => Some(Self::LEGENDARY),
            Rarity::Mythical => Some(Self::MYTHICAL),
            Rarity::Unique | Rarity::RoleSpecific => None,
        }
    }

    fn rising(&self, level: f64) -> f64 {
        self.base + self.rising_slope * level
    }

    /// Evaluates the curve, rounded to four decimals and clamped to `[0, 1]`.
    ///
    /// Past the flip point the curve falls from `peak`, the chance at the
    /// flip point itself.
    fn evaluate(&self, level: LuckLevel, peak: impl FnOnce(u32) -> f64) -> f64 {
        let raw = match self.flip {
            Some(flip) if level.get() > flip => {
                peak(flip) - self.falling_slope * f64::from(level.get() - flip)
            }
            _ => self.rising(level.as_f64()),
        };
        round4(raw).clamp(0.0, 1.0)
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Probability of drawing `tier` at `level`.
///
/// Non-drawable tiers always return 0.
pub fn chance(tier: Rarity, level: LuckLevel) -> f64 {
    if tier == Rarity::Rare && level.get() == RARE_IRREGULAR_LEVEL {
        return RARE_IRREGULAR_CHANCE;
    }
    ChanceCurve::for_tier(tier).map_or(0.0, |curve| {
        curve.evaluate(level, |flip| chance(tier, LuckLevel::new(flip)))
    })
}

/// Chances of all drawable tiers at `level`, in ascending rarity.
pub fn distribution(level: LuckLevel) -> [(Rarity, f64); 6] {
    Rarity::DRAWABLE.map(|tier| (tier, chance(tier, level)))
}

pub fn common_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Common, level)
}

pub fn uncommon_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Uncommon, level)
}

pub fn rare_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Rare, level)
}

pub fn epic_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Epic, level)
}

pub fn legendary_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Legendary, level)
}

pub fn mythical_chance(level: LuckLevel) -> f64 {
    chance(Rarity::Mythical, level)
}
