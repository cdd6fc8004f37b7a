//! Rarity tiers for catalog entries.
//!
//! The six drawable tiers are ordered from most to least common. The derived
//! `Ord` follows declaration order, so `Common < Uncommon < ... < Mythical`
//! holds and cumulative selection can walk [`Rarity::DRAWABLE`] front to back.
//!
//! `Unique` and `RoleSpecific` sort after the drawable tiers and never come
//! out of a random roll.

/// Quality class of an item or ability.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
    /// One-of-a-kind entries handed out manually.
    Unique,
    /// Entries reserved for a single role, granted outside random draws.
    RoleSpecific,
}

impl Rarity {
    /// Tiers eligible for random draws, in ascending rarity.
    pub const DRAWABLE: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Returns true if the selector can produce this tier.
    pub const fn is_drawable(self) -> bool {
        !matches!(self, Rarity::Unique | Rarity::RoleSpecific)
    }
}
