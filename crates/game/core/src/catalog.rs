//! Catalog records for items and abilities.
//!
//! Entries come from an external catalog (see `reward-content` loaders and the
//! runtime `CatalogOracle`). The core only needs enough of each record to
//! filter draws and to describe them in a preview.
use crate::rarity::Rarity;

/// Which catalog an entry belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CatalogKind {
    Item,
    Ability,
}

/// An item or ability record.
///
/// `role_specific` is only meaningful for abilities: `None` (or an empty
/// string from older data) marks an any-ability usable by every role.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub kind: CatalogKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role_specific: Option<String>,
}

impl CatalogEntry {
    pub fn item(name: impl Into<String>, description: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rarity,
            kind: CatalogKind::Item,
            role_specific: None,
        }
    }

    pub fn ability(
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rarity,
            kind: CatalogKind::Ability,
            role_specific: None,
        }
    }

    /// Restricts this entry to a single role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role_specific = Some(role.into());
        self
    }

    /// Role this entry is restricted to, if any.
    pub fn role(&self) -> Option<&str> {
        self.role_specific
            .as_deref()
            .filter(|role| !role.trim().is_empty())
    }

    pub fn is_any_ability(&self) -> bool {
        self.kind == CatalogKind::Ability && self.role().is_none()
    }

    /// Role-affinity check: any-abilities pass, role-specific abilities pass
    /// only for their own role. Items always pass.
    pub fn is_usable_by(&self, role: &str) -> bool {
        match self.kind {
            CatalogKind::Item => true,
            CatalogKind::Ability => self.role().is_none_or(|required| required == role),
        }
    }

    /// Drawability check: `Unique` and `RoleSpecific` tiers never come out of
    /// a random draw.
    pub fn is_randomly_drawable(&self) -> bool {
        self.rarity.is_drawable()
    }
}
