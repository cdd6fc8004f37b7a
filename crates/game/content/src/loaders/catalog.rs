//! Item and ability catalog loader.

use std::path::Path;

use reward_core::{CatalogEntry, CatalogKind, Rarity};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One catalog row as written in RON. The kind comes from the list it sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogRecord {
    name: String,
    description: String,
    rarity: Rarity,
    #[serde(default)]
    role_specific: Option<String>,
}

impl CatalogRecord {
    fn into_entry(self, kind: CatalogKind) -> CatalogEntry {
        CatalogEntry {
            name: self.name,
            description: self.description,
            rarity: self.rarity,
            kind,
            role_specific: self.role_specific,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogRecord>,
    #[serde(default)]
    abilities: Vec<CatalogRecord>,
}

/// Parsed catalog split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub items: Vec<CatalogEntry>,
    pub abilities: Vec<CatalogEntry>,
}

impl Catalog {
    /// All entries, items first.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.items.iter().chain(self.abilities.iter())
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.items.into_iter().chain(self.abilities).collect()
    }
}

/// Loader for the item/ability catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     items: [(name: "Rope", description: "Sturdy", rarity: Common)],
    ///     abilities: [
    ///         (name: "Shield", description: "Blocks a kill", rarity: Rare),
    ///         (name: "Autopsy", description: "Inspect a body", rarity: Epic,
    ///          role_specific: Some("Coroner")),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Ok(Catalog {
            items: file
                .items
                .into_iter()
                .map(|record| record.into_entry(CatalogKind::Item))
                .collect(),
            abilities: file
                .abilities
                .into_iter()
                .map(|record| record.into_entry(CatalogKind::Ability))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_kind_from_section() {
        let catalog = CatalogLoader::parse(
            r#"(
                items: [(name: "Rope", description: "Sturdy", rarity: Common)],
                abilities: [
                    (name: "Shield", description: "Blocks a kill", rarity: Rare),
                    (name: "Autopsy", description: "Inspect a body", rarity: Epic,
                     role_specific: Some("Coroner")),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].kind, CatalogKind::Item);
        assert!(catalog.abilities[0].is_any_ability());
        assert_eq!(catalog.abilities[1].role(), Some("Coroner"));
        assert_eq!(catalog.entries().count(), 3);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = CatalogLoader::parse("(items: [])").unwrap();
        assert!(catalog.abilities.is_empty());
    }

    #[test]
    fn unknown_rarity_is_rejected() {
        let result = CatalogLoader::parse(
            r#"(items: [(name: "Rope", description: "Sturdy", rarity: Shiny)])"#,
        );
        assert!(result.is_err());
    }
}
