//! Data-driven reward content and loaders.
//!
//! This crate reads the static and seed data the reward engine runs against:
//! - Item and ability catalogs (data-driven via RON)
//! - Player roster with luck, role, and inventory (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! All loaders deserialize straight into `reward-core` types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    Catalog, CatalogLoader, ConfigLoader, ContentFactory, PlayerLoader, PlayerRecord,
};
