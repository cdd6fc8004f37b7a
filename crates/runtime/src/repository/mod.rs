//! Repository layer for mutable player data.
//!
//! Repositories handle data that CHANGES during play:
//! - Luck level and current role
//! - Items, ability charges, and item limit
//!
//! Static catalog content is handled by oracles, not repositories.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryInventoryRepo, InMemoryPlayerRepo, PlayerProfile};
pub use traits::{InventoryRepository, PlayerRepository};
