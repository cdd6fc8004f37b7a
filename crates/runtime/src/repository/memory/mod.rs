//! In-memory repository implementations for tests and local runs.

mod inventory;
mod players;

pub use inventory::InMemoryInventoryRepo;
pub use players::{InMemoryPlayerRepo, PlayerProfile};
