//! Player-facing state the reward engine reads and merges into.
//!
//! Nothing here is authoritative on its own: the runtime fetches these values
//! from repositories, and the inventory merge runs against whatever the
//! repository returned at confirmation time.
mod inventory;
mod player;

pub use inventory::{AbilityStack, InventoryState, ItemStack, MergeOutcome, MergeReport};
pub use player::{ChannelRef, LuckLevel, PlayerId};
