//! Topic-based event bus for reward lifecycle events.
//!
//! Events are published to a topic, and consumers subscribe only to the
//! topics they need. Publishing is best-effort.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ApprovalEvent, GenerationEvent};
