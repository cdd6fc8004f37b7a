//! Runtime orchestration for luck-driven reward batches.
//!
//! This crate wires the pure reward math in `reward-core` to live
//! collaborators: a catalog oracle, player and inventory repositories, and a
//! notifier. Consumers embed [`RewardEngine`] to generate tentative batches,
//! stage them for approval, and resolve them.
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the engine and its builder
//! - [`api`] exposes errors and the notifier contract
//! - [`approval`] holds pending batches and the confirm/decline workflow
//! - [`batch`] and [`sampler`] turn tier rolls into catalog draws
//! - [`events`] provides a topic-based event bus
//! - [`oracle`] and [`repository`] provide data adapters
//! - [`rolls`] supplies randomness
pub mod api;
pub mod approval;
pub mod batch;
pub mod engine;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod rolls;
pub mod sampler;

pub use api::{
    NoopNotifier, Notifier, NotifyError, OracleError, ReconcileStage, Result, RewardError,
    RewardNotice,
};
pub use approval::{ApplyResult, ApprovalStatus, PendingApproval};
pub use batch::BatchBuilder;
pub use engine::{RewardEngine, RewardEngineBuilder};
pub use events::{ApprovalEvent, Event, EventBus, GenerationEvent, Topic};
pub use oracle::{CatalogOracle, CatalogOracleImpl};
pub use repository::{
    InMemoryInventoryRepo, InMemoryPlayerRepo, InventoryRepository, PlayerProfile,
    PlayerRepository, RepositoryError,
};
pub use rolls::{RollSource, SeededRolls, ThreadRolls};
pub use sampler::{ConstrainedSampler, DrawConstraint, DrawPredicate};
