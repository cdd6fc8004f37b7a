//! Public runtime API surface.
//!
//! Gathers the error types and the outbound notifier contract so the engine
//! and approval modules can stay focused on orchestration.

pub mod errors;
pub mod notifier;

pub use errors::{NotifyError, OracleError, ReconcileStage, RepositoryError, Result, RewardError};
pub use notifier::{NoopNotifier, Notifier, RewardNotice};
