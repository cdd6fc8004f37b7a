//! Tentative approval of generated batches.
//!
//! A batch is staged as a [`PendingApproval`] and stays unpersisted until an
//! approver confirms it. Confirmation re-reads the live inventory and role,
//! merges into that fresh copy, and writes it back in one call.

mod pending;
mod workflow;

pub use pending::{ApplyResult, ApprovalStatus, PendingApproval};
pub(crate) use workflow::ApprovalWorkflow;
