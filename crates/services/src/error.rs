//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use trainer_core::model::{ChallengeId, ItemId};

/// Errors emitted by `DashboardService`.
///
/// Locked and already-completed submissions are caller-contract violations a
/// well-behaved view never issues; they are refused here so state can never
/// be forced through supported operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error("unknown checklist item: {0}")]
    UnknownItem(ItemId),

    #[error("unknown challenge: {0}")]
    UnknownChallenge(ChallengeId),

    #[error("option index {index} is out of range")]
    InvalidOption { index: usize },

    #[error("challenge {0} is locked")]
    ChallengeLocked(ChallengeId),

    #[error("challenge {0} is already completed")]
    AlreadyCompleted(ChallengeId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
