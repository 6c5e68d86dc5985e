//! The unlock gate for sequentially-gated challenges.
//!
//! Gating is a counting gate over the whole challenge bank: a challenge with
//! order N is accessible once any N-1 challenges are completed, not
//! necessarily the N-1 preceding ones. The counting semantics are load-bearing
//! and must not be tightened to strict-predecessor gating.

use crate::model::{ChallengeOrder, ProgressState};

/// Whether the challenge at `order` is accessible given the number of
/// completed challenges across the whole bank.
///
/// The first challenge is always unlocked; order N (N > 1) unlocks once
/// `completed_count >= N - 1`.
#[must_use]
pub fn is_unlocked(order: ChallengeOrder, completed_count: usize) -> bool {
    if order.is_first() {
        return true;
    }
    completed_count >= (order.get() - 1) as usize
}

/// Convenience wrapper reading the completion count from `ProgressState`.
#[must_use]
pub fn is_unlocked_in(order: ChallengeOrder, progress: &ProgressState) -> bool {
    is_unlocked(order, progress.completed_count())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
