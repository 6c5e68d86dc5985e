//! Derived percentage-complete metrics.
//!
//! Pure derivations over the progress state and the static content tables,
//! recomputed on every query.

use crate::filter::PathFilter;
use crate::model::{ChallengeBank, Checklist, ProgressState};

/// `round(100 * completed / total)`, with 0 for an empty denominator.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = completed as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// Checklist completion across all sections, regardless of active filters.
#[must_use]
pub fn checklist_percent(checklist: &Checklist, progress: &ProgressState) -> u8 {
    let completed = checklist
        .items()
        .filter(|item| progress.is_checked(item.id()))
        .count();
    percent(completed, checklist.total_items())
}

/// Challenge completion scoped to the selected path (all challenges for
/// `PathFilter::All`).
#[must_use]
pub fn challenge_percent(bank: &ChallengeBank, scope: &PathFilter, progress: &ProgressState) -> u8 {
    let mut total = 0;
    let mut completed = 0;
    for challenge in bank.challenges() {
        if !scope.includes(challenge.path()) {
            continue;
        }
        total += 1;
        if progress.is_completed(challenge.id()) {
            completed += 1;
        }
    }
    percent(completed, total)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
