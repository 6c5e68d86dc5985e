use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::model::ids::{ChallengeId, ItemId};

/// The single owned, mutable progress state for a session.
///
/// Created empty at first run, rehydrated from the persistent store at
/// startup, and mutated only through the methods below. Challenge completion
/// is monotonic: there is no operation that reverts a completed challenge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    checked_items: BTreeMap<ItemId, bool>,
    completed_challenges: BTreeMap<ChallengeId, bool>,
    #[serde(skip)]
    pending_answers: HashMap<ChallengeId, usize>,
    dark_mode: bool,
}

impl ProgressState {
    /// Empty first-run state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate state from persisted snapshots.
    #[must_use]
    pub fn from_persisted(
        checked_items: BTreeMap<ItemId, bool>,
        completed_challenges: BTreeMap<ChallengeId, bool>,
        dark_mode: bool,
    ) -> Self {
        Self {
            checked_items,
            completed_challenges,
            pending_answers: HashMap::new(),
            dark_mode,
        }
    }

    //
    // ─── CHECKLIST ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn is_checked(&self, id: &ItemId) -> bool {
        self.checked_items.get(id).copied().unwrap_or(false)
    }

    /// Flip the checked flag for an item and return the new value.
    pub fn toggle_item(&mut self, id: &ItemId) -> bool {
        let next = !self.is_checked(id);
        self.checked_items.insert(id.clone(), next);
        next
    }

    /// Number of items currently checked.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked_items.values().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn checked_items(&self) -> &BTreeMap<ItemId, bool> {
        &self.checked_items
    }

    //
    // ─── CHALLENGES ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn is_completed(&self, id: &ChallengeId) -> bool {
        self.completed_challenges.get(id).copied().unwrap_or(false)
    }

    /// Mark a challenge completed. Idempotent; completion never reverts.
    pub fn complete_challenge(&mut self, id: &ChallengeId) {
        self.completed_challenges.insert(id.clone(), true);
    }

    /// Number of challenges completed across the whole bank.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_challenges
            .values()
            .filter(|flag| **flag)
            .count()
    }

    #[must_use]
    pub fn completed_challenges(&self) -> &BTreeMap<ChallengeId, bool> {
        &self.completed_challenges
    }

    //
    // ─── PENDING ANSWERS ───────────────────────────────────────────────────
    //

    /// Remember the option the user currently has selected for a challenge.
    pub fn select_answer(&mut self, id: &ChallengeId, option_index: usize) {
        self.pending_answers.insert(id.clone(), option_index);
    }

    #[must_use]
    pub fn selected_answer(&self, id: &ChallengeId) -> Option<usize> {
        self.pending_answers.get(id).copied()
    }

    pub fn clear_selection(&mut self, id: &ChallengeId) {
        self.pending_answers.remove(id);
    }

    //
    // ─── DARK MODE ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the dark-mode flag and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    //
    // ─── REHYDRATION HYGIENE ───────────────────────────────────────────────
    //

    /// Drop persisted entries whose ids are unknown to the content tables.
    ///
    /// Stale ids from an older content revision are discarded rather than
    /// counted toward progress.
    pub fn retain_known(
        &mut self,
        known_item: impl Fn(&ItemId) -> bool,
        known_challenge: impl Fn(&ChallengeId) -> bool,
    ) {
        self.checked_items.retain(|id, _| known_item(id));
        self.completed_challenges.retain(|id, _| known_challenge(id));
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
