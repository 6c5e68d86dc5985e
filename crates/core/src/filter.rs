//! Visibility predicates for the two list views.
//!
//! Each view combines its active criteria with AND semantics and is
//! re-evaluated on every query; nothing here caches results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{CategoryId, Challenge, ChecklistItem, PathTag, ProgressState};

//
// ─── CHECKLIST VIEW ────────────────────────────────────────────────────────────
//

/// Active criteria for the checklist view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistFilter {
    categories: BTreeSet<CategoryId>,
    only_unchecked: bool,
}

impl ChecklistFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    #[must_use]
    pub fn only_unchecked(&self) -> bool {
        self.only_unchecked
    }

    pub fn set_categories(&mut self, categories: BTreeSet<CategoryId>) {
        self.categories = categories;
    }

    /// Add the category to the active set, or remove it if already active.
    pub fn toggle_category(&mut self, category: CategoryId) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn set_only_unchecked(&mut self, only_unchecked: bool) {
        self.only_unchecked = only_unchecked;
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.only_unchecked = false;
    }

    /// Whether `item` passes every active criterion.
    ///
    /// With a non-empty category set the item's tags must intersect it; with
    /// only-unchecked active a checked item is excluded.
    #[must_use]
    pub fn matches(&self, item: &ChecklistItem, progress: &ProgressState) -> bool {
        if !self.categories.is_empty() && !item.shares_category(&self.categories) {
            return false;
        }
        if self.only_unchecked && progress.is_checked(item.id()) {
            return false;
        }
        true
    }
}

//
// ─── CHALLENGE VIEW ────────────────────────────────────────────────────────────
//

/// Path scope for the challenge view and path-scoped progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathFilter {
    #[default]
    All,
    Only(PathTag),
}

impl PathFilter {
    /// Whether a challenge on `path` falls inside this scope.
    #[must_use]
    pub fn includes(&self, path: &PathTag) -> bool {
        match self {
            PathFilter::All => true,
            PathFilter::Only(selected) => selected == path,
        }
    }
}

/// Active criteria for the challenge view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeFilter {
    path: PathFilter,
    search: String,
}

impl ChallengeFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(&self) -> &PathFilter {
        &self.path
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_path(&mut self, path: PathFilter) {
        self.path = path;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear(&mut self) {
        self.path = PathFilter::All;
        self.search.clear();
    }

    /// Whether `challenge` passes every active criterion.
    ///
    /// A non-empty search string matches case-insensitively as a substring of
    /// the title, the difficulty label, or any category tag.
    #[must_use]
    pub fn matches(&self, challenge: &Challenge) -> bool {
        if !self.path.includes(challenge.path()) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        challenge.title().to_lowercase().contains(&needle)
            || challenge.difficulty().to_lowercase().contains(&needle)
            || challenge
                .categories()
                .iter()
                .any(|cat| cat.as_str().to_lowercase().contains(&needle))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
