use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, warn};

use storage::{decode_flag, decode_flags, encode_flag, encode_flags, ProgressStore, StoreKey};
use trainer_core::evaluate::{evaluate_selection, AnswerOutcome};
use trainer_core::filter::{ChallengeFilter, ChecklistFilter, PathFilter};
use trainer_core::model::{
    Category, CategoryId, Challenge, ChallengeBank, ChallengeId, Checklist, ItemId, ProgressState,
};
use trainer_core::{stats, unlock};

use crate::error::DashboardError;
use crate::views::{ChallengeView, DashboardProgress, ItemView, SectionView};

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

/// The static content tables consumed from the content provider.
///
/// Immutable for the lifetime of the service; the service only reads it.
#[derive(Debug, Clone)]
pub struct DashboardContent {
    checklist: Checklist,
    challenges: ChallengeBank,
    categories: Vec<Category>,
}

impl DashboardContent {
    #[must_use]
    pub fn new(checklist: Checklist, challenges: ChallengeBank, categories: Vec<Category>) -> Self {
        Self {
            checklist,
            challenges,
            categories,
        }
    }

    #[must_use]
    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    #[must_use]
    pub fn challenges(&self) -> &ChallengeBank {
        &self.challenges
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// The dashboard state machine: owns the progress state, applies user
/// mutations, keeps the persistent store synchronized write-through, and
/// derives the unlock/visibility/percentage views on demand.
///
/// All operations are synchronous; the host's event dispatch serializes
/// mutations, so no locking happens here.
pub struct DashboardService {
    content: DashboardContent,
    progress: ProgressState,
    checklist_filter: ChecklistFilter,
    challenge_filter: ChallengeFilter,
    store: Arc<dyn ProgressStore>,
}

impl DashboardService {
    /// Create the service, rehydrating progress from the store.
    ///
    /// Missing records mean first run; corrupt records and store read
    /// failures degrade to the empty default state. Persisted ids unknown to
    /// the content tables are pruned.
    #[must_use]
    pub fn new(content: DashboardContent, store: Arc<dyn ProgressStore>) -> Self {
        let checked = load_typed(store.as_ref(), StoreKey::ChecklistProgress, |raw| {
            ItemId::new(raw).ok()
        });
        let completed = load_typed(store.as_ref(), StoreKey::ChallengeProgress, |raw| {
            ChallengeId::new(raw).ok()
        });
        let dark_mode = match store.load(StoreKey::DarkMode) {
            Ok(Some(raw)) => decode_flag(StoreKey::DarkMode, &raw),
            Ok(None) => false,
            Err(err) => {
                warn!(key = %StoreKey::DarkMode, error = %err, "store read failed, starting with defaults");
                false
            }
        };

        let mut progress = ProgressState::from_persisted(checked, completed, dark_mode);
        progress.retain_known(
            |id| content.checklist().contains_item(id),
            |id| content.challenges().contains(id),
        );
        debug!(
            checked = progress.checked_count(),
            completed = progress.completed_count(),
            "rehydrated progress state"
        );

        Self {
            content,
            progress,
            checklist_filter: ChecklistFilter::new(),
            challenge_filter: ChallengeFilter::new(),
            store,
        }
    }

    //
    // ─── MUTATIONS ─────────────────────────────────────────────────────────
    //

    /// Flip an item's checked flag and flush; returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownItem` for an id not in the checklist.
    pub fn toggle_item(&mut self, id: &ItemId) -> Result<bool, DashboardError> {
        if !self.content.checklist().contains_item(id) {
            return Err(DashboardError::UnknownItem(id.clone()));
        }
        let checked = self.progress.toggle_item(id);
        self.flush_checklist();
        Ok(checked)
    }

    /// Remember the option currently selected for a challenge (transient,
    /// not persisted).
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownChallenge` or
    /// `DashboardError::InvalidOption` for an index past the option list.
    pub fn select_answer(
        &mut self,
        id: &ChallengeId,
        option_index: usize,
    ) -> Result<(), DashboardError> {
        let challenge = self.challenge(id)?;
        if !challenge.quiz().has_option(option_index) {
            return Err(DashboardError::InvalidOption {
                index: option_index,
            });
        }
        self.progress.select_answer(id, option_index);
        Ok(())
    }

    /// Evaluate the pending selection for a challenge.
    ///
    /// On `Correct` the challenge is marked completed (monotonic) and the
    /// store is flushed; on `Incorrect` nothing changes and the user may
    /// retry without limit. No pending selection evaluates as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::ChallengeLocked` or
    /// `DashboardError::AlreadyCompleted`; the view layer is expected to
    /// never offer submission in either state.
    pub fn submit_answer(&mut self, id: &ChallengeId) -> Result<AnswerOutcome, DashboardError> {
        let challenge = self.challenge(id)?;
        if self.progress.is_completed(id) {
            return Err(DashboardError::AlreadyCompleted(id.clone()));
        }
        if !unlock::is_unlocked_in(challenge.order(), &self.progress) {
            return Err(DashboardError::ChallengeLocked(id.clone()));
        }

        let outcome = evaluate_selection(challenge, self.progress.selected_answer(id));
        if outcome.is_correct() {
            self.progress.complete_challenge(id);
            self.progress.clear_selection(id);
            self.flush_challenges();
        }
        Ok(outcome)
    }

    /// Flip the dark-mode preference and flush; returns the new flag.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let enabled = self.progress.toggle_dark_mode();
        self.flush_dark_mode();
        enabled
    }

    //
    // ─── FILTER STATE ──────────────────────────────────────────────────────
    //

    pub fn set_category_filter(&mut self, categories: BTreeSet<CategoryId>) {
        self.checklist_filter.set_categories(categories);
    }

    pub fn toggle_category_filter(&mut self, category: CategoryId) {
        self.checklist_filter.toggle_category(category);
    }

    pub fn set_only_unchecked(&mut self, only_unchecked: bool) {
        self.checklist_filter.set_only_unchecked(only_unchecked);
    }

    pub fn set_path(&mut self, path: PathFilter) {
        self.challenge_filter.set_path(path);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.challenge_filter.set_search(search);
    }

    pub fn clear_filters(&mut self) {
        self.checklist_filter.clear();
        self.challenge_filter.clear();
    }

    //
    // ─── DERIVED VIEWS ─────────────────────────────────────────────────────
    //

    /// Sections with their currently visible items; fully filtered-out
    /// sections are omitted.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<SectionView<'_>> {
        self.content
            .checklist()
            .sections()
            .iter()
            .filter_map(|section| {
                let items: Vec<_> = section
                    .items()
                    .iter()
                    .filter(|item| self.checklist_filter.matches(item, &self.progress))
                    .map(|item| ItemView {
                        item,
                        checked: self.progress.is_checked(item.id()),
                    })
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(SectionView { section, items })
                }
            })
            .collect()
    }

    /// Challenges passing the current path/search filter, with derived
    /// unlock and completion flags.
    #[must_use]
    pub fn visible_challenges(&self) -> Vec<ChallengeView<'_>> {
        self.content
            .challenges()
            .challenges()
            .iter()
            .filter(|challenge| self.challenge_filter.matches(challenge))
            .map(|challenge| self.challenge_view(challenge))
            .collect()
    }

    /// Challenges sharing a category tag with the given item, used to
    /// cross-link checklist work to related challenges.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownItem` for an id not in the checklist.
    pub fn recommended_challenges(
        &self,
        item_id: &ItemId,
    ) -> Result<Vec<&Challenge>, DashboardError> {
        let item = self
            .content
            .checklist()
            .item(item_id)
            .ok_or_else(|| DashboardError::UnknownItem(item_id.clone()))?;
        Ok(self
            .content
            .challenges()
            .challenges()
            .iter()
            .filter(|challenge| {
                challenge
                    .categories()
                    .iter()
                    .any(|category| item.categories().contains(category))
            })
            .collect())
    }

    /// Whether a challenge is currently accessible.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownChallenge` for an unknown id.
    pub fn is_unlocked(&self, id: &ChallengeId) -> Result<bool, DashboardError> {
        let challenge = self.challenge(id)?;
        Ok(unlock::is_unlocked_in(challenge.order(), &self.progress))
    }

    /// Both aggregate percentages; the challenge side is scoped to the
    /// active path filter.
    #[must_use]
    pub fn progress_summary(&self) -> DashboardProgress {
        DashboardProgress {
            checklist_percent: stats::checklist_percent(self.content.checklist(), &self.progress),
            challenge_percent: stats::challenge_percent(
                self.content.challenges(),
                self.challenge_filter.path(),
                &self.progress,
            ),
        }
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn content(&self) -> &DashboardContent {
        &self.content
    }

    #[must_use]
    pub fn checklist_filter(&self) -> &ChecklistFilter {
        &self.checklist_filter
    }

    #[must_use]
    pub fn challenge_filter(&self) -> &ChallengeFilter {
        &self.challenge_filter
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.progress.dark_mode()
    }

    //
    // ─── PERSISTENCE ───────────────────────────────────────────────────────
    //

    /// Re-write all three persisted records, propagating failures.
    ///
    /// Routine mutations flush silently; this is for hosts that want an
    /// explicit sync point (e.g. on shutdown).
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if encoding or writing fails.
    pub fn flush_all(&self) -> Result<(), DashboardError> {
        self.store.save(
            StoreKey::ChecklistProgress,
            &encode_flags(&stringify(self.progress.checked_items()))?,
        )?;
        self.store.save(
            StoreKey::ChallengeProgress,
            &encode_flags(&stringify(self.progress.completed_challenges()))?,
        )?;
        self.store
            .save(StoreKey::DarkMode, &encode_flag(self.progress.dark_mode())?)?;
        Ok(())
    }

    fn challenge_view<'a>(&'a self, challenge: &'a Challenge) -> ChallengeView<'a> {
        ChallengeView {
            challenge,
            unlocked: unlock::is_unlocked_in(challenge.order(), &self.progress),
            completed: self.progress.is_completed(challenge.id()),
            selected: self.progress.selected_answer(challenge.id()),
        }
    }

    fn challenge(&self, id: &ChallengeId) -> Result<&Challenge, DashboardError> {
        self.content
            .challenges()
            .challenge(id)
            .ok_or_else(|| DashboardError::UnknownChallenge(id.clone()))
    }

    fn flush_checklist(&self) {
        self.flush(
            StoreKey::ChecklistProgress,
            encode_flags(&stringify(self.progress.checked_items())),
        );
    }

    fn flush_challenges(&self) {
        self.flush(
            StoreKey::ChallengeProgress,
            encode_flags(&stringify(self.progress.completed_challenges())),
        );
    }

    fn flush_dark_mode(&self) {
        self.flush(StoreKey::DarkMode, encode_flag(self.progress.dark_mode()));
    }

    /// Write-through after a mutation. A failure is logged and swallowed:
    /// in-memory state remains authoritative for the session.
    fn flush(&self, key: StoreKey, encoded: Result<String, storage::StorageError>) {
        let result = encoded.and_then(|raw| self.store.save(key, &raw));
        if let Err(err) = result {
            warn!(key = %key, error = %err, "failed to persist snapshot");
        }
    }
}

fn stringify<K: ToString>(entries: &BTreeMap<K, bool>) -> BTreeMap<String, bool> {
    entries
        .iter()
        .map(|(id, flag)| (id.to_string(), *flag))
        .collect()
}

fn load_typed<K: Ord>(
    store: &dyn ProgressStore,
    key: StoreKey,
    parse: impl Fn(&str) -> Option<K>,
) -> BTreeMap<K, bool> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeMap::new(),
        Err(err) => {
            warn!(key = %key, error = %err, "store read failed, starting with defaults");
            return BTreeMap::new();
        }
    };
    decode_flags(key, &raw)
        .into_iter()
        .filter_map(|(id, flag)| parse(&id).map(|typed| (typed, flag)))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use storage::InMemoryStore;
    use trainer_core::model::{
        Challenge, ChallengeOrder, ChecklistItem, ChecklistSection, PathTag, Quiz, SectionId,
    };

    fn category_id(id: &str) -> CategoryId {
        CategoryId::new(id).unwrap()
    }

    fn item_id(id: &str) -> ItemId {
        ItemId::new(id).unwrap()
    }

    fn challenge_id(id: &str) -> ChallengeId {
        ChallengeId::new(id).unwrap()
    }

    fn sample_content() -> DashboardContent {
        let item = |id: &str, label: &str, tags: &[&str]| {
            ChecklistItem::new(
                item_id(id),
                label,
                tags.iter().map(|t| category_id(t)).collect(),
            )
            .unwrap()
        };
        let checklist = Checklist::new(vec![
            ChecklistSection::new(
                SectionId::new("recon").unwrap(),
                "Recon on Wildcard Domain",
                "Learn recon techniques",
                vec![
                    item("amass", "Run Amass", &["A03"]),
                    item("subfinder", "Run Subfinder", &["A03"]),
                ],
            ),
            ChecklistSection::new(
                SectionId::new("auth").unwrap(),
                "Authentication Testing",
                "Check login systems",
                vec![
                    item("user_enum", "User enumeration", &["A07"]),
                    item("brute_force", "Brute force protection", &["A07"]),
                ],
            ),
        ])
        .unwrap();

        let challenges = ChallengeBank::new(vec![
            Challenge::new(
                challenge_id("auth-logic-1"),
                "Broken Login Logic",
                "Beginner",
                PathTag::new("Beginner").unwrap(),
                [category_id("A07")].into_iter().collect(),
                ChallengeOrder::new(1).unwrap(),
                "Simulated login logic flaw.",
                "Authentication logic flaws allow bypass.",
                Quiz::new(
                    "Why is this login system vulnerable?",
                    vec![
                        "Passwords too short".into(),
                        "Logic allows bypass".into(),
                        "UI design problem".into(),
                        "Server slow".into(),
                    ],
                    1,
                )
                .unwrap(),
            )
            .unwrap(),
            Challenge::new(
                challenge_id("sql-inject-1"),
                "Simulated SQL Injection",
                "Intermediate",
                PathTag::new("Intermediate").unwrap(),
                [category_id("A03")].into_iter().collect(),
                ChallengeOrder::new(2).unwrap(),
                "Analyze the SQL query for issues.",
                "Unvalidated input can lead to SQL injection.",
                Quiz::new(
                    "What causes this vulnerability?",
                    vec![
                        "Weak passwords".into(),
                        "Input not sanitized".into(),
                        "Slow network".into(),
                        "Unclear UI".into(),
                    ],
                    1,
                )
                .unwrap(),
            )
            .unwrap(),
        ])
        .unwrap();

        let categories = vec![
            Category::new(category_id("A03"), "A03 – Injection", "Injection occurs."),
            Category::new(category_id("A07"), "A07 – Auth Failures", "Auth flaws."),
        ];

        DashboardContent::new(checklist, challenges, categories)
    }

    fn service() -> (DashboardService, InMemoryStore) {
        let store = InMemoryStore::new();
        let svc = DashboardService::new(sample_content(), Arc::new(store.clone()));
        (svc, store)
    }

    #[test]
    fn toggle_item_writes_through() {
        let (mut svc, store) = service();
        assert!(svc.toggle_item(&item_id("amass")).unwrap());

        let raw = store.load(StoreKey::ChecklistProgress).unwrap().unwrap();
        let decoded = decode_flags(StoreKey::ChecklistProgress, &raw);
        assert_eq!(decoded.get("amass"), Some(&true));
    }

    #[test]
    fn toggle_unknown_item_is_refused() {
        let (mut svc, _) = service();
        let err = svc.toggle_item(&item_id("nope")).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownItem(_)));
    }

    #[test]
    fn correct_submission_completes_and_unlocks_next() {
        let (mut svc, _) = service();
        let first = challenge_id("auth-logic-1");
        let second = challenge_id("sql-inject-1");

        assert!(svc.is_unlocked(&first).unwrap());
        assert!(!svc.is_unlocked(&second).unwrap());

        svc.select_answer(&first, 1).unwrap();
        let outcome = svc.submit_answer(&first).unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert!(svc.progress().is_completed(&first));
        assert!(svc.is_unlocked(&second).unwrap());

        // checklist state is untouched by the quiz flow
        assert_eq!(svc.progress().checked_count(), 0);
    }

    #[test]
    fn incorrect_submission_changes_nothing_and_allows_retry() {
        let (mut svc, store) = service();
        let first = challenge_id("auth-logic-1");

        for wrong in [0, 2, 3] {
            svc.select_answer(&first, wrong).unwrap();
            assert_eq!(svc.submit_answer(&first).unwrap(), AnswerOutcome::Incorrect);
            assert!(!svc.progress().is_completed(&first));
        }
        // nothing was flushed for the challenge record
        assert_eq!(store.load(StoreKey::ChallengeProgress).unwrap(), None);

        svc.select_answer(&first, 1).unwrap();
        assert_eq!(svc.submit_answer(&first).unwrap(), AnswerOutcome::Correct);
    }

    #[test]
    fn submission_without_selection_is_incorrect() {
        let (mut svc, _) = service();
        let outcome = svc.submit_answer(&challenge_id("auth-logic-1")).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect);
    }

    #[test]
    fn locked_challenge_refuses_submission() {
        let (mut svc, _) = service();
        let second = challenge_id("sql-inject-1");
        svc.select_answer(&second, 1).unwrap();
        let err = svc.submit_answer(&second).unwrap_err();
        assert!(matches!(err, DashboardError::ChallengeLocked(_)));
        assert!(!svc.progress().is_completed(&second));
    }

    #[test]
    fn completed_challenge_refuses_resubmission() {
        let (mut svc, _) = service();
        let first = challenge_id("auth-logic-1");
        svc.select_answer(&first, 1).unwrap();
        svc.submit_answer(&first).unwrap();

        let err = svc.submit_answer(&first).unwrap_err();
        assert!(matches!(err, DashboardError::AlreadyCompleted(_)));
        assert!(svc.progress().is_completed(&first));
    }

    #[test]
    fn select_answer_validates_option_range() {
        let (mut svc, _) = service();
        let err = svc
            .select_answer(&challenge_id("auth-logic-1"), 4)
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidOption { index: 4 }));
    }

    #[test]
    fn category_filter_narrows_both_independent_of_other_filters() {
        let (mut svc, _) = service();
        svc.toggle_category_filter(category_id("A03"));

        let sections = svc.visible_sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section.id().as_str(), "recon");

        svc.set_only_unchecked(true);
        svc.toggle_item(&item_id("amass")).unwrap();
        let sections = svc.visible_sections();
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].item.id().as_str(), "subfinder");

        svc.clear_filters();
        let sections = svc.visible_sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections.iter().map(|s| s.items.len()).sum::<usize>(),
            4
        );
    }

    #[test]
    fn search_matches_challenge_via_category_tag() {
        let (mut svc, _) = service();
        svc.set_search("a07");
        let visible = svc.visible_challenges();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].challenge.title(), "Broken Login Logic");
    }

    #[test]
    fn path_filter_scopes_challenge_percent() {
        let (mut svc, _) = service();
        let first = challenge_id("auth-logic-1");
        svc.select_answer(&first, 1).unwrap();
        svc.submit_answer(&first).unwrap();

        assert_eq!(svc.progress_summary().challenge_percent, 50);

        svc.set_path(PathFilter::Only(PathTag::new("Beginner").unwrap()));
        assert_eq!(svc.progress_summary().challenge_percent, 100);

        svc.set_path(PathFilter::Only(PathTag::new("Intermediate").unwrap()));
        assert_eq!(svc.progress_summary().challenge_percent, 0);
    }

    #[test]
    fn checklist_percent_ignores_filters() {
        let (mut svc, _) = service();
        svc.toggle_item(&item_id("amass")).unwrap();
        svc.toggle_category_filter(category_id("A07"));
        assert_eq!(svc.progress_summary().checklist_percent, 25);
    }

    #[test]
    fn explanation_is_revealed_only_after_completion() {
        let (mut svc, _) = service();
        let first = challenge_id("auth-logic-1");

        let view = svc
            .visible_challenges()
            .into_iter()
            .find(|v| v.challenge.id() == &first)
            .unwrap();
        assert_eq!(view.explanation(), None);

        svc.select_answer(&first, 1).unwrap();
        svc.submit_answer(&first).unwrap();

        let view = svc
            .visible_challenges()
            .into_iter()
            .find(|v| v.challenge.id() == &first)
            .unwrap();
        assert_eq!(
            view.explanation(),
            Some("Authentication logic flaws allow bypass.")
        );
    }

    #[test]
    fn recommended_challenges_share_a_category() {
        let (svc, _) = service();
        let recs = svc.recommended_challenges(&item_id("user_enum")).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id().as_str(), "auth-logic-1");

        let recs = svc.recommended_challenges(&item_id("amass")).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id().as_str(), "sql-inject-1");
    }

    #[test]
    fn dark_mode_round_trips_through_store() {
        let (mut svc, store) = service();
        assert!(svc.toggle_dark_mode());
        assert_eq!(
            store.load(StoreKey::DarkMode).unwrap().as_deref(),
            Some("true")
        );

        let svc2 = DashboardService::new(sample_content(), Arc::new(store));
        assert!(svc2.dark_mode());
    }

    #[test]
    fn rehydration_prunes_ids_unknown_to_content() {
        let store = InMemoryStore::new();
        let stale = encode_flags(
            &[
                ("amass".to_string(), true),
                ("removed-item".to_string(), true),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();
        store.save(StoreKey::ChecklistProgress, &stale).unwrap();

        let svc = DashboardService::new(sample_content(), Arc::new(store));
        assert_eq!(svc.progress().checked_count(), 1);
        assert!(svc.progress().is_checked(&item_id("amass")));
    }

    #[test]
    fn corrupt_records_degrade_to_empty_state() {
        let store = InMemoryStore::new();
        store
            .save(StoreKey::ChecklistProgress, "garbage{{{")
            .unwrap();
        store.save(StoreKey::ChallengeProgress, "[true]").unwrap();
        store.save(StoreKey::DarkMode, "sometimes").unwrap();

        let svc = DashboardService::new(sample_content(), Arc::new(store));
        assert_eq!(svc.progress().checked_count(), 0);
        assert_eq!(svc.progress().completed_count(), 0);
        assert!(!svc.dark_mode());
    }

    #[test]
    fn flush_all_writes_every_record() {
        let (mut svc, store) = service();
        svc.toggle_item(&item_id("amass")).unwrap();
        svc.flush_all().unwrap();

        assert!(store.load(StoreKey::ChecklistProgress).unwrap().is_some());
        assert!(store.load(StoreKey::ChallengeProgress).unwrap().is_some());
        assert!(store.load(StoreKey::DarkMode).unwrap().is_some());
    }
}
