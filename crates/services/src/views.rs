//! Read-only views handed to the rendering layer.

use trainer_core::model::{Challenge, ChecklistItem, ChecklistSection};

/// A checklist item with its current checked flag.
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a> {
    pub item: &'a ChecklistItem,
    pub checked: bool,
}

/// A section with only its currently visible items.
///
/// Sections whose items are all filtered out are omitted from the view
/// entirely.
#[derive(Debug, Clone)]
pub struct SectionView<'a> {
    pub section: &'a ChecklistSection,
    pub items: Vec<ItemView<'a>>,
}

/// A challenge with its derived unlock/completion flags and the user's
/// current (unsubmitted) selection.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeView<'a> {
    pub challenge: &'a Challenge,
    pub unlocked: bool,
    pub completed: bool,
    pub selected: Option<usize>,
}

impl ChallengeView<'_> {
    /// Explanatory text, revealed only once the challenge is completed.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.completed.then(|| self.challenge.explanation())
    }
}

/// Both aggregate percentages, as shown in the progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardProgress {
    /// Checklist completion across all sections.
    pub checklist_percent: u8,
    /// Challenge completion scoped to the active path filter.
    pub challenge_percent: u8,
}
