//! Pure evaluation of a submitted quiz answer.

use crate::model::Challenge;

/// Routine feedback for a quiz submission. Not an error: an incorrect answer
/// leaves all state untouched and may be retried without limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Compare a selected option index against the challenge's correct answer.
#[must_use]
pub fn evaluate(challenge: &Challenge, selected_index: usize) -> AnswerOutcome {
    if selected_index == challenge.quiz().correct_index() {
        AnswerOutcome::Correct
    } else {
        AnswerOutcome::Incorrect
    }
}

/// Evaluate an optional pending selection; no selection counts as incorrect.
#[must_use]
pub fn evaluate_selection(challenge: &Challenge, selected: Option<usize>) -> AnswerOutcome {
    match selected {
        Some(index) => evaluate(challenge, index),
        None => AnswerOutcome::Incorrect,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
