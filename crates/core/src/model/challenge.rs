use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::ids::{CategoryId, ChallengeId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge title cannot be empty")]
    EmptyTitle,

    #[error("path tag cannot be empty")]
    EmptyPath,

    #[error("challenge order must be at least 1, got {provided}")]
    InvalidOrder { provided: u32 },

    #[error("quiz must have at least one option")]
    NoOptions,

    #[error("correct option index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("duplicate challenge id: {0}")]
    DuplicateId(ChallengeId),

    #[error("duplicate challenge order: {0}")]
    DuplicateOrder(u32),
}

/// One-based position of a challenge in the global unlock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChallengeOrder(u32);

impl ChallengeOrder {
    /// Create a challenge order.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::InvalidOrder` if the value is zero.
    pub fn new(value: u32) -> Result<Self, ChallengeError> {
        if value == 0 {
            return Err(ChallengeError::InvalidOrder { provided: value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// True for the first challenge in the sequence.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

/// Difficulty-tier grouping used for path filtering and scoped progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTag(String);

impl PathTag {
    /// Create a validated path tag (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyPath` if the tag is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ChallengeError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChallengeError::EmptyPath);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single-question multiple-choice quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    question: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Quiz {
    /// Create a quiz, validating that the correct index points at an option.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::NoOptions` for an empty option list, or
    /// `ChallengeError::CorrectIndexOutOfRange` if the index does not address one.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, ChallengeError> {
        if options.is_empty() {
            return Err(ChallengeError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(ChallengeError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }
        Ok(Self {
            question: question.into(),
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// True if `index` addresses one of the options.
    #[must_use]
    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

/// A knowledge challenge gated by completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    difficulty: String,
    path: PathTag,
    categories: BTreeSet<CategoryId>,
    order: ChallengeOrder,
    description: String,
    explanation: String,
    quiz: Quiz,
}

impl Challenge {
    /// Create a challenge.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyTitle` if the title is empty after trimming.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ChallengeId,
        title: impl Into<String>,
        difficulty: impl Into<String>,
        path: PathTag,
        categories: BTreeSet<CategoryId>,
        order: ChallengeOrder,
        description: impl Into<String>,
        explanation: impl Into<String>,
        quiz: Quiz,
    ) -> Result<Self, ChallengeError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ChallengeError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            difficulty: difficulty.into(),
            path,
            categories,
            order,
            description: description.into(),
            explanation: explanation.into(),
            quiz,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn path(&self) -> &PathTag {
        &self.path
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    #[must_use]
    pub fn order(&self) -> ChallengeOrder {
        self.order
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Explanatory text shown only after completion.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}

/// The full static challenge bank, in content order.
///
/// Ids and unlock orders are globally unique; construction enforces it. The
/// unlock gate assumes orders are densely numbered starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeBank {
    challenges: Vec<Challenge>,
}

impl ChallengeBank {
    /// Build a challenge bank, validating id and order uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::DuplicateId` or `ChallengeError::DuplicateOrder`.
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, ChallengeError> {
        let mut ids = BTreeSet::new();
        let mut orders = BTreeSet::new();
        for challenge in &challenges {
            if !ids.insert(challenge.id().clone()) {
                return Err(ChallengeError::DuplicateId(challenge.id().clone()));
            }
            if !orders.insert(challenge.order()) {
                return Err(ChallengeError::DuplicateOrder(challenge.order().get()));
            }
        }
        Ok(Self { challenges })
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    #[must_use]
    pub fn challenge(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ChallengeId) -> bool {
        self.challenge(id).is_some()
    }

    /// Challenges belonging to the given path, in content order.
    pub fn on_path<'a>(&'a self, path: &'a PathTag) -> impl Iterator<Item = &'a Challenge> {
        self.challenges
            .iter()
            .filter(move |challenge| challenge.path() == path)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(
            "Why is this vulnerable?",
            vec!["A".into(), "B".into(), "C".into()],
            1,
        )
        .unwrap()
    }

    fn challenge(id: &str, order: u32, path: &str) -> Challenge {
        Challenge::new(
            ChallengeId::new(id).unwrap(),
            format!("Challenge {id}"),
            path,
            PathTag::new(path).unwrap(),
            BTreeSet::new(),
            ChallengeOrder::new(order).unwrap(),
            "",
            "",
            quiz(),
        )
        .unwrap()
    }

    #[test]
    fn order_zero_is_rejected() {
        assert!(matches!(
            ChallengeOrder::new(0),
            Err(ChallengeError::InvalidOrder { provided: 0 })
        ));
        assert!(ChallengeOrder::new(1).unwrap().is_first());
        assert!(!ChallengeOrder::new(2).unwrap().is_first());
    }

    #[test]
    fn quiz_rejects_out_of_range_correct_index() {
        let err = Quiz::new("Q", vec!["only".into()], 1).unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::CorrectIndexOutOfRange { index: 1, len: 1 }
        ));
        assert!(matches!(
            Quiz::new("Q", Vec::new(), 0),
            Err(ChallengeError::NoOptions)
        ));
    }

    #[test]
    fn bank_rejects_duplicate_order() {
        let err = ChallengeBank::new(vec![
            challenge("one", 1, "Beginner"),
            challenge("two", 1, "Beginner"),
        ])
        .unwrap_err();
        assert!(matches!(err, ChallengeError::DuplicateOrder(1)));
    }

    #[test]
    fn bank_rejects_duplicate_id() {
        let err = ChallengeBank::new(vec![
            challenge("dup", 1, "Beginner"),
            challenge("dup", 2, "Beginner"),
        ])
        .unwrap_err();
        assert!(matches!(err, ChallengeError::DuplicateId(id) if id.as_str() == "dup"));
    }

    #[test]
    fn on_path_scopes_by_exact_tag() {
        let bank = ChallengeBank::new(vec![
            challenge("one", 1, "Beginner"),
            challenge("two", 2, "Intermediate"),
            challenge("three", 3, "Beginner"),
        ])
        .unwrap();

        let beginner = PathTag::new("Beginner").unwrap();
        let ids: Vec<_> = bank.on_path(&beginner).map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["one", "three"]);
    }
}
