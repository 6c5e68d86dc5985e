use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error raised when an identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdError {
    kind: &'static str,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be empty", self.kind)
    }
}

impl std::error::Error for IdError {}

/// Unique identifier for a checklist item.
///
/// Identity across the whole system is id equality, never position.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Create a validated item id (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        validated(value, "ItemId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a challenge.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Create a validated challenge id (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        validated(value, "ChallengeId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a vulnerability category.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a validated category id (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        validated(value, "CategoryId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a checklist section.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Create a validated section id (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `IdError` if the id is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        validated(value, "SectionId").map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validated(value: impl Into<String>, kind: &'static str) -> Result<String, IdError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError { kind });
    }
    Ok(trimmed.to_string())
}

macro_rules! id_conversions {
    ($($ty:ident),+) => {$(
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($ty), "({})"), self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ty::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> String {
                id.0
            }
        }
    )+};
}

id_conversions!(ItemId, ChallengeId, CategoryId, SectionId);

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
