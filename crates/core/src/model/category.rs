use serde::{Deserialize, Serialize};

use crate::model::ids::CategoryId;

/// A vulnerability category registry entry.
///
/// The core only ever compares categories by id; label and explanation are
/// presentation data carried for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    label: String,
    explanation: String,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, label: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
