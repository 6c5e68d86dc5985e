use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::ids::{CategoryId, ItemId, SectionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error("item label cannot be empty")]
    EmptyLabel,

    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),
}

/// A single actionable security-testing task, tagged by vulnerability category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: ItemId,
    label: String,
    categories: BTreeSet<CategoryId>,
}

impl ChecklistItem {
    /// Create a checklist item.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::EmptyLabel` if the label is empty after trimming.
    pub fn new(
        id: ItemId,
        label: impl Into<String>,
        categories: BTreeSet<CategoryId>,
    ) -> Result<Self, ChecklistError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(ChecklistError::EmptyLabel);
        }
        Ok(Self {
            id,
            label,
            categories,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    /// True if this item shares at least one category with `other`.
    #[must_use]
    pub fn shares_category(&self, other: &BTreeSet<CategoryId>) -> bool {
        self.categories.iter().any(|cat| other.contains(cat))
    }
}

/// An ordered group of checklist items under a common heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    id: SectionId,
    title: String,
    description: String,
    items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    #[must_use]
    pub fn new(
        id: SectionId,
        title: impl Into<String>,
        description: impl Into<String>,
        items: Vec<ChecklistItem>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            items,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }
}

/// The full static checklist: ordered sections of items.
///
/// Item ids are globally unique across all sections; construction enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    sections: Vec<ChecklistSection>,
}

impl Checklist {
    /// Build a checklist, validating global id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::DuplicateSection` or `ChecklistError::DuplicateItem`
    /// if an id appears more than once.
    pub fn new(sections: Vec<ChecklistSection>) -> Result<Self, ChecklistError> {
        let mut section_ids = BTreeSet::new();
        let mut item_ids = BTreeSet::new();
        for section in &sections {
            if !section_ids.insert(section.id().clone()) {
                return Err(ChecklistError::DuplicateSection(section.id().clone()));
            }
            for item in section.items() {
                if !item_ids.insert(item.id().clone()) {
                    return Err(ChecklistError::DuplicateItem(item.id().clone()));
                }
            }
        }
        Ok(Self { sections })
    }

    #[must_use]
    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    /// Iterate all items across all sections, in section order.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|section| section.items())
    }

    /// Total item count across all sections.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|section| section.items().len()).sum()
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&ChecklistItem> {
        self.items().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
