mod category;
mod challenge;
mod checklist;
mod ids;
mod progress;

pub use category::Category;
pub use challenge::{
    Challenge, ChallengeBank, ChallengeError, ChallengeOrder, PathTag, Quiz,
};
pub use checklist::{Checklist, ChecklistError, ChecklistItem, ChecklistSection};
pub use ids::{CategoryId, ChallengeId, IdError, ItemId, SectionId};
pub use progress::ProgressState;
