#![forbid(unsafe_code)]

pub mod error;
pub mod evaluate;
pub mod filter;
pub mod model;
pub mod stats;
pub mod unlock;

pub use error::Error;
pub use evaluate::AnswerOutcome;
pub use filter::{ChallengeFilter, ChecklistFilter, PathFilter};
