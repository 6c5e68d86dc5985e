use thiserror::Error;

use crate::model::{ChallengeError, ChecklistError, IdError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Checklist(#[from] ChecklistError),
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}
