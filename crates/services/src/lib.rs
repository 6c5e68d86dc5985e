#![forbid(unsafe_code)]

pub mod dashboard;
pub mod error;
pub mod views;

pub use dashboard::{DashboardContent, DashboardService};
pub use error::DashboardError;
pub use views::{ChallengeView, DashboardProgress, ItemView, SectionView};
