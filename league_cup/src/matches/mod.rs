//! Match, slot and result types shared by league and cup play.

pub mod models;
pub mod submission;

pub use models::{Match, MatchId, MatchResult, MatchStatus, Slot};
pub use submission::ResultSubmission;
