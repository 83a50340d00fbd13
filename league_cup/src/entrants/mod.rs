//! Entrant registry types and the team eligibility rule.

pub mod models;

pub use models::{Entrant, EntrantId};

/// Whether `candidate` may join a roster that already holds `existing`
///
/// Unless `allow_same_team` is set, a team label can only be represented once.
///
/// # Arguments
///
/// * `candidate` - Entrant asking to join
/// * `existing` - Entrants already registered
/// * `allow_same_team` - Skip the team uniqueness rule
pub fn can_add_entrant(candidate: &Entrant, existing: &[Entrant], allow_same_team: bool) -> bool {
    allow_same_team || !existing.iter().any(|e| e.team == candidate.team)
}
