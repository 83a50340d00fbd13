//! Engine error types.

use thiserror::Error;

use crate::championship::ChampionshipStatus;
use crate::entrants::EntrantId;
use crate::matches::MatchId;

/// Engine errors
///
/// Every operation that returns one of these leaves the championship it was
/// given untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Score missing, non-numeric or negative
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// Unknown match identifier
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Cup match whose slots are not both resolved yet
    #[error("Match {0} is still awaiting earlier results")]
    MatchNotReady(MatchId),

    /// Drawn score submitted to a knockout match
    #[error("Match {match_id} ended {score_a}-{score_b}, a knockout match needs a winner")]
    AmbiguousOutcome {
        match_id: MatchId,
        score_a: u32,
        score_b: u32,
    },

    /// Snapshot references entrants or matches that do not line up
    #[error("Inconsistent championship data: {0}")]
    InconsistentAggregate(String),

    #[error("Championship not in correct state: expected {expected}, got {actual}")]
    InvalidState {
        expected: ChampionshipStatus,
        actual: ChampionshipStatus,
    },

    #[error("Insufficient entrants: need {needed}, have {current}")]
    NotEnoughEntrants { needed: usize, current: usize },

    #[error("Entrant already registered: {0}")]
    AlreadyRegistered(EntrantId),

    #[error("Championship is full ({0} entrants)")]
    ChampionshipFull(usize),

    #[error("Team already represented: {0}")]
    TeamAlreadyRepresented(String),

    /// Finalized results only change through a correction
    #[error("Result already recorded for match {0}")]
    ResultAlreadyRecorded(MatchId),

    #[error("No result to correct for match {0}")]
    NoResultToCorrect(MatchId),

    /// The winner being corrected has already played its next match
    #[error("Cannot correct match {match_id}: match {successor} is already finalized")]
    DownstreamFinalized { match_id: MatchId, successor: MatchId },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        EngineError::InconsistentAggregate(reason.into())
    }

    /// True for faults in the stored data rather than in the request.
    pub fn is_integrity_fault(&self) -> bool {
        matches!(
            self,
            EngineError::InconsistentAggregate(_) | EngineError::Serialization(_)
        )
    }

    /// Get a message that is safe to show to whoever submitted the request
    ///
    /// Integrity faults are reported generically; the detail belongs in logs.
    pub fn client_message(&self) -> String {
        if self.is_integrity_fault() {
            "Championship data is inconsistent".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
