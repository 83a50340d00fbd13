//! Inbound score submissions and their validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{Match, MatchId, MatchResult};
use crate::constants::MAX_SCORE;
use crate::entrants::Entrant;
use crate::errors::{EngineError, EngineResult};

/// A score submitted for one match
///
/// Scores stay optional and signed until validated so that the recorder,
/// not the caller, decides what counts as a malformed result. The timestamp
/// comes from the caller, which keeps recording a pure function of its inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultSubmission {
    pub match_id: MatchId,
    pub score_a: Option<i64>,
    pub score_b: Option<i64>,
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
}

impl ResultSubmission {
    pub fn new(
        match_id: MatchId,
        score_a: i64,
        score_b: i64,
        recorded_by: &str,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            match_id,
            score_a: Some(score_a),
            score_b: Some(score_b),
            recorded_by: recorded_by.to_string(),
            recorded_at,
        }
    }

    /// Build a submission from raw form text
    ///
    /// Blank text counts as a missing score and is rejected later by
    /// [`ResultSubmission::scores`].
    ///
    /// # Errors
    ///
    /// `InvalidResult` if either score is not an integer.
    pub fn parse(
        match_id: MatchId,
        raw_a: &str,
        raw_b: &str,
        recorded_by: &str,
        recorded_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Ok(Self {
            match_id,
            score_a: parse_score(raw_a)?,
            score_b: parse_score(raw_b)?,
            recorded_by: recorded_by.to_string(),
            recorded_at,
        })
    }

    /// Validated score pair
    ///
    /// # Errors
    ///
    /// `InvalidResult` if a score is missing, negative or above [`MAX_SCORE`].
    pub fn scores(&self) -> EngineResult<(u32, u32)> {
        Ok((check_score(self.score_a)?, check_score(self.score_b)?))
    }

    pub(crate) fn to_result(
        &self,
        score_a: u32,
        score_b: u32,
        winner: Option<&Entrant>,
    ) -> MatchResult {
        MatchResult {
            score_a,
            score_b,
            winner: winner.map(|entrant| entrant.id.clone()),
            recorded_by: self.recorded_by.clone(),
            recorded_at: self.recorded_at,
        }
    }

    /// Result for `target` with the winner resolved from the score.
    pub(crate) fn result_for(
        &self,
        target: &Match,
        score_a: u32,
        score_b: u32,
    ) -> EngineResult<MatchResult> {
        let winner = target.leader(score_a, score_b)?;
        Ok(self.to_result(score_a, score_b, winner))
    }
}

fn parse_score(raw: &str) -> EngineResult<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| EngineError::InvalidResult(format!("'{raw}' is not a number")))
}

fn check_score(score: Option<i64>) -> EngineResult<u32> {
    let score = score
        .ok_or_else(|| EngineError::InvalidResult("both scores are required".to_string()))?;
    if score < 0 {
        return Err(EngineError::InvalidResult(format!("score {score} is negative")));
    }
    match u32::try_from(score) {
        Ok(score) if score <= MAX_SCORE => Ok(score),
        _ => Err(EngineError::InvalidResult(format!(
            "score {score} is above the maximum of {MAX_SCORE}"
        ))),
    }
}
