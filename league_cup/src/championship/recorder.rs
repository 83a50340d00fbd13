//! Recording and correcting match results on a championship snapshot.

use log::{debug, info};

use super::models::{Championship, ChampionshipStatus, Fixtures};
use crate::cup::{self, Advancement};
use crate::errors::{EngineError, EngineResult};
use crate::league;
use crate::matches::{Match, MatchId, MatchStatus, ResultSubmission};

impl Championship {
    /// Apply a submitted score and derive everything downstream of it
    ///
    /// A league match is finalized (a level score is a draw) and the table
    /// rebuilt from the full match list. A cup match needs a decisive score;
    /// its winner advances into the successor match. The championship
    /// finishes once every league match or the cup final has a result.
    ///
    /// # Errors
    ///
    /// * `InvalidState` - the championship is not in progress
    /// * `InvalidResult` - score missing or negative
    /// * `MatchNotFound` - unknown match id
    /// * `MatchNotReady` - cup match still awaiting earlier results
    /// * `AmbiguousOutcome` - level score on a cup match
    /// * `ResultAlreadyRecorded` - use [`Championship::correct_result`]
    /// * `InconsistentAggregate` - the snapshot failed validation
    pub fn record_result(&self, submission: &ResultSubmission) -> EngineResult<Self> {
        self.expect_status(ChampionshipStatus::InProgress)?;
        let (score_a, score_b) = submission.scores()?;
        self.validate()?;

        let mut next = self.clone();
        match &mut next.fixtures {
            Fixtures::League { matches, standings } => {
                let target = league_match(matches, &submission.match_id)?;
                if target.is_finalized() {
                    return Err(EngineError::ResultAlreadyRecorded(target.id.clone()));
                }
                let result = submission.result_for(target, score_a, score_b)?;
                target.finalize(result);
                *standings = league::compute_standings(&next.entrants, matches)?;
            }
            Fixtures::Cup { rounds } => {
                let advancement = cup::record(rounds, submission, score_a, score_b)?;
                log_advancement(&advancement);
            }
        }

        info!(
            "Recorded {score_a}-{score_b} for {} in {} (by {})",
            submission.match_id, next.id, submission.recorded_by
        );
        next.finish_if_complete();
        Ok(next)
    }

    /// Replace the result of an already finalized match
    ///
    /// League standings are rebuilt; in a cup the advanced winner is swapped
    /// if the corrected score changes it. Allowed after the championship has
    /// finished, which may change its champion.
    ///
    /// # Errors
    ///
    /// * `InvalidState` - the championship has not started
    /// * `NoResultToCorrect` - the match has no result yet
    /// * `DownstreamFinalized` - the cup successor has already been played
    /// * plus the score and lookup errors of [`Championship::record_result`]
    pub fn correct_result(&self, submission: &ResultSubmission) -> EngineResult<Self> {
        if self.status == ChampionshipStatus::Created {
            return Err(EngineError::InvalidState {
                expected: ChampionshipStatus::InProgress,
                actual: self.status,
            });
        }
        let (score_a, score_b) = submission.scores()?;
        self.validate()?;

        let mut next = self.clone();
        match &mut next.fixtures {
            Fixtures::League { matches, standings } => {
                let target = league_match(matches, &submission.match_id)?;
                if !target.is_finalized() {
                    return Err(EngineError::NoResultToCorrect(target.id.clone()));
                }
                let result = submission.result_for(target, score_a, score_b)?;
                target.finalize(result);
                *standings = league::compute_standings(&next.entrants, matches)?;
            }
            Fixtures::Cup { rounds } => {
                let advancement = cup::correct(rounds, submission, score_a, score_b)?;
                log_advancement(&advancement);
            }
        }

        info!(
            "Corrected {} in {} to {score_a}-{score_b} (by {})",
            submission.match_id, next.id, submission.recorded_by
        );
        Ok(next)
    }

    fn finish_if_complete(&mut self) {
        if self.status != ChampionshipStatus::InProgress {
            return;
        }
        let complete = match &self.fixtures {
            Fixtures::League { matches, .. } => {
                !matches.is_empty() && matches.iter().all(Match::is_finalized)
            }
            Fixtures::Cup { rounds } => {
                cup::final_match(rounds).is_some_and(|m| m.status == MatchStatus::Finalized)
            }
        };
        if complete {
            self.status = ChampionshipStatus::Finished;
            info!("Championship {} finished", self.id);
        }
    }
}

fn league_match<'a>(matches: &'a mut [Match], id: &MatchId) -> EngineResult<&'a mut Match> {
    matches
        .iter_mut()
        .find(|m| &m.id == id)
        .ok_or_else(|| EngineError::MatchNotFound(id.clone()))
}

fn log_advancement(advancement: &Advancement) {
    match advancement {
        Advancement::Advanced {
            winner,
            successor,
            ready,
        } => debug!(
            "{} moves on to {successor}{}",
            winner.name,
            if *ready { ", now ready to play" } else { "" }
        ),
        Advancement::Champion(winner) => info!("{} takes the cup", winner.name),
    }
}
