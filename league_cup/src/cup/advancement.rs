//! Resolving finished cup matches into their successors.

use log::{debug, info};

use super::bracket::{Round, find_match, find_match_mut, locate};
use crate::entrants::Entrant;
use crate::errors::{EngineError, EngineResult};
use crate::matches::{Match, MatchId, MatchStatus, ResultSubmission, Slot};

/// What happened to the winner of a finished cup match
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Advancement {
    /// Winner placed into `successor`; `ready` once both its slots are real
    Advanced {
        winner: Entrant,
        successor: MatchId,
        ready: bool,
    },
    /// The final was decided
    Champion(Entrant),
}

/// Move the winner of finalized match `finished` into its successor
///
/// The successor slot holding the placeholder for `finished` is replaced by
/// the winner. Once neither slot of the successor is a placeholder it turns
/// from `awaiting` to `pending`. A match without a successor is the final.
///
/// # Errors
///
/// * `MatchNotFound` - `finished` is not in the bracket
/// * `MatchNotReady` - `finished` has no finalized result
/// * `AmbiguousOutcome` - the recorded score is level
/// * `InconsistentAggregate` - the successor is missing or does not wait on `finished`
pub fn advance(rounds: &mut [Round], finished: &MatchId) -> EngineResult<Advancement> {
    let (winner, successor_id) = {
        let m = find_match(rounds, finished)
            .ok_or_else(|| EngineError::MatchNotFound(finished.clone()))?;
        (decisive_winner(m)?.clone(), m.next_match_id.clone())
    };

    let Some(successor_id) = successor_id else {
        info!("{} wins the final ({finished})", winner.name);
        return Ok(Advancement::Champion(winner));
    };

    let successor = find_match_mut(rounds, &successor_id).ok_or_else(|| {
        EngineError::inconsistent(format!("successor {successor_id} of {finished} is missing"))
    })?;
    let slot = successor.slot_awaiting_mut(finished).ok_or_else(|| {
        EngineError::inconsistent(format!("match {successor_id} has no slot waiting on {finished}"))
    })?;
    *slot = Slot::Real(winner.clone());

    let ready = successor.is_ready();
    if ready && successor.status == MatchStatus::Awaiting {
        successor.status = MatchStatus::Pending;
    }
    debug!("{} advances from {finished} to {successor_id}", winner.name);

    Ok(Advancement::Advanced {
        winner,
        successor: successor_id,
        ready,
    })
}

/// Record a decisive score on a pending cup match and advance its winner
///
/// Every check runs before the bracket is touched, so on error `rounds` is
/// unchanged.
///
/// # Errors
///
/// * `MatchNotFound` - unknown match
/// * `MatchNotReady` - the match is still awaiting earlier results
/// * `ResultAlreadyRecorded` - the match is already finalized
/// * `AmbiguousOutcome` - level score
pub fn record(
    rounds: &mut [Round],
    submission: &ResultSubmission,
    score_a: u32,
    score_b: u32,
) -> EngineResult<Advancement> {
    let id = &submission.match_id;
    let (r, i) = locate(rounds, id).ok_or_else(|| EngineError::MatchNotFound(id.clone()))?;
    let target = &rounds[r].matches[i];

    match target.status {
        MatchStatus::Awaiting => return Err(EngineError::MatchNotReady(id.clone())),
        MatchStatus::Finalized => return Err(EngineError::ResultAlreadyRecorded(id.clone())),
        MatchStatus::Pending => {}
    }
    if !target.is_ready() {
        return Err(EngineError::inconsistent(format!(
            "match {id} is pending with an unresolved slot"
        )));
    }

    let winner = target
        .leader(score_a, score_b)?
        .cloned()
        .ok_or_else(|| ambiguous(id, score_a, score_b))?;
    if let Some(next) = &target.next_match_id {
        let successor = successor_of(rounds, id, next)?;
        if !successor.slots().iter().any(|slot| slot.awaits(id)) {
            return Err(EngineError::inconsistent(format!(
                "match {next} has no slot waiting on {id}"
            )));
        }
    }

    let result = submission.to_result(score_a, score_b, Some(&winner));
    rounds[r].matches[i].finalize(result);
    advance(rounds, id)
}

/// Replace the result of a finalized cup match
///
/// If the winner changes, the successor slot holding the old winner is
/// handed to the new one. Not allowed once the successor has been played.
///
/// # Errors
///
/// * `MatchNotFound` - unknown match
/// * `NoResultToCorrect` - the match has no finalized result
/// * `AmbiguousOutcome` - level score
/// * `DownstreamFinalized` - the successor already has a result
pub fn correct(
    rounds: &mut [Round],
    submission: &ResultSubmission,
    score_a: u32,
    score_b: u32,
) -> EngineResult<Advancement> {
    let id = &submission.match_id;
    let (r, i) = locate(rounds, id).ok_or_else(|| EngineError::MatchNotFound(id.clone()))?;
    let target = &rounds[r].matches[i];

    let previous = match (&target.status, &target.result) {
        (MatchStatus::Finalized, Some(result)) => result.winner.clone(),
        _ => return Err(EngineError::NoResultToCorrect(id.clone())),
    };
    let winner = target
        .leader(score_a, score_b)?
        .cloned()
        .ok_or_else(|| ambiguous(id, score_a, score_b))?;

    let next = target.next_match_id.clone();
    if let Some(next) = &next {
        let successor = successor_of(rounds, id, next)?;
        if successor.is_finalized() {
            return Err(EngineError::DownstreamFinalized {
                match_id: id.clone(),
                successor: next.clone(),
            });
        }
        if !previous.as_ref().is_some_and(|p| successor.involves(p)) {
            return Err(EngineError::inconsistent(format!(
                "match {next} does not hold the winner of {id}"
            )));
        }
    }

    let result = submission.to_result(score_a, score_b, Some(&winner));
    rounds[r].matches[i].finalize(result);
    info!("Corrected {id}: {score_a}-{score_b}, winner {}", winner.name);

    let Some(next) = next else {
        return Ok(Advancement::Champion(winner));
    };
    let successor = find_match_mut(rounds, &next)
        .ok_or_else(|| EngineError::inconsistent(format!("successor {next} of {id} is missing")))?;
    if let Some(slot) = previous.as_ref().and_then(|p| successor.slot_holding_mut(p)) {
        *slot = Slot::Real(winner.clone());
    }
    let ready = successor.is_ready();

    Ok(Advancement::Advanced {
        winner,
        successor: next,
        ready,
    })
}

fn decisive_winner(m: &Match) -> EngineResult<&Entrant> {
    let result = match (&m.status, &m.result) {
        (MatchStatus::Finalized, Some(result)) => result,
        _ => return Err(EngineError::MatchNotReady(m.id.clone())),
    };
    m.leader(result.score_a, result.score_b)?
        .ok_or_else(|| ambiguous(&m.id, result.score_a, result.score_b))
}

fn successor_of<'a>(rounds: &'a [Round], id: &MatchId, next: &MatchId) -> EngineResult<&'a Match> {
    find_match(rounds, next)
        .ok_or_else(|| EngineError::inconsistent(format!("successor {next} of {id} is missing")))
}

fn ambiguous(id: &MatchId, score_a: u32, score_b: u32) -> EngineError {
    EngineError::AmbiguousOutcome {
        match_id: id.clone(),
        score_a,
        score_b,
    }
}
