//! League table derived from finalized results.
//!
//! The table is rebuilt from scratch on every call; nothing is patched
//! incrementally, so it always agrees with the match list it came from.

use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashMap};

use crate::constants::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use crate::entrants::{Entrant, EntrantId};
use crate::errors::{EngineError, EngineResult};
use crate::matches::{Match, MatchStatus, Slot};

/// One line of the league table
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub entrant: Entrant,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingRow {
    pub fn new(entrant: Entrant) -> Self {
        Self {
            entrant,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Credit one finished match; `None` if a counter would overflow.
    fn record(&mut self, scored: u32, conceded: u32) -> Option<()> {
        self.played += 1;
        self.goals_for = self.goals_for.checked_add(scored)?;
        self.goals_against = self.goals_against.checked_add(conceded)?;
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
            Ordering::Less => self.losses += 1,
        }
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        Some(())
    }

    /// Table order: points, goal difference and goals scored descending, then
    /// name ascending. Entrant id breaks a tie between identical names.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference.cmp(&self.goal_difference))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| self.entrant.name.cmp(&other.entrant.name))
            .then_with(|| self.entrant.id.cmp(&other.entrant.id))
    }
}

/// Build a ranked table for `entrants` from `matches`
///
/// Only finalized matches with a result count. Every match is checked
/// against the roster, counted or not.
///
/// # Errors
///
/// `InconsistentAggregate` if a match references an entrant missing from
/// `entrants`, pits an entrant against itself, or has a placeholder slot.
pub fn compute_standings(
    entrants: &[Entrant],
    matches: &[Match],
) -> EngineResult<Vec<StandingRow>> {
    let index: HashMap<&EntrantId, usize> = entrants
        .iter()
        .enumerate()
        .map(|(i, entrant)| (&entrant.id, i))
        .collect();
    let mut rows: Vec<StandingRow> = entrants.iter().cloned().map(StandingRow::new).collect();

    for m in matches {
        let a = row_index(m, &m.slot_a, &index)?;
        let b = row_index(m, &m.slot_b, &index)?;
        if a == b {
            return Err(EngineError::inconsistent(format!(
                "match {} pits an entrant against itself",
                m.id
            )));
        }

        if m.status != MatchStatus::Finalized {
            continue;
        }
        let Some(result) = &m.result else {
            continue;
        };
        rows[a]
            .record(result.score_a, result.score_b)
            .and_then(|()| rows[b].record(result.score_b, result.score_a))
            .ok_or_else(|| {
                EngineError::inconsistent(format!("goal totals overflow at match {}", m.id))
            })?;
    }

    rows.sort_by(StandingRow::rank_cmp);
    debug!("Computed standings for {} entrants", rows.len());
    Ok(rows)
}

fn row_index(m: &Match, slot: &Slot, index: &HashMap<&EntrantId, usize>) -> EngineResult<usize> {
    match slot {
        Slot::Real(entrant) => index.get(&entrant.id).copied().ok_or_else(|| {
            EngineError::inconsistent(format!(
                "match {} references unknown entrant {}",
                m.id, entrant.id
            ))
        }),
        Slot::Placeholder { .. } => Err(EngineError::inconsistent(format!(
            "league match {} has an unresolved slot",
            m.id
        ))),
    }
}
