//! Single-elimination bracket construction.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::draw;
use crate::entrants::Entrant;
use crate::matches::{Match, MatchId, Slot};

/// One layer of the bracket
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-indexed round number
    pub number: u32,
    pub name: String,
    pub matches: Vec<Match>,
}

/// Rounds needed to reduce `entrants` to one winner: ⌈log₂(n)⌉, 0 for n ≤ 1.
pub fn total_rounds(entrants: usize) -> u32 {
    if entrants <= 1 {
        0
    } else {
        usize::BITS - (entrants - 1).leading_zeros()
    }
}

/// Display name of round `number` in a bracket of `total` rounds.
pub fn round_name(number: u32, total: u32) -> String {
    let remaining = i64::from(total) - i64::from(number) + 1;
    match remaining {
        1 => "Final".to_string(),
        2 => "Semifinal".to_string(),
        3 => "Quarterfinal".to_string(),
        4 => "Round of 16".to_string(),
        _ => format!("Round {number}"),
    }
}

/// Build a seeded single-elimination bracket
///
/// Entrants are shuffled, then each round pairs neighbours. An odd one out
/// gets a bye into the next round with no match created, which can happen in
/// any round, not only the first. Each match's winner is represented in the
/// next round by a placeholder, and `next_match_id` points at the match where
/// that placeholder is eventually paired.
///
/// # Arguments
///
/// * `entrants` - Registered entrants, order irrelevant
/// * `rng` - Source for the seeding shuffle
///
/// # Returns
///
/// * `Vec<Round>` - ⌈log₂(n)⌉ rounds, empty for fewer than two entrants
pub fn build_bracket<R>(entrants: &[Entrant], rng: &mut R) -> Vec<Round>
where
    R: Rng + ?Sized,
{
    let total = total_rounds(entrants.len());
    let mut current: Vec<Slot> = entrants.iter().cloned().map(Slot::Real).collect();
    draw::shuffle(&mut current, rng);

    let mut rounds = Vec::with_capacity(total as usize);
    let mut number = 1;
    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        let mut matches = Vec::with_capacity(current.len() / 2);
        let mut slots = current.into_iter();

        while let Some(slot_a) = slots.next() {
            match slots.next() {
                Some(slot_b) => {
                    let id = MatchId::cup(number, matches.len() + 1);
                    next.push(Slot::Placeholder { source: id.clone() });
                    matches.push(Match::knockout(id, slot_a, slot_b, number));
                }
                None => {
                    debug!("{slot_a} gets a bye in round {number}");
                    next.push(slot_a);
                }
            }
        }

        rounds.push(Round {
            number,
            name: round_name(number, total),
            matches,
        });
        current = next;
        number += 1;
    }

    link_successors(&mut rounds);
    debug!(
        "Built {} round bracket for {} entrants",
        rounds.len(),
        entrants.len()
    );
    rounds
}

fn link_successors(rounds: &mut [Round]) {
    let mut successors: HashMap<MatchId, MatchId> = HashMap::new();
    for m in rounds.iter().flat_map(|round| &round.matches) {
        for slot in m.slots() {
            if let Slot::Placeholder { source } = slot {
                successors.insert(source.clone(), m.id.clone());
            }
        }
    }
    for m in rounds.iter_mut().flat_map(|round| round.matches.iter_mut()) {
        m.next_match_id = successors.remove(&m.id);
    }
}

/// Round and position of match `id`.
pub fn locate(rounds: &[Round], id: &MatchId) -> Option<(usize, usize)> {
    rounds.iter().enumerate().find_map(|(r, round)| {
        round
            .matches
            .iter()
            .position(|m| &m.id == id)
            .map(|i| (r, i))
    })
}

pub fn find_match<'a>(rounds: &'a [Round], id: &MatchId) -> Option<&'a Match> {
    rounds
        .iter()
        .flat_map(|round| &round.matches)
        .find(|m| &m.id == id)
}

pub fn find_match_mut<'a>(rounds: &'a mut [Round], id: &MatchId) -> Option<&'a mut Match> {
    rounds
        .iter_mut()
        .flat_map(|round| round.matches.iter_mut())
        .find(|m| &m.id == id)
}

/// The last match of the bracket.
pub fn final_match(rounds: &[Round]) -> Option<&Match> {
    rounds.last()?.matches.first()
}
