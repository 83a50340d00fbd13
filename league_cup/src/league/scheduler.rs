//! Round-robin fixture generation.

use log::debug;
use rand::Rng;

use crate::draw;
use crate::entrants::Entrant;
use crate::matches::Match;

/// Number of fixtures an all-play-all league of `entrants` produces.
pub fn fixture_count(entrants: usize) -> usize {
    entrants * entrants.saturating_sub(1) / 2
}

/// Generate one pending fixture per unordered pair of entrants
///
/// Pairs are generated in input order and then shuffled. The shuffle only
/// changes presentation order, never which pairs exist. Fewer than two
/// entrants yield no fixtures; rejecting such a league is the caller's job.
///
/// # Arguments
///
/// * `entrants` - Registered entrants
/// * `rng` - Source for the presentation shuffle
pub fn schedule<R>(entrants: &[Entrant], rng: &mut R) -> Vec<Match>
where
    R: Rng + ?Sized,
{
    let mut matches = Vec::with_capacity(fixture_count(entrants.len()));
    for (i, a) in entrants.iter().enumerate() {
        for b in &entrants[i + 1..] {
            matches.push(Match::league(a.clone(), b.clone()));
        }
    }
    draw::shuffle(&mut matches, rng);

    debug!(
        "Scheduled {} league fixtures for {} entrants",
        matches.len(),
        entrants.len()
    );
    matches
}
