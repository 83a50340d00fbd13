/// Property-based tests for scheduling, brackets and standings using proptest
///
/// These tests verify the engine's structural guarantees across randomly
/// sized rosters, random seeds and random score sheets.
use chrono::Utc;
use league_cup::{
    Championship, ChampionshipConfig, ChampionshipKind, EngineError, Entrant, EntrantId, Match,
    MatchId, MatchResult, MatchStatus, ResultSubmission, Slot,
    cup::{self, build_bracket, total_rounds},
    draw,
    league::{compute_standings, fixture_count, schedule},
};
use proptest::prelude::*;
use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
};

fn roster(n: usize) -> Vec<Entrant> {
    (0..n)
        .map(|i| Entrant::new(format!("e{i:03}"), &format!("Name {}", i % 5), &format!("Club {i}")))
        .collect()
}

// Roster size plus a seed for the draw
fn roster_strategy(max: usize) -> impl Strategy<Value = (usize, u64)> {
    (0..=max, any::<u64>())
}

// A played league: roster, fixtures and one score per fixture
fn played_league_strategy() -> impl Strategy<Value = (Vec<Entrant>, Vec<Match>, Vec<(u32, u32)>)> {
    (2usize..=8, any::<u64>()).prop_flat_map(|(n, seed)| {
        let entrants = roster(n);
        let matches = schedule(&entrants, &mut draw::seeded(seed));
        let count = matches.len();
        (
            Just(entrants),
            Just(matches),
            prop::collection::vec((0u32..6, 0u32..6), count),
        )
    })
}

fn finalize_all(matches: &[Match], scores: &[(u32, u32)]) -> Vec<Match> {
    matches
        .iter()
        .zip(scores)
        .map(|(m, &(a, b))| {
            let winner = match a.cmp(&b) {
                Ordering::Greater => m.slot_a.entrant(),
                Ordering::Less => m.slot_b.entrant(),
                Ordering::Equal => None,
            };
            let result = MatchResult {
                score_a: a,
                score_b: b,
                winner: winner.map(|e| e.id.clone()),
                recorded_by: "prop".to_string(),
                recorded_at: Utc::now(),
            };
            let mut played = m.clone();
            played.finalize(result);
            played
        })
        .collect()
}

proptest! {
    #[test]
    fn test_schedule_pairs_everyone_once((n, seed) in roster_strategy(20)) {
        let entrants = roster(n);
        let matches = schedule(&entrants, &mut draw::seeded(seed));

        prop_assert_eq!(matches.len(), n * n.saturating_sub(1) / 2);
        prop_assert_eq!(matches.len(), fixture_count(n));

        let mut pairs = BTreeSet::new();
        for m in &matches {
            let a = m.slot_a.entrant().unwrap().id.clone();
            let b = m.slot_b.entrant().unwrap().id.clone();
            prop_assert_ne!(&a, &b);
            let key = if a < b { (a, b) } else { (b, a) };
            prop_assert!(pairs.insert(key), "pair scheduled twice");
        }
    }

    #[test]
    fn test_bracket_shape((n, seed) in roster_strategy(40)) {
        let entrants = roster(n);
        let rounds = build_bracket(&entrants, &mut draw::seeded(seed));

        prop_assert_eq!(rounds.len() as u32, total_rounds(n));
        let expected = if n <= 1 { 0 } else { (n as f64).log2().ceil() as usize };
        prop_assert_eq!(rounds.len(), expected);

        if n >= 2 {
            // every entrant sits in exactly one first-round match or has a
            // bye; later rounds only hold real entrants that skipped round 1
            let mut seen: HashMap<EntrantId, usize> = HashMap::new();
            for m in &rounds[0].matches {
                for slot in m.slots() {
                    *seen.entry(slot.entrant().unwrap().id.clone()).or_default() += 1;
                }
            }
            let byes: Vec<&Entrant> = rounds[1..]
                .iter()
                .flat_map(|r| &r.matches)
                .flat_map(|m| m.slots())
                .filter_map(Slot::entrant)
                .collect();
            prop_assert!(byes.len() <= 1);
            for bye in byes {
                *seen.entry(bye.id.clone()).or_default() += 1;
            }
            prop_assert_eq!(seen.len(), n);
            prop_assert!(seen.values().all(|&count| count == 1));

            let finals = &rounds[rounds.len() - 1].matches;
            prop_assert_eq!(finals.len(), 1);
            prop_assert!(finals[0].next_match_id.is_none());
        }
    }

    #[test]
    fn test_standings_idempotent_and_consistent(
        (entrants, matches, scores) in played_league_strategy()
    ) {
        let played = finalize_all(&matches, &scores);
        let first = compute_standings(&entrants, &played).unwrap();
        let second = compute_standings(&entrants, &played).unwrap();
        prop_assert_eq!(&first, &second);

        for row in &first {
            prop_assert_eq!(row.wins + row.draws + row.losses, row.played);
            prop_assert_eq!(row.points, 3 * row.wins + row.draws);
            prop_assert_eq!(row.played as usize, entrants.len() - 1);
            prop_assert_eq!(
                row.goal_difference,
                i64::from(row.goals_for) - i64::from(row.goals_against)
            );
        }
    }

    #[test]
    fn test_standings_strict_order((entrants, matches, scores) in played_league_strategy()) {
        let played = finalize_all(&matches, &scores);
        let table = compute_standings(&entrants, &played).unwrap();

        for pair in table.windows(2) {
            prop_assert_eq!(pair[0].rank_cmp(&pair[1]), Ordering::Less);
        }
        for a in &table {
            for b in &table {
                if a.entrant.id != b.entrant.id {
                    prop_assert_ne!(a.rank_cmp(b), Ordering::Equal);
                    prop_assert_eq!(a.rank_cmp(b), b.rank_cmp(a).reverse());
                }
            }
        }
    }

    #[test]
    fn test_bad_scores_leave_snapshot_unchanged(
        seed in any::<u64>(),
        bad in prop_oneof![
            (i64::MIN..0, 0i64..10).prop_map(|(a, b)| (Some(a), Some(b))),
            (0i64..10, i64::MIN..0).prop_map(|(a, b)| (Some(a), Some(b))),
            (0i64..10).prop_map(|b| (None, Some(b))),
            (0i64..10).prop_map(|a| (Some(a), None)),
        ],
        kind in prop_oneof![Just(ChampionshipKind::League), Just(ChampionshipKind::Cup)],
    ) {
        let mut championship =
            Championship::create(ChampionshipConfig::named("Prop"), kind, "prop").unwrap();
        for entrant in roster(4) {
            championship = championship.register(entrant).unwrap();
        }
        let championship = championship.start(&mut draw::seeded(seed)).unwrap();
        let before = championship.clone();

        let submission = ResultSubmission {
            match_id: championship.pending_matches()[0].id.clone(),
            score_a: bad.0,
            score_b: bad.1,
            recorded_by: "prop".to_string(),
            recorded_at: Utc::now(),
        };
        let outcome = championship.record_result(&submission);
        prop_assert!(matches!(outcome, Err(EngineError::InvalidResult(_))));
        prop_assert_eq!(championship, before);
    }

    #[test]
    fn test_advancement_fills_one_slot(n in 2usize..=32, seed in any::<u64>()) {
        let entrants = roster(n);
        let mut rounds = build_bracket(&entrants, &mut draw::seeded(seed));

        let opener = rounds[0].matches[0].clone();
        let submission = ResultSubmission::new(opener.id.clone(), 1, 0, "prop", Utc::now());
        let advancement = cup::record(&mut rounds, &submission, 1, 0).unwrap();
        let winner = opener.slot_a.entrant().unwrap();

        match (advancement, &opener.next_match_id) {
            (cup::Advancement::Champion(champion), None) => prop_assert_eq!(&champion, winner),
            (cup::Advancement::Advanced { successor, ready, .. }, Some(next)) => {
                prop_assert_eq!(&successor, next);
                let successor = cup::find_match(&rounds, &successor).unwrap();
                let holding = successor.slots().iter().filter(|s| s.holds(&winner.id)).count();
                prop_assert_eq!(holding, 1);
                prop_assert_eq!(ready, successor.is_ready());
                prop_assert_eq!(successor.status == MatchStatus::Pending, successor.is_ready());
            }
            (other, next) => prop_assert!(false, "unexpected {:?} with successor {:?}", other, next),
        }
    }
}

#[test]
fn test_match_ids_unique_across_bracket() {
    let rounds = build_bracket(&roster(13), &mut draw::seeded(99));
    let ids: BTreeSet<MatchId> = rounds
        .iter()
        .flat_map(|r| r.matches.iter().map(|m| m.id.clone()))
        .collect();
    let total: usize = rounds.iter().map(|r| r.matches.len()).sum();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 12);
}
