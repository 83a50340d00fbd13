use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::entrants::{Entrant, EntrantId};
use crate::errors::{EngineError, EngineResult};

/// Match identifier, stable across snapshots.
///
/// League ids are built from the two entrant ids, cup ids from round and
/// position within the round.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the league fixture between `a` and `b`.
    pub fn league(a: &EntrantId, b: &EntrantId) -> Self {
        Self(format!("{a}-vs-{b}"))
    }

    /// Id of the cup match at 1-indexed `position` within `round`.
    pub fn cup(round: u32, position: usize) -> Self {
        Self(format!("round{round}-match{position}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Occupant of one side of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    /// A registered entrant
    Real(Entrant),
    /// Whoever wins `source`; only exists in cup brackets
    Placeholder { source: MatchId },
}

impl Slot {
    pub fn entrant(&self) -> Option<&Entrant> {
        match self {
            Slot::Real(entrant) => Some(entrant),
            Slot::Placeholder { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Slot::Real(_))
    }

    /// True when this slot waits on the winner of `source`.
    pub fn awaits(&self, source: &MatchId) -> bool {
        matches!(self, Slot::Placeholder { source: s } if s == source)
    }

    /// True when this slot holds the entrant `id`.
    pub fn holds(&self, id: &EntrantId) -> bool {
        matches!(self, Slot::Real(entrant) if &entrant.id == id)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Real(entrant) => write!(f, "{}", entrant.name),
            Slot::Placeholder { source } => write!(f, "Winner of {source}"),
        }
    }
}

/// Match lifecycle. League matches never use `Awaiting`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// At least one slot is still a placeholder
    Awaiting,
    /// Both sides known, no result yet
    Pending,
    Finalized,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Awaiting => write!(f, "awaiting"),
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Finalized => write!(f, "finalized"),
        }
    }
}

/// A recorded score
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score_a: u32,
    pub score_b: u32,
    /// `None` only for a drawn league match
    pub winner: Option<EntrantId>,
    /// Opaque identity of whoever submitted the score
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        self.score_a == self.score_b
    }
}

/// A single fixture
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub slot_a: Slot,
    pub slot_b: Slot,
    pub status: MatchStatus,
    #[serde(default)]
    pub result: Option<MatchResult>,
    /// Cup only: the match that receives this match's winner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<MatchId>,
    pub round: u32,
}

impl Match {
    /// Create a pending league fixture between `a` and `b`.
    pub fn league(a: Entrant, b: Entrant) -> Self {
        Self {
            id: MatchId::league(&a.id, &b.id),
            slot_a: Slot::Real(a),
            slot_b: Slot::Real(b),
            status: MatchStatus::Pending,
            result: None,
            next_match_id: None,
            round: 1,
        }
    }

    /// Create a cup match. First-round matches start pending, later ones
    /// wait on earlier results.
    pub fn knockout(id: MatchId, slot_a: Slot, slot_b: Slot, round: u32) -> Self {
        let status = if round == 1 {
            MatchStatus::Pending
        } else {
            MatchStatus::Awaiting
        };
        Self {
            id,
            slot_a,
            slot_b,
            status,
            result: None,
            next_match_id: None,
            round,
        }
    }

    pub fn slots(&self) -> [&Slot; 2] {
        [&self.slot_a, &self.slot_b]
    }

    pub fn is_finalized(&self) -> bool {
        self.status == MatchStatus::Finalized
    }

    /// Both slots hold real entrants.
    pub fn is_ready(&self) -> bool {
        self.slot_a.is_resolved() && self.slot_b.is_resolved()
    }

    pub fn involves(&self, id: &EntrantId) -> bool {
        self.slot_a.holds(id) || self.slot_b.holds(id)
    }

    /// Entrant ahead on the given score, `None` on a level score.
    ///
    /// # Errors
    ///
    /// `MatchNotReady` when the leading side is still a placeholder.
    pub fn leader(&self, score_a: u32, score_b: u32) -> EngineResult<Option<&Entrant>> {
        let slot = match score_a.cmp(&score_b) {
            Ordering::Greater => &self.slot_a,
            Ordering::Less => &self.slot_b,
            Ordering::Equal => return Ok(None),
        };
        slot.entrant()
            .map(Some)
            .ok_or_else(|| EngineError::MatchNotReady(self.id.clone()))
    }

    /// Winning entrant of a finalized match.
    pub fn winner(&self) -> Option<&Entrant> {
        let winner = self.result.as_ref()?.winner.as_ref()?;
        self.slots()
            .into_iter()
            .filter_map(Slot::entrant)
            .find(|entrant| &entrant.id == winner)
    }

    /// Slot waiting on the winner of `source`.
    pub fn slot_awaiting_mut(&mut self, source: &MatchId) -> Option<&mut Slot> {
        if self.slot_a.awaits(source) {
            Some(&mut self.slot_a)
        } else if self.slot_b.awaits(source) {
            Some(&mut self.slot_b)
        } else {
            None
        }
    }

    /// Slot currently holding entrant `id`.
    pub fn slot_holding_mut(&mut self, id: &EntrantId) -> Option<&mut Slot> {
        if self.slot_a.holds(id) {
            Some(&mut self.slot_a)
        } else if self.slot_b.holds(id) {
            Some(&mut self.slot_b)
        } else {
            None
        }
    }

    pub fn finalize(&mut self, result: MatchResult) {
        self.result = Some(result);
        self.status = MatchStatus::Finalized;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Entrant {
        Entrant::new("u1", "Ana", "Flamengo")
    }

    fn bruno() -> Entrant {
        Entrant::new("u2", "Bruno", "Palmeiras")
    }

    #[test]
    fn test_league_match_defaults() {
        let m = Match::league(ana(), bruno());
        assert_eq!(m.id.as_str(), "u1-vs-u2");
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.round, 1);
        assert!(m.result.is_none());
        assert!(m.next_match_id.is_none());
        assert!(m.is_ready());
    }

    #[test]
    fn test_knockout_status_by_round() {
        let first = Match::knockout(
            MatchId::cup(1, 1),
            Slot::Real(ana()),
            Slot::Real(bruno()),
            1,
        );
        assert_eq!(first.status, MatchStatus::Pending);

        let second = Match::knockout(
            MatchId::cup(2, 1),
            Slot::Placeholder {
                source: MatchId::cup(1, 1),
            },
            Slot::Real(ana()),
            2,
        );
        assert_eq!(second.status, MatchStatus::Awaiting);
        assert!(!second.is_ready());
    }

    #[test]
    fn test_leader() {
        let m = Match::league(ana(), bruno());
        assert_eq!(m.leader(2, 1).unwrap().unwrap().name, "Ana");
        assert_eq!(m.leader(0, 3).unwrap().unwrap().name, "Bruno");
        assert!(m.leader(2, 2).unwrap().is_none());
    }

    #[test]
    fn test_leader_on_placeholder_is_not_ready() {
        let m = Match::knockout(
            MatchId::cup(2, 1),
            Slot::Placeholder {
                source: MatchId::cup(1, 1),
            },
            Slot::Real(ana()),
            2,
        );
        assert!(matches!(m.leader(1, 0), Err(EngineError::MatchNotReady(_))));
    }

    #[test]
    fn test_slot_awaiting() {
        let source = MatchId::cup(1, 2);
        let mut m = Match::knockout(
            MatchId::cup(2, 1),
            Slot::Placeholder {
                source: MatchId::cup(1, 1),
            },
            Slot::Placeholder {
                source: source.clone(),
            },
            2,
        );
        let slot = m.slot_awaiting_mut(&source).expect("second slot waits on match 2");
        *slot = Slot::Real(bruno());
        assert!(m.slot_b.holds(&EntrantId::new("u2")));
        assert!(m.slot_awaiting_mut(&MatchId::cup(1, 3)).is_none());
    }

    #[test]
    fn test_slot_serde_tagging() {
        let slot = Slot::Placeholder {
            source: MatchId::cup(1, 1),
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["source"], "round1-match1");

        let real: Slot = serde_json::from_str(
            r#"{"kind":"real","id":"u1","name":"Ana","team":"Flamengo"}"#,
        )
        .unwrap();
        assert_eq!(real, Slot::Real(ana()));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(MatchStatus::Awaiting.to_string(), "awaiting");
        assert_eq!(MatchStatus::Finalized.to_string(), "finalized");
    }
}
