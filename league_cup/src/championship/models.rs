//! Championship aggregate models.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};
use uuid::Uuid;

use super::config::ChampionshipConfig;
use crate::cup::{self, Round};
use crate::entrants::Entrant;
use crate::errors::{EngineError, EngineResult};
use crate::league::StandingRow;
use crate::matches::{Match, MatchId, MatchStatus, Slot};

/// Championship ID type
pub type ChampionshipId = Uuid;

/// Championship format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipKind {
    /// All-play-all with a points table
    League,
    /// Single elimination
    Cup,
}

impl fmt::Display for ChampionshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChampionshipKind::League => write!(f, "league"),
            ChampionshipKind::Cup => write!(f, "cup"),
        }
    }
}

impl FromStr for ChampionshipKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "league" => Ok(ChampionshipKind::League),
            "cup" => Ok(ChampionshipKind::Cup),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown championship kind '{other}'"
            ))),
        }
    }
}

/// Championship state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipStatus {
    /// Accepting registrations
    Created,
    /// Fixtures generated, results being recorded
    InProgress,
    Finished,
}

impl fmt::Display for ChampionshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChampionshipStatus::Created => write!(f, "created"),
            ChampionshipStatus::InProgress => write!(f, "in_progress"),
            ChampionshipStatus::Finished => write!(f, "finished"),
        }
    }
}

/// Fixtures of a championship, shaped by its format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fixtures {
    League {
        matches: Vec<Match>,
        standings: Vec<StandingRow>,
    },
    Cup {
        rounds: Vec<Round>,
    },
}

impl Fixtures {
    /// Fixtures of a championship that has not started yet.
    pub fn empty(kind: ChampionshipKind) -> Self {
        match kind {
            ChampionshipKind::League => Fixtures::League {
                matches: Vec::new(),
                standings: Vec::new(),
            },
            ChampionshipKind::Cup => Fixtures::Cup { rounds: Vec::new() },
        }
    }

    pub fn kind(&self) -> ChampionshipKind {
        match self {
            Fixtures::League { .. } => ChampionshipKind::League,
            Fixtures::Cup { .. } => ChampionshipKind::Cup,
        }
    }

    /// Every match, cup matches in round order.
    pub fn all_matches(&self) -> Vec<&Match> {
        match self {
            Fixtures::League { matches, .. } => matches.iter().collect(),
            Fixtures::Cup { rounds } => rounds.iter().flat_map(|r| &r.matches).collect(),
        }
    }
}

/// Full persisted snapshot of one championship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Championship {
    pub id: ChampionshipId,
    pub config: ChampionshipConfig,
    pub status: ChampionshipStatus,
    pub entrants: Vec<Entrant>,
    pub fixtures: Fixtures,
    /// Opaque identity of the organizer
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Championship {
    pub fn kind(&self) -> ChampionshipKind {
        self.fixtures.kind()
    }

    pub fn find_match(&self, id: &MatchId) -> Option<&Match> {
        self.fixtures.all_matches().into_iter().find(|m| &m.id == id)
    }

    /// League table; `None` for a cup.
    pub fn standings(&self) -> Option<&[StandingRow]> {
        match &self.fixtures {
            Fixtures::League { standings, .. } => Some(standings),
            Fixtures::Cup { .. } => None,
        }
    }

    /// Bracket rounds; `None` for a league.
    pub fn rounds(&self) -> Option<&[Round]> {
        match &self.fixtures {
            Fixtures::Cup { rounds } => Some(rounds),
            Fixtures::League { .. } => None,
        }
    }

    /// Matches that can take a result right now.
    pub fn pending_matches(&self) -> Vec<&Match> {
        self.fixtures
            .all_matches()
            .into_iter()
            .filter(|m| m.status == MatchStatus::Pending)
            .collect()
    }

    /// Winner of a finished championship: the league leader or the cup
    /// final's winner.
    pub fn champion(&self) -> Option<&Entrant> {
        if self.status != ChampionshipStatus::Finished {
            return None;
        }
        match &self.fixtures {
            Fixtures::League { standings, .. } => standings.first().map(|row| &row.entrant),
            Fixtures::Cup { rounds } => cup::final_match(rounds)?.winner(),
        }
    }

    /// Check the snapshot's referential invariants
    ///
    /// Entrant and match ids must be unique, every real slot must hold an
    /// exact copy of a registered entrant, and league matches must not
    /// contain placeholders.
    ///
    /// # Errors
    ///
    /// `InconsistentAggregate` describing the first violation found.
    pub fn validate(&self) -> EngineResult<()> {
        let outcome = self.check_invariants();
        if let Err(err) = &outcome {
            warn!("Championship {} failed validation: {err}", self.id);
        }
        outcome
    }

    fn check_invariants(&self) -> EngineResult<()> {
        let mut registry = HashMap::with_capacity(self.entrants.len());
        for entrant in &self.entrants {
            if registry.insert(&entrant.id, entrant).is_some() {
                return Err(EngineError::inconsistent(format!(
                    "entrant {} is registered twice",
                    entrant.id
                )));
            }
        }

        let is_league = self.kind() == ChampionshipKind::League;
        let mut match_ids = HashSet::new();
        for m in self.fixtures.all_matches() {
            if !match_ids.insert(&m.id) {
                return Err(EngineError::inconsistent(format!(
                    "match id {} is used twice",
                    m.id
                )));
            }
            for slot in m.slots() {
                match slot {
                    Slot::Real(entrant) => match registry.get(&entrant.id) {
                        None => {
                            return Err(EngineError::inconsistent(format!(
                                "match {} references unknown entrant {}",
                                m.id, entrant.id
                            )));
                        }
                        Some(registered) if *registered != entrant => {
                            return Err(EngineError::inconsistent(format!(
                                "match {} holds a stale copy of entrant {}",
                                m.id, entrant.id
                            )));
                        }
                        Some(_) => {}
                    },
                    Slot::Placeholder { .. } if is_league => {
                        return Err(EngineError::inconsistent(format!(
                            "league match {} has an unresolved slot",
                            m.id
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Serialize to pretty JSON for the persistence layer.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot from JSON and check its invariants.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let championship: Self = serde_json::from_str(json)?;
        championship.validate()?;
        Ok(championship)
    }
}
