//! Creating championships, registering entrants and generating fixtures.

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use uuid::Uuid;

use super::config::ChampionshipConfig;
use super::models::{Championship, ChampionshipId, ChampionshipKind, ChampionshipStatus, Fixtures};
use crate::constants::MIN_ENTRANTS;
use crate::cup;
use crate::entrants::{Entrant, can_add_entrant};
use crate::errors::{EngineError, EngineResult};
use crate::league;

impl Championship {
    /// Create an empty championship accepting registrations
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` does not validate.
    pub fn new(
        id: ChampionshipId,
        config: ChampionshipConfig,
        kind: ChampionshipKind,
        created_by: &str,
        created_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            id,
            config,
            status: ChampionshipStatus::Created,
            entrants: Vec::new(),
            fixtures: Fixtures::empty(kind),
            created_by: created_by.to_string(),
            created_at,
        })
    }

    /// [`Championship::new`] with a fresh id and the current time.
    pub fn create(
        config: ChampionshipConfig,
        kind: ChampionshipKind,
        created_by: &str,
    ) -> EngineResult<Self> {
        Self::new(Uuid::new_v4(), config, kind, created_by, Utc::now())
    }

    /// Add an entrant to the roster
    ///
    /// # Errors
    ///
    /// * `InvalidState` - registration is closed
    /// * `AlreadyRegistered` - an entrant with this id already joined
    /// * `ChampionshipFull` - the roster is at `max_entrants`
    /// * `TeamAlreadyRepresented` - the team is taken and sharing is not allowed
    pub fn register(&self, entrant: Entrant) -> EngineResult<Self> {
        self.expect_status(ChampionshipStatus::Created)?;

        if self.entrants.iter().any(|e| e.id == entrant.id) {
            return Err(EngineError::AlreadyRegistered(entrant.id));
        }
        if self.entrants.len() >= self.config.max_entrants {
            return Err(EngineError::ChampionshipFull(self.config.max_entrants));
        }
        if !can_add_entrant(&entrant, &self.entrants, self.config.allow_same_team) {
            return Err(EngineError::TeamAlreadyRepresented(entrant.team));
        }

        let mut next = self.clone();
        next.entrants.push(entrant);
        Ok(next)
    }

    /// Close registration and generate fixtures
    ///
    /// A league gets its full schedule and an all-zero table, a cup its
    /// seeded bracket.
    ///
    /// # Errors
    ///
    /// * `InvalidState` - already started
    /// * `NotEnoughEntrants` - fewer than two entrants
    pub fn start<R>(&self, rng: &mut R) -> EngineResult<Self>
    where
        R: Rng + ?Sized,
    {
        self.expect_status(ChampionshipStatus::Created)?;
        if self.entrants.len() < MIN_ENTRANTS {
            return Err(EngineError::NotEnoughEntrants {
                needed: MIN_ENTRANTS,
                current: self.entrants.len(),
            });
        }

        let fixtures = match self.kind() {
            ChampionshipKind::League => {
                let matches = league::schedule(&self.entrants, rng);
                let standings = league::compute_standings(&self.entrants, &matches)?;
                Fixtures::League { matches, standings }
            }
            ChampionshipKind::Cup => Fixtures::Cup {
                rounds: cup::build_bracket(&self.entrants, rng),
            },
        };

        let mut next = self.clone();
        next.fixtures = fixtures;
        next.status = ChampionshipStatus::InProgress;
        info!(
            "Started {} {} with {} entrants",
            next.kind(),
            next.id,
            next.entrants.len()
        );
        Ok(next)
    }

    pub(super) fn expect_status(&self, expected: ChampionshipStatus) -> EngineResult<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                expected,
                actual: self.status,
            })
        }
    }
}
