//! # League Cup
//!
//! A championship engine for small amateur competitions run either as a
//! round-robin league or as a single-elimination cup.
//!
//! The engine works on snapshots. A [`Championship`] is loaded by the caller,
//! passed to an operation such as [`Championship::record_result`], and a new
//! snapshot comes back. Nothing is persisted here; storage, identity and
//! notifications belong to the caller.
//!
//! ## Core Modules
//!
//! - [`league`]: Round-robin fixture generation and the standings table
//! - [`cup`]: Bracket construction with byes, and winner advancement
//! - [`championship`]: The aggregate and its lifecycle
//! - [`matches`]: Matches, slots and submitted results
//! - [`entrants`]: Participants and the registration eligibility rule

/// The championship aggregate and its lifecycle operations.
pub mod championship;
pub use championship::{
    Championship, ChampionshipConfig, ChampionshipId, ChampionshipKind, ChampionshipStatus,
    Fixtures,
};

pub mod constants;

/// Knockout bracket construction and advancement.
pub mod cup;
pub use cup::{Advancement, Round};

pub mod draw;

/// Participants of a championship.
pub mod entrants;
pub use entrants::{Entrant, EntrantId, can_add_entrant};

pub mod errors;
pub use errors::{EngineError, EngineResult};

/// Round-robin scheduling and standings.
pub mod league;
pub use league::{StandingRow, compute_standings};

/// Matches, slots and submitted results.
pub mod matches;
pub use matches::{Match, MatchId, MatchResult, MatchStatus, ResultSubmission, Slot};
