//! The championship aggregate: the unit a caller loads, hands to the engine
//! and persists again.
//!
//! Every operation borrows a snapshot and returns a new one, so a rejected
//! operation never leaves a half-applied change behind.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use league_cup::{
//!     Championship, ChampionshipConfig, ChampionshipKind, Entrant, ResultSubmission, draw,
//! };
//!
//! # fn main() -> Result<(), league_cup::EngineError> {
//! let config = ChampionshipConfig::named("Friday Cup");
//! let mut cup = Championship::create(config, ChampionshipKind::Cup, "organizer")?;
//! for (id, name, team) in [("u1", "Ana", "Flamengo"), ("u2", "Bruno", "Palmeiras")] {
//!     cup = cup.register(Entrant::new(id, name, team))?;
//! }
//! let cup = cup.start(&mut draw::seeded(7))?;
//!
//! let final_id = cup.pending_matches()[0].id.clone();
//! let submission = ResultSubmission::new(final_id, 2, 1, "referee", Utc::now());
//! let cup = cup.record_result(&submission)?;
//! assert!(cup.champion().is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
mod lifecycle;
pub mod models;
mod recorder;

pub use config::ChampionshipConfig;
pub use models::{Championship, ChampionshipId, ChampionshipKind, ChampionshipStatus, Fixtures};
