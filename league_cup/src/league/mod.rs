//! All-play-all league play: fixture generation and the standings table.

pub mod scheduler;
pub mod standings;

pub use scheduler::{fixture_count, schedule};
pub use standings::{StandingRow, compute_standings};
