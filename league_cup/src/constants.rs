//! Scoring and roster limits shared across the engine.

/// Points awarded to the winner of a league match.
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded to each side of a drawn league match.
pub const POINTS_FOR_DRAW: u32 = 1;

/// Fewest entrants a championship can start with.
pub const MIN_ENTRANTS: usize = 2;

pub const DEFAULT_MAX_ENTRANTS: usize = 8;

/// Hard cap on roster size.
pub const MAX_ENTRANTS: usize = 256;

/// Highest score a single side can be credited with in one match.
pub const MAX_SCORE: u32 = 999;
