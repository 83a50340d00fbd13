//! Single-elimination cup play: bracket construction and winner advancement.

pub mod advancement;
pub mod bracket;

pub use advancement::{Advancement, advance, correct, record};
pub use bracket::{
    Round, build_bracket, final_match, find_match, find_match_mut, locate, round_name, total_rounds,
};
