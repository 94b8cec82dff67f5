//! Bracket business logic: seeding, winner propagation, scoring, single-match simulation.

mod builder;
mod names;
mod propagation;
mod scoring;
mod seeding;
mod simulator;
mod single_match;

pub use builder::build_bracket;
pub use names::{resolve_team_name, resolve_team_names};
pub use propagation::{play_out, resolve_match};
pub use scoring::{
    break_tie, draw_score, NoScores, RandomScores, RecordedScores, ScoreSource, SCORE_RANGE,
};
pub use seeding::{bracket_size, has_match, matches_in_round, round_count, seed_slots};
pub use simulator::simulate_results;
pub use single_match::{ensure_seeded, replay, simulate_single_match};
