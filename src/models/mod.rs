//! Data structures for brackets: matches, scores, tournaments, teams and persisted seeding.

mod bracket;
mod entities;
mod error;
mod match_info;
mod seeded;

pub use bracket::{match_at, Bracket};
pub use entities::{Team, TeamId, Tournament, TournamentId, User, UserId};
pub use error::BracketError;
pub use match_info::{MatchInfo, Score, Side, Slot};
pub use seeded::{MatchResult, SeededBracket};
