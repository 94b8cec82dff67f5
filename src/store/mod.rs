//! Collaborators the bracket core reads from and persists into.
//!
//! The surrounding application owns tournaments, teams and users; the core only
//! looks them up. Live-bracket seeding and per-match results go through
//! [`BracketStore`], which is responsible for serializing writers.

mod fixtures;
mod memory;

use crate::models::{BracketError, SeededBracket, Team, Tournament, TournamentId, User, UserId};

pub use fixtures::{load_fixture_file, load_fixtures, FixtureRow};
pub use memory::InMemoryStore;

pub trait TournamentDirectory {
    fn tournaments(&self) -> Result<Vec<Tournament>, BracketError>;

    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, BracketError>;

    /// Teams registered for the tournament, in registration order.
    fn teams_for(&self, id: TournamentId) -> Result<Vec<Team>, BracketError>;
}

pub trait UserDirectory {
    fn find_user(&self, id: UserId) -> Result<Option<User>, BracketError>;
}

/// Live-bracket persistence.
///
/// Only the stored seeding and results are guarded. Callers resolve the entrant
/// list and check the requested coordinate before taking the lock, so a team
/// registered concurrently may go unnoticed until the next request re-reads it.
pub trait BracketStore {
    /// Run `f` on the tournament's stored live bracket and save whatever it leaves
    /// behind. No other writer touches the same tournament while `f` runs.
    fn update_bracket<T, F>(&self, id: TournamentId, f: F) -> Result<T, BracketError>
    where
        F: FnOnce(&mut Option<SeededBracket>) -> T;

    /// Drop the stored live bracket. Returns whether one existed.
    fn remove_bracket(&self, id: TournamentId) -> Result<bool, BracketError>;
}
