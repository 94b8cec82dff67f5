//! In-memory store backing all three collaborator traits.

use crate::models::{BracketError, SeededBracket, Team, Tournament, TournamentId, User, UserId};
use crate::store::{BracketStore, TournamentDirectory, UserDirectory};
use std::collections::HashMap;
use std::sync::RwLock;

/// Per-tournament entry: the tournament plus its registered teams.
#[derive(Clone, Debug)]
struct TournamentEntry {
    tournament: Tournament,
    teams: Vec<Team>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: RwLock<HashMap<TournamentId, TournamentEntry>>,
    users: RwLock<HashMap<UserId, User>>,
    brackets: RwLock<HashMap<TournamentId, SeededBracket>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tournament, keeping any teams already registered.
    pub fn insert_tournament(&self, tournament: Tournament) -> Result<(), BracketError> {
        let mut g = self.tournaments.write().map_err(|_| BracketError::LockPoisoned)?;
        match g.get_mut(&tournament.id) {
            Some(entry) => entry.tournament = tournament,
            None => {
                g.insert(
                    tournament.id,
                    TournamentEntry {
                        tournament,
                        teams: Vec::new(),
                    },
                );
            }
        }
        Ok(())
    }

    /// Register a team. Returns false if the tournament does not exist.
    pub fn add_team(&self, tournament_id: TournamentId, team: Team) -> Result<bool, BracketError> {
        let mut g = self.tournaments.write().map_err(|_| BracketError::LockPoisoned)?;
        match g.get_mut(&tournament_id) {
            Some(entry) => {
                entry.teams.retain(|t| t.id != team.id);
                entry.teams.push(team);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn insert_user(&self, user: User) -> Result<(), BracketError> {
        let mut g = self.users.write().map_err(|_| BracketError::LockPoisoned)?;
        g.insert(user.id, user);
        Ok(())
    }

    /// Stored live bracket, if any (read-only snapshot).
    pub fn seeded_bracket(&self, id: TournamentId) -> Result<Option<SeededBracket>, BracketError> {
        let g = self.brackets.read().map_err(|_| BracketError::LockPoisoned)?;
        Ok(g.get(&id).cloned())
    }
}

impl TournamentDirectory for InMemoryStore {
    fn tournaments(&self) -> Result<Vec<Tournament>, BracketError> {
        let g = self.tournaments.read().map_err(|_| BracketError::LockPoisoned)?;
        let mut list: Vec<Tournament> = g.values().map(|e| e.tournament.clone()).collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(list)
    }

    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, BracketError> {
        let g = self.tournaments.read().map_err(|_| BracketError::LockPoisoned)?;
        Ok(g.get(&id).map(|e| e.tournament.clone()))
    }

    fn teams_for(&self, id: TournamentId) -> Result<Vec<Team>, BracketError> {
        let g = self.tournaments.read().map_err(|_| BracketError::LockPoisoned)?;
        Ok(g.get(&id).map(|e| e.teams.clone()).unwrap_or_default())
    }
}

impl UserDirectory for InMemoryStore {
    fn find_user(&self, id: UserId) -> Result<Option<User>, BracketError> {
        let g = self.users.read().map_err(|_| BracketError::LockPoisoned)?;
        Ok(g.get(&id).cloned())
    }
}

impl BracketStore for InMemoryStore {
    fn update_bracket<T, F>(&self, id: TournamentId, f: F) -> Result<T, BracketError>
    where
        F: FnOnce(&mut Option<SeededBracket>) -> T,
    {
        let mut g = self.brackets.write().map_err(|_| BracketError::LockPoisoned)?;
        let mut stored = g.remove(&id);
        let out = f(&mut stored);
        if let Some(seeded) = stored {
            g.insert(id, seeded);
        }
        Ok(out)
    }

    fn remove_bracket(&self, id: TournamentId) -> Result<bool, BracketError> {
        let mut g = self.brackets.write().map_err(|_| BracketError::LockPoisoned)?;
        Ok(g.remove(&id).is_some())
    }
}
