//! BracketService: resolves team names and composes the bracket operations.
//!
//! Randomness is passed in by the caller so tests can use a seeded generator.

use crate::logic::{
    build_bracket, ensure_seeded, has_match, replay, resolve_team_names, simulate_results,
    simulate_single_match,
};
use crate::models::{Bracket, BracketError, MatchInfo, Tournament, TournamentId};
use crate::store::{BracketStore, TournamentDirectory, UserDirectory};
use rand::Rng;

pub struct BracketService<S> {
    store: S,
}

impl<S> BracketService<S>
where
    S: TournamentDirectory + UserDirectory + BracketStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tournaments(&self) -> Result<Vec<Tournament>, BracketError> {
        self.store.tournaments()
    }

    /// Unscored bracket in a fresh seed order. None if the tournament does not exist.
    pub fn get_bracket<R: Rng + ?Sized>(
        &self,
        id: TournamentId,
        rng: &mut R,
    ) -> Result<Option<Bracket>, BracketError> {
        self.with_entrants(id, |names| build_bracket(names, rng))
    }

    /// Fully scored bracket in a fresh seed order. None if the tournament does not exist.
    pub fn get_bracket_with_results<R: Rng + ?Sized>(
        &self,
        id: TournamentId,
        rng: &mut R,
    ) -> Result<Option<Bracket>, BracketError> {
        self.with_entrants(id, |names| simulate_results(names, rng))
    }

    /// Simulate one match of the tournament's live bracket.
    ///
    /// None when the tournament does not exist, has fewer than two teams, or the
    /// (round, match_num) coordinate is not a playable match.
    pub fn simulate_match<R: Rng + ?Sized>(
        &self,
        id: TournamentId,
        round: u32,
        match_num: u32,
        rng: &mut R,
    ) -> Result<Option<Bracket>, BracketError> {
        let Some(tournament) = self.store.find_tournament(id)? else {
            log::debug!("Simulate {}/{}: tournament {} not found", round, match_num, id);
            return Ok(None);
        };
        let names = self.team_names(id)?;
        if names.len() < 2 {
            log::debug!(
                "Simulate {}/{}: tournament {} has {} team(s)",
                round,
                match_num,
                id,
                names.len()
            );
            return Ok(None);
        }
        if !has_match(names.len(), round, match_num) {
            log::debug!(
                "Simulate {}/{}: no such match for {} teams",
                round,
                match_num,
                names.len()
            );
            return Ok(None);
        }

        let rounds = self.store.update_bracket(id, |stored| {
            let seeded = ensure_seeded(stored, &names, &mut *rng);
            simulate_single_match(seeded, round, match_num, &mut *rng)
        })?;
        Ok(rounds.map(|rounds| Bracket::new(tournament, rounds)))
    }

    /// Current state of the live bracket, seeding it if the tournament has none yet.
    pub fn live_bracket<R: Rng + ?Sized>(
        &self,
        id: TournamentId,
        rng: &mut R,
    ) -> Result<Option<Bracket>, BracketError> {
        let Some(tournament) = self.store.find_tournament(id)? else {
            return Ok(None);
        };
        let names = self.team_names(id)?;
        if names.len() < 2 {
            return Ok(Some(Bracket::empty(tournament)));
        }
        let rounds = self
            .store
            .update_bracket(id, |stored| replay(ensure_seeded(stored, &names, rng)))?;
        Ok(Some(Bracket::new(tournament, rounds)))
    }

    /// Discard the live bracket's seeding and results. Returns whether one existed.
    pub fn reset_live_bracket(&self, id: TournamentId) -> Result<bool, BracketError> {
        let removed = self.store.remove_bracket(id)?;
        if removed {
            log::info!("Live bracket of tournament {} reset", id);
        }
        Ok(removed)
    }

    fn team_names(&self, id: TournamentId) -> Result<Vec<String>, BracketError> {
        let teams = self.store.teams_for(id)?;
        resolve_team_names(&teams, &self.store)
    }

    fn with_entrants<F>(&self, id: TournamentId, build: F) -> Result<Option<Bracket>, BracketError>
    where
        F: FnOnce(&[String]) -> Vec<Vec<MatchInfo>>,
    {
        let Some(tournament) = self.store.find_tournament(id)? else {
            log::debug!("Tournament {} not found", id);
            return Ok(None);
        };
        let names = self.team_names(id)?;
        Ok(Some(Bracket::new(tournament, build(&names))))
    }
}
