//! Populate an [`InMemoryStore`] from a CSV export of tournaments, teams and captains.
//!
//! One row per team:
//!
//! ```text
//! tournament_id,tournament_name,team_id,captain_id,captain_name,team_name
//! 6f1c...,Spring Cup,1,9a2e...,zed,Night Owls
//! 6f1c...,Spring Cup,2,b7d0...,,
//! ```
//!
//! An empty `captain_name` means the captain has no user record; an empty
//! `team_name` means the team was created without a name.

use crate::models::{BracketError, Team, TeamId, Tournament, TournamentId, User, UserId};
use crate::store::{InMemoryStore, TournamentDirectory};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct FixtureRow {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub team_id: TeamId,
    pub captain_id: UserId,
    #[serde(default)]
    pub captain_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
}

pub fn load_fixture_file(path: impl AsRef<Path>) -> Result<InMemoryStore, BracketError> {
    let file = File::open(path)?;
    load_fixtures(file)
}

pub fn load_fixtures<R: Read>(reader: R) -> Result<InMemoryStore, BracketError> {
    let store = InMemoryStore::new();
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    for (idx, row) in rdr.deserialize().enumerate() {
        let row: FixtureRow = row?;
        // Line 1 is the header.
        let line = idx as u64 + 2;
        let tournament_name = row.tournament_name.trim();
        if tournament_name.is_empty() {
            return Err(BracketError::InvalidFixture {
                line,
                reason: "empty tournament name".to_string(),
            });
        }

        if store.find_tournament(row.tournament_id)?.is_none() {
            store.insert_tournament(Tournament::with_id(row.tournament_id, tournament_name))?;
        }
        if let Some(captain_name) = row.captain_name.filter(|n| !n.is_empty()) {
            store.insert_user(User {
                id: row.captain_id,
                user_name: captain_name,
            })?;
        }
        store.add_team(
            row.tournament_id,
            Team {
                id: row.team_id,
                captain_id: row.captain_id,
                name: row.team_name.filter(|n| !n.is_empty()),
            },
        )?;
    }

    Ok(store)
}
