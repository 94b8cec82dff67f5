//! Bracket: the view aggregate handed to the rendering layer.

use crate::models::entities::Tournament;
use crate::models::error::BracketError;
use crate::models::match_info::MatchInfo;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column order of [`Bracket::write_csv`], matching the `MatchInfo` fields.
pub const CSV_HEADER: [&str; 6] = [
    "team1_name",
    "team2_name",
    "team1_score",
    "team2_score",
    "round",
    "match_num",
];

/// Look up a match by 1-based round and match number in a list of rounds.
pub fn match_at(rounds: &[Vec<MatchInfo>], round: u32, match_num: u32) -> Option<&MatchInfo> {
    let round = usize::try_from(round.checked_sub(1)?).ok()?;
    let match_num = usize::try_from(match_num.checked_sub(1)?).ok()?;
    rounds.get(round)?.get(match_num)
}

/// A tournament and its rounds, first round first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub tournament: Tournament,
    pub rounds: Vec<Vec<MatchInfo>>,
}

impl Bracket {
    pub fn new(tournament: Tournament, rounds: Vec<Vec<MatchInfo>>) -> Self {
        Self { tournament, rounds }
    }

    /// Bracket with no matches (fewer than two teams registered).
    pub fn empty(tournament: Tournament) -> Self {
        Self::new(tournament, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Look up a match by 1-based round and match number.
    pub fn match_at(&self, round: u32, match_num: u32) -> Option<&MatchInfo> {
        match_at(&self.rounds, round, match_num)
    }

    pub fn final_match(&self) -> Option<&MatchInfo> {
        self.rounds.last()?.first()
    }

    /// Winner of the final, once it has been played.
    pub fn champion(&self) -> Option<&str> {
        self.final_match()?.winner_name()
    }

    /// Write every match as one CSV row, round by round. The header is written
    /// even when the bracket has no matches.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BracketError> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(CSV_HEADER)?;
        for m in self.rounds.iter().flatten() {
            wtr.serialize(m)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
