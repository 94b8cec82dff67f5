//! MatchInfo, Side, Score and Slot: the pieces a bracket is made of.

use serde::{Deserialize, Serialize};

/// Which side of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Final score of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

impl Score {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }

    /// 1-0 in favour of the side that got a bye.
    pub fn walkover(present: Side) -> Self {
        match present {
            Side::One => Self::new(1, 0),
            Side::Two => Self::new(0, 1),
        }
    }

    /// Winning side, or None on a tie.
    pub fn winner(&self) -> Option<Side> {
        match self.team1.cmp(&self.team2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// One position in a round before it is paired.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Slot {
    /// A known team.
    Team(String),
    /// Permanently empty: nobody will ever fill it.
    Bye,
    /// Winner of a match that has not been decided yet.
    Pending,
}

impl Slot {
    pub fn name(&self) -> Option<&str> {
        match self {
            Slot::Team(name) => Some(name),
            Slot::Bye | Slot::Pending => None,
        }
    }
}

impl From<Option<String>> for Slot {
    fn from(name: Option<String>) -> Self {
        name.map_or(Slot::Bye, Slot::Team)
    }
}

/// A single pairing in the bracket. Absent names are byes or unresolved slots;
/// absent scores mean the match has not been played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    /// 1-based.
    pub round: u32,
    /// 1-based position within the round.
    pub match_num: u32,
}

impl MatchInfo {
    pub fn score(&self) -> Option<Score> {
        Some(Score::new(self.team1_score?, self.team2_score?))
    }

    /// Both teams are known, so the match can be played.
    pub fn is_playable(&self) -> bool {
        self.team1_name.is_some() && self.team2_name.is_some()
    }

    /// Name of the side that won, if the match carries a decisive score.
    pub fn winner_name(&self) -> Option<&str> {
        match self.score()?.winner()? {
            Side::One => self.team1_name.as_deref(),
            Side::Two => self.team2_name.as_deref(),
        }
    }
}
