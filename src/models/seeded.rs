//! SeededBracket: the persisted slot assignment and per-match results of a
//! tournament's live bracket.

use crate::models::match_info::{Score, Slot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded result for one (round, match) coordinate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub round: u32,
    pub match_num: u32,
    pub score: Score,
    pub played_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn new(round: u32, match_num: u32, score: Score) -> Self {
        Self {
            round,
            match_num,
            score,
            played_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeededBracket {
    /// Bracket-sized slot array; `None` is a bye.
    pub slots: Vec<Option<String>>,
    pub results: Vec<MatchResult>,
    pub seeded_at: DateTime<Utc>,
}

impl SeededBracket {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| slot.name().map(str::to_owned))
                .collect(),
            results: Vec::new(),
            seeded_at: Utc::now(),
        }
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.slots.iter().cloned().map(Slot::from).collect()
    }

    pub fn result_for(&self, round: u32, match_num: u32) -> Option<&MatchResult> {
        self.results
            .iter()
            .find(|r| r.round == round && r.match_num == match_num)
    }

    /// Store a result, replacing any earlier one for the same match.
    pub fn record(&mut self, result: MatchResult) {
        self.results
            .retain(|r| !(r.round == result.round && r.match_num == result.match_num));
        self.results.push(result);
    }

    /// True when the seeding was made for exactly these entrants, in any order.
    pub fn seeds_entrants(&self, names: &[String]) -> bool {
        let mut seeded: Vec<&str> = self.slots.iter().flatten().map(String::as_str).collect();
        let mut current: Vec<&str> = names.iter().map(String::as_str).collect();
        seeded.sort_unstable();
        current.sort_unstable();
        seeded == current
    }
}
