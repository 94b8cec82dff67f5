//! Where match scores come from: nowhere, a random draw, or recorded results.

use crate::models::{Score, SeededBracket};
use rand::Rng;
use std::ops::RangeInclusive;

/// Each side's score is drawn from this closed range.
pub const SCORE_RANGE: RangeInclusive<u32> = 0..=10;

/// Supplies scores for matches between two present teams.
pub trait ScoreSource {
    /// Score for the match at (round, match_num), or None if it is undecided.
    fn score(&mut self, round: u32, match_num: u32) -> Option<Score>;

    /// Whether byes are shown with a 1-0 walkover score.
    fn scores_byes(&self) -> bool {
        false
    }

    /// Whether a team facing an undecided match advances as if it had a bye.
    fn advances_past_pending(&self) -> bool {
        false
    }
}

/// Leaves every match unplayed. A one-sided match is a bye, whatever left the
/// other side empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScores;

impl ScoreSource for NoScores {
    fn score(&mut self, _round: u32, _match_num: u32) -> Option<Score> {
        None
    }

    fn advances_past_pending(&self) -> bool {
        true
    }
}

/// Draws a fresh score for every match.
#[derive(Debug)]
pub struct RandomScores<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomScores<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> ScoreSource for RandomScores<'_, R> {
    fn score(&mut self, round: u32, _match_num: u32) -> Option<Score> {
        Some(draw_score(&mut *self.rng, round))
    }

    fn scores_byes(&self) -> bool {
        true
    }
}

/// Replays the results stored in a seeded bracket.
#[derive(Clone, Copy, Debug)]
pub struct RecordedScores<'a> {
    seeded: &'a SeededBracket,
}

impl<'a> RecordedScores<'a> {
    pub fn new(seeded: &'a SeededBracket) -> Self {
        Self { seeded }
    }
}

impl ScoreSource for RecordedScores<'_> {
    fn score(&mut self, round: u32, match_num: u32) -> Option<Score> {
        self.seeded.result_for(round, match_num).map(|r| r.score)
    }
}

/// Draw both scores independently and break a tie.
pub fn draw_score<R: Rng + ?Sized>(rng: &mut R, round: u32) -> Score {
    let team1 = rng.gen_range(SCORE_RANGE);
    let team2 = rng.gen_range(SCORE_RANGE);
    break_tie(Score::new(team1, team2), round)
}

/// On a tie, round 1 adds a point to the second team and later rounds to the first.
pub fn break_tie(score: Score, round: u32) -> Score {
    if score.team1 != score.team2 {
        return score;
    }
    if round <= 1 {
        Score::new(score.team1, score.team2 + 1)
    } else {
        Score::new(score.team1 + 1, score.team2)
    }
}
