//! Unscored single-elimination bracket skeleton.

use crate::logic::propagation::play_out;
use crate::logic::scoring::NoScores;
use crate::logic::seeding::seed_slots;
use crate::models::MatchInfo;
use rand::Rng;

/// Build an unscored bracket from team names in a fresh random seed order.
///
/// 1. Fewer than two names: no rounds.
/// 2. Shuffle, pad with byes up to `2^ceil(log2(n))` slots.
/// 3. Pair consecutive slots; a team facing a bye advances without a score.
/// 4. Repeat on the winners until the final. Real matches are unplayed, so
///    later rounds hold unknown teams except where byes carried someone through.
pub fn build_bracket<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Vec<Vec<MatchInfo>> {
    play_out(seed_slots(names, rng), &mut NoScores)
}
