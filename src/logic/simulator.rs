//! Fully scored bracket in one pass.

use crate::logic::propagation::play_out;
use crate::logic::scoring::RandomScores;
use crate::logic::seeding::seed_slots;
use crate::models::MatchInfo;
use rand::Rng;

/// Seed the names afresh and play every match with random scores.
///
/// Byes show as 1-0 for the present team, ties are always broken, and winners
/// carry forward until the final has a champion.
pub fn simulate_results<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Vec<Vec<MatchInfo>> {
    let slots = seed_slots(names, rng);
    play_out(slots, &mut RandomScores::new(rng))
}
