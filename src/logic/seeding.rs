//! Bracket shape and seed order.

use crate::models::Slot;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of rounds for `entrants` teams: `ceil(log2(n))`, or 0 below two teams.
pub fn round_count(entrants: usize) -> u32 {
    if entrants < 2 {
        return 0;
    }
    entrants.next_power_of_two().trailing_zeros()
}

/// Number of first-round slots (`2^rounds`), or 0 below two teams.
pub fn bracket_size(entrants: usize) -> usize {
    if entrants < 2 {
        return 0;
    }
    entrants.next_power_of_two()
}

/// Matches in a 1-based round of a bracket for `entrants` teams (0 outside the bracket).
pub fn matches_in_round(entrants: usize, round: u32) -> usize {
    if round == 0 || round > round_count(entrants) {
        return 0;
    }
    bracket_size(entrants) >> round
}

/// Whether (round, match_num) exists in the bracket shape for `entrants` teams.
pub fn has_match(entrants: usize, round: u32, match_num: u32) -> bool {
    match_num >= 1 && (match_num as usize) <= matches_in_round(entrants, round)
}

/// Shuffle the names into a random seed order and pad with byes up to the bracket size.
///
/// Returns no slots below two teams.
pub fn seed_slots<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Vec<Slot> {
    let size = bracket_size(names.len());
    if size == 0 {
        return Vec::new();
    }
    let mut order = names.to_vec();
    order.shuffle(rng);

    let mut slots: Vec<Slot> = order.into_iter().map(Slot::Team).collect();
    slots.resize(size, Slot::Bye);
    slots
}
