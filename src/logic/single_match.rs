//! Live bracket: simulate one match at a time over a persisted seeding.

use crate::logic::propagation::play_out;
use crate::logic::scoring::{draw_score, RecordedScores};
use crate::logic::seeding::seed_slots;
use crate::models::{match_at, MatchInfo, MatchResult, SeededBracket};
use rand::Rng;

/// Return the stored seeding for these entrants, seeding afresh when there is
/// none or it was made for a different set of teams.
pub fn ensure_seeded<'a, R: Rng + ?Sized>(
    stored: &'a mut Option<SeededBracket>,
    names: &[String],
    rng: &mut R,
) -> &'a mut SeededBracket {
    if let Some(existing) = stored.as_ref() {
        if !existing.seeds_entrants(names) {
            log::info!(
                "Team list changed since seeding ({} recorded results discarded); re-seeding",
                existing.results.len()
            );
            *stored = None;
        }
    }
    stored.get_or_insert_with(|| {
        log::debug!("Seeding live bracket for {} teams", names.len());
        SeededBracket::new(seed_slots(names, rng))
    })
}

/// Rebuild the bracket from the seeding and the results recorded so far.
pub fn replay(seeded: &SeededBracket) -> Vec<Vec<MatchInfo>> {
    play_out(seeded.slots(), &mut RecordedScores::new(seeded))
}

/// Simulate the match at (round, match_num) and record its result.
///
/// Returns None when the coordinate is outside the bracket or the match is not
/// playable yet (a side is a bye or waits on an undecided match). A match that
/// already has a result is left as is.
pub fn simulate_single_match<R: Rng + ?Sized>(
    seeded: &mut SeededBracket,
    round: u32,
    match_num: u32,
    rng: &mut R,
) -> Option<Vec<Vec<MatchInfo>>> {
    let rounds = replay(seeded);
    let target = match_at(&rounds, round, match_num)?;

    if seeded.result_for(round, match_num).is_some() {
        return Some(rounds);
    }
    if !target.is_playable() {
        log::debug!("Match {}/{} is not playable yet", round, match_num);
        return None;
    }

    seeded.record(MatchResult::new(round, match_num, draw_score(rng, round)));
    Some(replay(seeded))
}
