//! Winner resolution and round-over-round propagation, shared by every bracket operation.

use crate::logic::scoring::ScoreSource;
use crate::models::{MatchInfo, Score, Side, Slot};

/// Resolve one match from its two slots.
///
/// Returns the annotated match and the slot that advances to the next round:
/// - two teams: scored by `scores`; undecided matches advance `Pending`
/// - team vs bye: the team advances (with a walkover score if the source shows byes)
/// - bye vs bye: a bye advances
/// - team vs `Pending`: the team advances only if the source treats that as a bye
/// - otherwise anything against `Pending`: `Pending` advances
pub fn resolve_match<S: ScoreSource + ?Sized>(
    team1: Slot,
    team2: Slot,
    round: u32,
    match_num: u32,
    scores: &mut S,
) -> (MatchInfo, Slot) {
    let mut info = MatchInfo {
        team1_name: team1.name().map(str::to_owned),
        team2_name: team2.name().map(str::to_owned),
        round,
        match_num,
        ..MatchInfo::default()
    };

    let winner = match (team1, team2) {
        (Slot::Team(name1), Slot::Team(name2)) => match scores.score(round, match_num) {
            Some(score) => {
                set_score(&mut info, score);
                match score.winner() {
                    Some(Side::One) => Slot::Team(name1),
                    Some(Side::Two) => Slot::Team(name2),
                    None => Slot::Pending,
                }
            }
            None => Slot::Pending,
        },
        (Slot::Team(name), Slot::Bye) => {
            if scores.scores_byes() {
                set_score(&mut info, Score::walkover(Side::One));
            }
            Slot::Team(name)
        }
        (Slot::Bye, Slot::Team(name)) => {
            if scores.scores_byes() {
                set_score(&mut info, Score::walkover(Side::Two));
            }
            Slot::Team(name)
        }
        (Slot::Bye, Slot::Bye) => Slot::Bye,
        (Slot::Team(name), Slot::Pending) | (Slot::Pending, Slot::Team(name))
            if scores.advances_past_pending() =>
        {
            Slot::Team(name)
        }
        (Slot::Pending, _) | (_, Slot::Pending) => Slot::Pending,
    };

    (info, winner)
}

fn set_score(info: &mut MatchInfo, score: Score) {
    info.team1_score = Some(score.team1);
    info.team2_score = Some(score.team2);
}

/// Pair consecutive slots round after round until the final is built.
///
/// `slots` must be a bracket-sized (power of two) array; fewer than two slots
/// produce no rounds.
pub fn play_out<S: ScoreSource + ?Sized>(slots: Vec<Slot>, scores: &mut S) -> Vec<Vec<MatchInfo>> {
    let mut rounds = Vec::new();
    if slots.len() < 2 {
        return rounds;
    }

    let mut current = slots;
    let mut round = 1;
    loop {
        let mut matches = Vec::with_capacity(current.len() / 2);
        let mut winners = Vec::with_capacity(current.len() / 2);
        let mut pairs = current.into_iter();
        let mut match_num = 1;
        while let Some(team1) = pairs.next() {
            // An odd tail only comes from a malformed slot array; treat the gap as a bye.
            let team2 = pairs.next().unwrap_or(Slot::Bye);
            let (info, winner) = resolve_match(team1, team2, round, match_num, scores);
            matches.push(info);
            winners.push(winner);
            match_num += 1;
        }
        rounds.push(matches);

        if winners.len() <= 1 {
            return rounds;
        }
        current = winners;
        round += 1;
    }
}
