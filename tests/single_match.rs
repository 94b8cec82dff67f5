//! Integration tests for simulating one match over a persisted seeding.

use esports_bracket_web::logic::{ensure_seeded, replay, seed_slots};
use esports_bracket_web::{simulate_single_match, SeededBracket};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("T{i}")).collect()
}

fn seeded(n: usize, seed: u64) -> (SeededBracket, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let bracket = SeededBracket::new(seed_slots(&names(n), &mut rng));
    (bracket, rng)
}

#[test]
fn replay_without_results_is_an_unscored_bracket() {
    let (bracket, _) = seeded(6, 1);
    let rounds = replay(&bracket);
    assert_eq!(rounds.len(), 3);
    assert!(rounds.iter().flatten().all(|m| m.score().is_none()));
}

#[test]
fn live_replay_holds_a_team_until_its_opponent_is_decided() {
    let (mut bracket, mut rng) = seeded(7, 12);
    let rounds = replay(&bracket);
    assert!(rounds[1][1].team2_name.is_some());
    assert_eq!(rounds[2][0].team2_name, None);
    assert!(simulate_single_match(&mut bracket, 2, 2, &mut rng).is_none());

    simulate_single_match(&mut bracket, 1, 3, &mut rng).unwrap();
    let rounds = simulate_single_match(&mut bracket, 2, 2, &mut rng).expect("both sides known");
    assert_eq!(rounds[2][0].team2_name.as_deref(), rounds[1][1].winner_name());
}

#[test]
fn simulating_a_first_round_match_records_and_propagates_it() {
    let (mut bracket, mut rng) = seeded(4, 2);
    let rounds = simulate_single_match(&mut bracket, 1, 1, &mut rng).expect("playable");

    let played = &rounds[0][0];
    let score = played.score().expect("scored");
    assert_ne!(score.team1, score.team2);
    assert_eq!(bracket.results.len(), 1);
    assert_eq!(rounds[1][0].team1_name.as_deref(), played.winner_name());
    assert_eq!(rounds[1][0].team2_name, None);
    assert!(rounds[0][1].score().is_none());
}

#[test]
fn repeating_a_simulation_keeps_the_first_result() {
    let (mut bracket, mut rng) = seeded(4, 3);
    let first = simulate_single_match(&mut bracket, 1, 2, &mut rng).unwrap();
    let second = simulate_single_match(&mut bracket, 1, 2, &mut rng).unwrap();
    assert_eq!(first, second);
    assert_eq!(bracket.results.len(), 1);
}

#[test]
fn final_waits_for_both_semi_finals() {
    let (mut bracket, mut rng) = seeded(4, 4);
    assert!(simulate_single_match(&mut bracket, 2, 1, &mut rng).is_none());

    simulate_single_match(&mut bracket, 1, 1, &mut rng).unwrap();
    assert!(simulate_single_match(&mut bracket, 2, 1, &mut rng).is_none());

    simulate_single_match(&mut bracket, 1, 2, &mut rng).unwrap();
    let rounds = simulate_single_match(&mut bracket, 2, 1, &mut rng).expect("final playable");
    let champion = rounds[1][0].winner_name().expect("champion");
    assert!(names(4).iter().any(|n| n == champion));
    assert_eq!(bracket.results.len(), 3);
}

#[test]
fn coordinates_outside_the_bracket_are_not_playable() {
    let (mut bracket, mut rng) = seeded(4, 5);
    for (round, match_num) in [(0, 1), (1, 0), (1, 3), (3, 1), (u32::MAX, 1)] {
        assert!(simulate_single_match(&mut bracket, round, match_num, &mut rng).is_none());
    }
    assert!(bracket.results.is_empty());
}

#[test]
fn bye_matches_are_not_playable() {
    // Three teams: the bye is always the last first-round slot.
    let (mut bracket, mut rng) = seeded(3, 6);
    assert!(simulate_single_match(&mut bracket, 1, 2, &mut rng).is_none());
    assert!(bracket.results.is_empty());

    // The bye team already waits in the final.
    let rounds = replay(&bracket);
    assert!(rounds[1][0].team2_name.is_some());
}

#[test]
fn existing_seeding_is_kept_for_the_same_teams() {
    let mut rng = StdRng::seed_from_u64(7);
    let teams = names(5);
    let mut stored = None;
    let first = ensure_seeded(&mut stored, &teams, &mut rng).clone();

    let mut reordered = teams.clone();
    reordered.reverse();
    let second = ensure_seeded(&mut stored, &reordered, &mut rng).clone();
    assert_eq!(first, second);
}

#[test]
fn changed_team_list_reseeds_and_drops_results() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut stored = None;
    {
        let seeded = ensure_seeded(&mut stored, &names(4), &mut rng);
        simulate_single_match(seeded, 1, 1, &mut rng).unwrap();
    }
    assert_eq!(stored.as_ref().unwrap().results.len(), 1);

    let reseeded = ensure_seeded(&mut stored, &names(5), &mut rng);
    assert!(reseeded.results.is_empty());
    assert_eq!(reseeded.slots.len(), 8);
}
