//! Seeded random matches checked against the engine's invariants.

use dartrs::snapshot;
use dartrs::{
    BULL, GameMode, Hit, MISS, Match, MatchOptions, MatchPhase, ResolveError, Turn, TurnOutcome,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const MAX_TURNS: usize = 400;

fn random_hit(rng: &mut ChaCha8Rng) -> Hit {
    let value = match rng.random_range(0..=21) {
        21 => BULL,
        value => value,
    };
    Hit::new(value, rng.random_range(1..=3)).unwrap_or(MISS)
}

fn random_turn(rng: &mut ChaCha8Rng) -> Turn {
    let mut turn = Turn::new();
    while turn.register_hit(random_hit(rng)) {}
    turn
}

fn check_invariants(game: &Match) {
    assert!(game.current_player_index() < game.players().len());
    assert!(game.legs_to_win() <= game.total_legs());

    for player in game.players() {
        match game.mode().starting_score() {
            Some(start) => {
                assert!(player.score() <= start);
                assert_ne!(player.score(), 1);
                assert!(player.marks().is_none());
                assert!(player.legs() <= game.legs_to_win());
            }
            None => {
                let marks = player.marks().unwrap();
                assert!(marks.iter().all(|(_, count)| count <= 3));
            }
        }
        assert!(player.history().iter().all(Turn::is_full));
    }

    assert_eq!(snapshot::validate(&snapshot::encode(game)).unwrap(), *game);
}

fn simulate(mode: GameMode, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let player_count = rng.random_range(2..=4);
    let names: Vec<String> = (0..player_count).map(|i| format!("P{i}")).collect();
    let options = MatchOptions::default()
        .with_mode(mode)
        .with_total_legs(rng.random_range(1..=7));
    let mut game = Match::new(&options, names.as_slice()).unwrap();

    for resolved in 0..MAX_TURNS {
        let thrower = game.current_player_index();
        let result = game.resolve_turn(&mut random_turn(&mut rng)).unwrap();
        assert_eq!(result.player, thrower);
        check_invariants(&game);

        let history: usize = game.players().iter().map(|p| p.history().len()).sum();
        assert_eq!(history, resolved + 1);

        if let TurnOutcome::MatchWon { player } = result.outcome {
            assert_eq!(game.phase(), MatchPhase::Won { player });
            assert_eq!(
                game.resolve_turn(&mut random_turn(&mut rng)),
                Err(ResolveError::MatchOver)
            );
            return;
        }
        assert_eq!(game.phase(), MatchPhase::InProgress);
    }
}

#[test]
fn random_countdown_matches_hold_invariants() {
    for seed in 0..50 {
        simulate(GameMode::Countdown301, seed);
        simulate(GameMode::Countdown501, seed);
    }
}

#[test]
fn random_cricket_matches_hold_invariants() {
    for seed in 0..50 {
        simulate(GameMode::Cricket, seed);
    }
}
