//! Cricket integration tests.

use dartrs::snapshot::{self, RawHit, RawMode, RawPlayer, Snapshot};
use dartrs::{
    CRICKET_NUMBERS, GameMode, Hit, MISS, Match, MatchOptions, ResolveError, Turn, TurnOutcome,
};

fn hit(value: u8, multiplier: u8) -> Hit {
    Hit::new(value, multiplier).unwrap()
}

fn turn(hits: &[Hit]) -> Turn {
    Turn::from_hits(hits).unwrap()
}

/// A player with the given score and marks; unlisted numbers are open.
///
/// History is padded with missed turns so the score is reachable.
fn player(score: i64, marks: &[(u8, i64)]) -> RawPlayer {
    let marks = CRICKET_NUMBERS
        .iter()
        .map(|&n| {
            let count = marks.iter().find(|&&(m, _)| m == n).map_or(0, |&(_, c)| c);
            (n.to_string(), count)
        })
        .collect();
    let miss = RawHit {
        value: 0,
        multiplier: 1,
    };
    let turns = usize::try_from((score + 179) / 180).unwrap();
    RawPlayer {
        name: String::from("P"),
        score,
        legs: 0,
        hits: vec![vec![miss; 3]; turns],
        marks: Some(marks),
    }
}

fn all_closed_except(number: u8, marks_on_it: i64) -> Vec<(u8, i64)> {
    CRICKET_NUMBERS
        .iter()
        .map(|&n| (n, if n == number { marks_on_it } else { 3 }))
        .collect()
}

/// A Cricket match with player 0 to throw.
fn cricket(players: Vec<RawPlayer>) -> Match {
    let mut players = players;
    for (index, player) in players.iter_mut().enumerate() {
        player.name = format!("P{index}");
    }
    let raw = Snapshot {
        players,
        current_player_index: 0,
        hits: Vec::new(),
        starting_score: RawMode::Label("Cricket".to_string()),
        legs_to_win: 1,
        total_legs: 1,
        winner: None,
    };
    snapshot::validate(&raw).unwrap()
}

#[test]
fn new_cricket_match_starts_open() {
    let options = MatchOptions::default().with_mode(GameMode::Cricket);
    let game = Match::new(&options, &["Anna", "Ben"]).unwrap();

    for p in game.players() {
        assert_eq!(p.score(), 0);
        let marks = p.marks().unwrap();
        assert!(marks.iter().all(|(_, count)| count == 0));
    }
    assert_eq!(game.remaining_preview(&Turn::new()), None);
}

#[test]
fn marks_accumulate_and_cap() {
    let mut game = cricket(vec![player(0, &[]), player(0, &[])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(20, 1), hit(19, 2), hit(25, 2)]))
        .unwrap();
    assert_eq!(result.points, 0);
    assert_eq!(result.outcome, TurnOutcome::Continue);

    let marks = game.players()[0].marks().unwrap();
    assert_eq!(marks.get(20), 1);
    assert_eq!(marks.get(19), 2);
    assert_eq!(marks.get(25), 2);
    assert_eq!(marks.get(15), 0);
}

#[test]
fn closed_number_scores_while_opponent_open() {
    let mut game = cricket(vec![player(0, &[(20, 3)]), player(0, &[(20, 1)])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(20, 1), MISS, MISS]))
        .unwrap();

    assert_eq!(result.points, 20);
    assert_eq!(game.players()[0].score(), 20);
    assert_eq!(game.players()[0].marks().unwrap().get(20), 3);
}

#[test]
fn overflow_in_one_turn_scores_the_excess() {
    let mut game = cricket(vec![player(0, &[]), player(0, &[])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(20, 3), hit(20, 3), hit(20, 1)]))
        .unwrap();

    assert_eq!(result.points, 80);
    assert_eq!(game.players()[0].marks().unwrap().get(20), 3);
}

#[test]
fn number_closed_by_everyone_is_dead() {
    let mut game = cricket(vec![player(0, &[(20, 3)]), player(0, &[(20, 3)])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(20, 3), hit(20, 3), hit(20, 3)]))
        .unwrap();

    assert_eq!(result.points, 0);
    assert_eq!(game.players()[0].score(), 0);
}

#[test]
fn extra_marks_wasted_when_opponents_already_closed() {
    let mut game = cricket(vec![player(0, &[(19, 1)]), player(0, &[(19, 3)])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(19, 3), MISS, MISS]))
        .unwrap();

    assert_eq!(result.points, 0);
    assert_eq!(game.players()[0].marks().unwrap().get(19), 3);
}

#[test]
fn any_open_opponent_keeps_number_live() {
    let mut game = cricket(vec![
        player(0, &[(18, 3)]),
        player(0, &[(18, 3)]),
        player(0, &[(18, 2)]),
    ]);
    assert!(!game.closed_by_opponents(0, 18));
    assert!(game.closed_by_opponents(2, 18));

    let result = game
        .resolve_turn(&mut turn(&[hit(18, 2), MISS, MISS]))
        .unwrap();
    assert_eq!(result.points, 36);
}

#[test]
fn non_cricket_numbers_do_nothing() {
    let mut game = cricket(vec![player(0, &[]), player(0, &[])]);

    let result = game
        .resolve_turn(&mut turn(&[hit(14, 3), hit(1, 1), hit(5, 2)]))
        .unwrap();

    assert_eq!(result.points, 0);
    let marks = game.players()[0].marks().unwrap();
    assert!(marks.iter().all(|(_, count)| count == 0));
    assert_eq!(game.players()[0].history().len(), 1);
}

#[test]
fn closing_everything_as_sole_leader_wins() {
    let mut game = cricket(vec![
        player(10, &all_closed_except(25, 2)),
        player(0, &[]),
    ]);

    let result = game
        .resolve_turn(&mut turn(&[hit(25, 1), MISS, MISS]))
        .unwrap();

    assert_eq!(result.outcome, TurnOutcome::MatchWon { player: 0 });
    assert_eq!(game.winner(), Some(0));

    let mut darts = turn(&[MISS, MISS, MISS]);
    assert_eq!(game.resolve_turn(&mut darts), Err(ResolveError::MatchOver));
}

#[test]
fn closing_everything_on_a_tie_continues() {
    let mut game = cricket(vec![
        player(20, &all_closed_except(25, 2)),
        player(20, &[]),
    ]);

    let result = game
        .resolve_turn(&mut turn(&[hit(25, 1), MISS, MISS]))
        .unwrap();

    assert_eq!(result.outcome, TurnOutcome::Continue);
    assert_eq!(game.winner(), None);
    assert!(game.players()[0].marks().unwrap().all_closed());
}

#[test]
fn closed_board_behind_on_points_catches_up() {
    let mut game = cricket(vec![
        player(0, &all_closed_except(25, 3)),
        player(40, &[(20, 1)]),
    ]);

    // Behind on points: closing nothing new, scoring 40 only ties.
    let first = game
        .resolve_turn(&mut turn(&[hit(20, 2), MISS, MISS]))
        .unwrap();
    assert_eq!(first.points, 40);
    assert_eq!(first.outcome, TurnOutcome::Continue);

    game.resolve_turn(&mut turn(&[MISS, MISS, MISS])).unwrap();

    let second = game
        .resolve_turn(&mut turn(&[hit(20, 1), MISS, MISS]))
        .unwrap();
    assert_eq!(second.outcome, TurnOutcome::MatchWon { player: 0 });
    assert_eq!(game.players()[0].score(), 60);
}
