//! CLI darts scorekeeper example.
//!
//! Pass a path to resume a match saved with `save <path>`.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use dartrs::snapshot;
use dartrs::{GameMode, Hit, HitError, Match, MatchOptions, Turn, TurnOutcome};

fn main() {
    println!("Darts scorekeeper (type 'help' for commands, 'q' to quit)");

    let resumed = std::env::args()
        .nth(1)
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|json| snapshot::restore(&json));

    let (mut game, mut turn) = match resumed {
        Some(session) => {
            println!("Resumed saved match.");
            session
        }
        None => match setup() {
            Some(game) => (game, Turn::new()),
            None => return,
        },
    };

    loop {
        print_board(&game, &turn);

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => break,
            "help" | "?" => print_help(),
            "r" | "reset" => turn.reset(),
            "ok" | "" if turn.is_full() => match game.resolve_turn(&mut turn) {
                Ok(result) => {
                    let name = game.players()[result.player].name().to_string();
                    if result.bust {
                        println!("{name}: bust!");
                    }
                    match result.outcome {
                        TurnOutcome::Continue => {}
                        TurnOutcome::LegWon { .. } => println!("{name} wins the leg!"),
                        TurnOutcome::MatchWon { .. } => {
                            println!("{name} wins the match!");
                            break;
                        }
                    }
                }
                Err(err) => println!("Cannot confirm: {err}"),
            },
            "ok" | "" => println!("Throw three darts first (use 'm' for a miss)."),
            command if command.starts_with("save ") => {
                let path = command.trim_start_matches("save ").trim();
                match snapshot::encode_session(&game, &turn).to_json() {
                    Ok(json) => match std::fs::write(path, json) {
                        Ok(()) => println!("Saved to {path}."),
                        Err(err) => println!("Save error: {err}"),
                    },
                    Err(err) => println!("Save error: {err}"),
                }
            }
            dart => match parse_dart(dart) {
                Ok(hit) => {
                    if !turn.register_hit(hit) {
                        println!("Three darts already thrown. Type 'ok' or 'r'.");
                    }
                }
                Err(err) => println!("Not a dart ({err}). Type 'help' for notation."),
            },
        }
    }
}

fn setup() -> Option<Match> {
    let mode = loop {
        match prompt_line("Game mode (301, 501, cricket): ").as_str() {
            "301" => break GameMode::Countdown301,
            "501" | "" => break GameMode::Countdown501,
            "cricket" | "c" => break GameMode::Cricket,
            "q" | "quit" => return None,
            _ => println!("Please choose 301, 501 or cricket."),
        }
    };

    let total_legs = if mode.is_countdown() {
        prompt_u32("Legs (1-7): ")?
    } else {
        1
    };

    loop {
        let names = prompt_line("Player names, comma separated (2-4): ");
        if names == "q" {
            return None;
        }
        let names: Vec<&str> = names.split(',').collect();
        let options = MatchOptions::default()
            .with_mode(mode)
            .with_total_legs(total_legs);
        match Match::new(&options, names.as_slice()) {
            Ok(game) => return Some(game),
            Err(err) => println!("Setup error: {err}"),
        }
    }
}

/// Parses `t20`, `d16`, `s5` or `5`, `bull`, `dbull`/`d25`, and `m`.
fn parse_dart(input: &str) -> Result<Hit, HitError> {
    match input {
        "m" | "miss" | "0" => return Ok(dartrs::MISS),
        "bull" | "sb" => return Hit::single(dartrs::BULL),
        "dbull" | "db" => return Hit::double(dartrs::BULL),
        _ => {}
    }

    let (multiplier, number) = match input.split_at_checked(1) {
        Some(("t", rest)) => (3, rest),
        Some(("d", rest)) => (2, rest),
        Some(("s", rest)) => (1, rest),
        _ => (1, input),
    };
    let value = number.parse::<u8>().map_err(|_| HitError::InvalidValue)?;
    Hit::new(value, multiplier)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u32(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_help() {
    println!("Darts:    t20 d16 s5 5 bull dbull m");
    println!("Commands: ok (confirm turn), r (reset turn), save <path>, q");
}

fn print_board(game: &Match, turn: &Turn) {
    println!();
    match game.mode().starting_score() {
        Some(start) => println!(
            "{start} - leg {}/{} (first to {})",
            game.current_leg(),
            game.total_legs(),
            game.legs_to_win()
        ),
        None => println!("Cricket"),
    }

    for (index, player) in game.players().iter().enumerate() {
        let marker = if index == game.current_player_index() {
            colorize(">", "33")
        } else {
            " ".to_string()
        };
        let detail = match player.marks() {
            Some(marks) => marks
                .iter()
                .map(|(number, count)| format!("{}:{}", label(number), format_marks(count)))
                .collect::<Vec<_>>()
                .join(" "),
            None => format!("{} legs", player.legs()),
        };
        println!("{marker} {:<10} {:>4}  {detail}", player.name(), player.score());
    }

    let darts = if turn.is_empty() {
        "None".to_string()
    } else {
        turn.hits()
            .iter()
            .map(format_hit)
            .collect::<Vec<_>>()
            .join(", ")
    };
    match game.remaining_preview(turn) {
        Some(remaining) => println!("This turn: {darts} (leaves {remaining})"),
        None => println!("This turn: {darts}"),
    }
}

fn label(number: u8) -> String {
    if number == dartrs::BULL {
        "B".to_string()
    } else {
        number.to_string()
    }
}

fn format_marks(count: u8) -> String {
    match count {
        0 => "-".to_string(),
        1 => "/".to_string(),
        2 => "X".to_string(),
        _ => colorize("O", "32"),
    }
}

fn format_hit(hit: &Hit) -> String {
    if hit.is_miss() {
        return "Miss".to_string();
    }
    let prefix = match hit.multiplier() {
        3 => "T",
        2 => "D",
        _ => "S",
    };
    format!("{prefix}{}", label(hit.value()))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
