//! Gumshoe -- a Hobby Detectives console game.
//!
//! This binary wires stdin/stdout to the engine's collaborator traits and
//! runs one game to completion. Flags: `--players N`, `--seed S`, and
//! `--config FILE` (JSON, see `GameConfig`); flags override the file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use gumshoe::config::GameConfig;
use gumshoe::console::{ConsoleInput, ConsoleRenderer};
use gumshoe::game::Game;
use gumshoe::turn::PairOfDice;

fn die(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(2);
}

/// Asks for the player count until a valid answer comes in, like the
/// original startup prompt.
fn prompt_players(input: &mut impl BufRead) -> usize {
    let mut out = io::stdout();
    loop {
        writeln!(out, "Enter the number of players (3 to 4):").unwrap();
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => die("input closed before the game started"),
            Ok(_) => {}
        }
        match line.trim().parse::<usize>() {
            Ok(n @ 3..=4) => return n,
            _ => {
                writeln!(out, "Invalid number of players. It must be 3 or 4.").unwrap();
            }
        }
    }
}

fn main() {
    let mut config_path: Option<PathBuf> = None;
    let mut players: Option<usize> = None;
    let mut seed: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => die("--config needs a file path"),
            },
            "--players" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => players = Some(n),
                None => die("--players needs a number"),
            },
            "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                Some(s) => seed = Some(s),
                None => die("--seed needs a number"),
            },
            other => die(&format!(
                "unknown argument: {} (expected --players, --seed, or --config)",
                other
            )),
        }
    }

    let mut config = match &config_path {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => die(&e.to_string()),
        },
        None => GameConfig::default(),
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    if let Some(n) = players {
        config.players = n;
    } else if config_path.is_none() {
        config.players = prompt_players(&mut reader);
    }
    if let Some(s) = seed {
        config.seed = Some(s);
    }
    if let Err(e) = config.validate() {
        die(&e.to_string());
    }

    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(e) => die(&e.to_string()),
    };
    let mut dice = match config.seed {
        Some(s) => PairOfDice::seeded(s),
        None => PairOfDice::from_entropy(),
    };
    let mut input = ConsoleInput::new(reader, io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout());

    match game.play(&mut input, &mut dice, &mut renderer) {
        // The renderer has already announced the winner.
        Ok(_winner) => {}
        Err(_) => println!("Game abandoned: input ended."),
    }
}
