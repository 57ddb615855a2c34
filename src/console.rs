//! Console front end.
//!
//! A text renderer for the board and game events, and an input provider
//! that reads player decisions from a buffered reader with validation and
//! re-prompting. Both are generic over their sinks so tests can drive
//! them with in-memory buffers.

use std::io::{BufRead, Write};

use crate::board::estate::{Estate, Footprint, ALL_ESTATES};
use crate::board::state::{GameState, PlayerId};
use crate::board::tile::{Coord, Direction, Tile, BOARD_COLS, BOARD_ROWS};
use crate::cards::{Card, CardKind};
use crate::movement::MoveOutcome;
use crate::turn::{EstateAction, GameEvent, InputClosed, InputProvider, Renderer};

/// Reads player decisions from a line-oriented input stream.
pub struct ConsoleInput<In, Out> {
    input: In,
    out: Out,
}

impl<In: BufRead, Out: Write> ConsoleInput<In, Out> {
    pub fn new(input: In, out: Out) -> ConsoleInput<In, Out> {
        ConsoleInput { input, out }
    }

    /// Reads one trimmed line; a closed stream ends the game.
    fn read_line(&mut self) -> Result<String, InputClosed> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => Err(InputClosed),
            Ok(_) => Ok(buf.trim().to_string()),
        }
    }

    /// Prompts for a card of the given kind until a valid name comes in.
    /// Never substitutes a default for an invalid name.
    fn read_card(&mut self, kind: CardKind, options: &[Card]) -> Result<Card, InputClosed> {
        loop {
            writeln!(self.out, "Enter a {}:", kind).unwrap();
            for card in options {
                writeln!(self.out, "  {}", card).unwrap();
            }
            let line = self.read_line()?;
            match Card::from_name(&line) {
                Some(card) if card.kind() == kind => return Ok(card),
                _ => {
                    writeln!(self.out, "{} isn't a valid {} card name", line, kind).unwrap();
                }
            }
        }
    }
}

impl<In: BufRead, Out: Write> InputProvider for ConsoleInput<In, Out> {
    fn direction(
        &mut self,
        state: &GameState,
        player: PlayerId,
    ) -> Result<Direction, InputClosed> {
        loop {
            writeln!(
                self.out,
                "{}: enter a command (w, a, s, d) to move:",
                state.player(player).name()
            )
            .unwrap();
            let line = self.read_line()?;
            match line.chars().next().map(|c| c.to_ascii_lowercase()).and_then(Direction::from_key)
            {
                Some(dir) => return Ok(dir),
                None => {
                    writeln!(self.out, "Invalid direction. Try again.").unwrap();
                }
            }
        }
    }

    fn estate_action(
        &mut self,
        state: &GameState,
        player: PlayerId,
        estate: Estate,
    ) -> Result<EstateAction, InputClosed> {
        writeln!(
            self.out,
            "{} is in {}. Enter 'g' to make a guess or 's' to offer a solution:",
            state.player(player).name(),
            estate
        )
        .unwrap();
        writeln!(self.out, "Anything else will be treated as a pass").unwrap();

        let line = self.read_line()?;
        match line.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('g') => {
                let suspect = self.read_card(CardKind::Suspect, Card::suspects())?;
                let weapon = self.read_card(CardKind::Weapon, Card::weapons())?;
                Ok(EstateAction::Guess { suspect, weapon })
            }
            Some('s') => {
                let suspect = self.read_card(CardKind::Suspect, Card::suspects())?;
                let weapon = self.read_card(CardKind::Weapon, Card::weapons())?;
                let named = self.read_card(CardKind::Estate, Card::estates())?;
                Ok(EstateAction::Accuse { suspect, weapon, estate: named })
            }
            _ => Ok(EstateAction::Pass),
        }
    }

    fn refutation_pick(
        &mut self,
        state: &GameState,
        refuter: PlayerId,
        matches: &[Card],
    ) -> Result<Card, InputClosed> {
        if let [only] = matches {
            writeln!(
                self.out,
                "{} has one matching card to show: {}",
                state.player(refuter).name(),
                only
            )
            .unwrap();
            return Ok(*only);
        }
        loop {
            writeln!(
                self.out,
                "{}, choose a card to show:",
                state.player(refuter).name()
            )
            .unwrap();
            for card in matches {
                writeln!(self.out, "  {}", card).unwrap();
            }
            let line = self.read_line()?;
            match Card::from_name(&line) {
                Some(card) if matches.contains(&card) => return Ok(card),
                _ => {
                    writeln!(self.out, "{} is not one of the matching cards", line).unwrap();
                }
            }
        }
    }
}

/// Renders the board and narrates events to a writer.
pub struct ConsoleRenderer<Out> {
    out: Out,
}

impl<Out: Write> ConsoleRenderer<Out> {
    pub fn new(out: Out) -> ConsoleRenderer<Out> {
        ConsoleRenderer { out }
    }
}

impl<Out: Write> Renderer for ConsoleRenderer<Out> {
    fn board(&mut self, state: &GameState) {
        self.out.write_all(render_board(state).as_bytes()).unwrap();
    }

    fn turn_banner(&mut self, state: &GameState, player: PlayerId, moves_left: u8) {
        let p = state.player(player);
        writeln!(self.out, "{}'s turn: {} moves left", p.name(), moves_left).unwrap();
        writeln!(self.out, "Hand:").unwrap();
        for card in p.hand() {
            writeln!(self.out, "  {}", card).unwrap();
        }
        writeln!(self.out, "Seen:").unwrap();
        for card in p.seen() {
            writeln!(self.out, "  {}", card).unwrap();
        }
        writeln!(self.out, "----------").unwrap();
    }

    fn event(&mut self, state: &GameState, event: &GameEvent) {
        let name = |id: PlayerId| state.player(id).name();
        match *event {
            GameEvent::TurnBegan { player, turn, roll } => {
                writeln!(self.out, "Turn {}: {} rolled {}", turn, name(player), roll).unwrap();
            }
            GameEvent::Moved { player, outcome } => match outcome {
                MoveOutcome::EnteredEstate { estate } => {
                    writeln!(self.out, "{} enters {}", name(player), estate).unwrap();
                }
                MoveOutcome::ExitedEstate { to } => {
                    writeln!(self.out, "{} steps out at {}", name(player), to).unwrap();
                }
                MoveOutcome::Stepped { .. } => {}
            },
            GameEvent::MoveRejected { rejection, .. } => {
                writeln!(self.out, "{}. Try another direction.", rejection).unwrap();
            }
            GameEvent::NoLegalMoves { player } => {
                writeln!(self.out, "{} has no legal moves left", name(player)).unwrap();
            }
            GameEvent::Consulted { refuter, could_refute } => {
                if could_refute {
                    writeln!(self.out, "{} has a card to show", name(refuter)).unwrap();
                } else {
                    writeln!(self.out, "{} cannot refute", name(refuter)).unwrap();
                }
            }
            GameEvent::GuessRefuted { accuser, by, alibi } => {
                writeln!(
                    self.out,
                    "{} shows {} a card: {} was not part of the crime",
                    name(by),
                    name(accuser),
                    alibi
                )
                .unwrap();
            }
            GameEvent::GuessUnrefuted { accuser, guess } => {
                writeln!(
                    self.out,
                    "No one could refute {}'s guess: {}",
                    name(accuser),
                    guess
                )
                .unwrap();
            }
            GameEvent::AccusationDowngraded { player } => {
                writeln!(
                    self.out,
                    "{} already used their solution attempt; counting it as a guess",
                    name(player)
                )
                .unwrap();
            }
            GameEvent::AccusationWrong { player } => {
                writeln!(self.out, "{}'s solution attempt is incorrect", name(player)).unwrap();
            }
            GameEvent::GameWon { player } => {
                writeln!(
                    self.out,
                    "Congratulations {}! You successfully solved the mystery.",
                    name(player)
                )
                .unwrap();
            }
        }
    }
}

/// Renders the full board as text, three characters per tile.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for row in 0..BOARD_ROWS {
        let mut col = 0;
        while col < BOARD_COLS {
            let at = match Coord::new(row, col) {
                Some(at) => at,
                None => break,
            };
            if let Some(estate) = estate_covering(at) {
                let fp = estate.footprint();
                if col == fp.left {
                    out.push_str(&estate_line(state, estate, row));
                }
                col = fp.right + 1;
                continue;
            }
            match state.grid().tile(at) {
                Tile::Wall => out.push_str("##|"),
                Tile::Path { occupant: None } => out.push_str("__|"),
                Tile::Path { occupant: Some(p) } => {
                    out.push_str(&state.player(p).name()[..2]);
                    out.push('|');
                }
                // Doorways sit on estate rings and are drawn by the art.
                Tile::Entrance { .. } => out.push_str("   "),
            }
            col += 1;
        }
        out.push('\n');
    }
    out
}

fn estate_covering(at: Coord) -> Option<Estate> {
    ALL_ESTATES
        .iter()
        .copied()
        .find(|e| e.footprint().contains(at))
}

/// One art row of an estate footprint: walls, doorway arrows, label rows,
/// and the occupant initials row.
fn estate_line(state: &GameState, estate: Estate, row: u8) -> String {
    let info = estate.info();
    let fp = info.footprint;
    let mut line = String::new();
    for col in fp.left..=fp.right {
        let at = match Coord::new(row, col) {
            Some(at) => at,
            None => break,
        };
        if info.entrances.contains(&at) {
            line.push_str(doorway_arrow(fp, at));
        } else if fp.on_ring(at) {
            line.push_str("##|");
        } else {
            let text = interior_text(state, estate, row);
            let idx = (col - fp.left - 1) as usize * 3;
            line.push_str(&text[idx..idx + 3]);
        }
    }
    line
}

/// Arrow glyph for a doorway, pointing into the estate.
fn doorway_arrow(fp: Footprint, at: Coord) -> &'static str {
    if at.row() == fp.top as usize {
        "vv|"
    } else if at.row() == fp.bottom as usize {
        "^^|"
    } else if at.col() == fp.left as usize {
        ">>>"
    } else {
        "<<<"
    }
}

/// Interior text for one row: a label row, or the occupant initials on
/// the last interior row.
fn interior_text(state: &GameState, estate: Estate, row: u8) -> String {
    let info = estate.info();
    let fp = info.footprint;
    let width = (fp.right - fp.left - 1) as usize * 3;
    if row == fp.bottom - 1 {
        let initials: Vec<&str> = state
            .estate_occupants(estate)
            .iter()
            .map(|p| &state.player(*p).name()[..2])
            .collect();
        let mut text = initials.join(" ");
        text.truncate(width);
        format!("{:<width$}", text, width = width)
    } else {
        let label = info
            .label
            .get((row - fp.top - 1) as usize)
            .copied()
            .unwrap_or("");
        format!("{:<width$}", label, width = width)
    }
}
