//! The movement state machine.
//!
//! Resolves one directional move request for one player: a step to an
//! adjacent open path tile, a pass-through into an estate via a doorway,
//! or an exit from an estate through its per-direction exit table.
//! Anything else is a rejection, reported as a value and mutating nothing.
//!
//! `probe` answers "what would happen" without touching state; `step`
//! applies the probed outcome. The per-turn `TurnVisits` set enforces the
//! no-revisit rule: a tile or estate already visited this turn cannot be
//! entered again until the next turn.

use crate::board::estate::Estate;
use crate::board::state::{GameState, Location, PlacementError, PlayerId};
use crate::board::tile::{Coord, Direction, Tile, ALL_DIRECTIONS};

/// A successfully resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped onto an adjacent open path tile.
    Stepped { to: Coord },
    /// Stepped through a doorway into an estate.
    EnteredEstate { estate: Estate },
    /// Left an estate through its exit for the requested direction.
    ExitedEstate { to: Coord },
}

/// Why a move request was refused. Recoverable: the player is re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("the board ends that way")]
    OffBoard,

    #[error("a wall is in the way")]
    Wall,

    #[error("another player is standing there")]
    Occupied,

    #[error("already visited this turn")]
    AlreadyVisited,

    #[error("the estate has no doorway on that side")]
    NoDoorway,
}

/// Tiles and estates a player has already occupied this turn.
///
/// Seeded with the starting location so a player cannot immediately step
/// back where they began; cleared by constructing a fresh value each turn.
#[derive(Debug, Clone, Default)]
pub struct TurnVisits {
    tiles: Vec<Coord>,
    estates: Vec<Estate>,
}

impl TurnVisits {
    /// Creates the visit set for a turn beginning at `start`.
    pub fn starting_at(start: Location) -> TurnVisits {
        let mut visits = TurnVisits::default();
        match start {
            Location::Path(at) => visits.tiles.push(at),
            Location::Estate(estate) => visits.estates.push(estate),
        }
        visits
    }

    /// Returns true if the tile was occupied earlier this turn.
    pub fn seen_tile(&self, at: Coord) -> bool {
        self.tiles.contains(&at)
    }

    /// Returns true if the estate was occupied earlier this turn.
    pub fn seen_estate(&self, estate: Estate) -> bool {
        self.estates.contains(&estate)
    }

    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Stepped { to } | MoveOutcome::ExitedEstate { to } => {
                self.tiles.push(to)
            }
            MoveOutcome::EnteredEstate { estate } => self.estates.push(estate),
        }
    }
}

/// Resolves a move request without mutating anything.
pub fn probe(
    state: &GameState,
    player: PlayerId,
    dir: Direction,
    visits: &TurnVisits,
) -> Result<MoveOutcome, Rejection> {
    match state.location(player) {
        Location::Path(at) => {
            let dest = at.step(dir).ok_or(Rejection::OffBoard)?;
            match state.grid().tile(dest) {
                Tile::Wall => Err(Rejection::Wall),
                Tile::Path { occupant: Some(_) } => Err(Rejection::Occupied),
                Tile::Path { occupant: None } => {
                    if visits.seen_tile(dest) {
                        Err(Rejection::AlreadyVisited)
                    } else {
                        Ok(MoveOutcome::Stepped { to: dest })
                    }
                }
                // Entry through a doorway is direction-agnostic: stepping
                // onto the entrance tile is all it takes.
                Tile::Entrance { estate } => {
                    if visits.seen_estate(estate) {
                        Err(Rejection::AlreadyVisited)
                    } else {
                        Ok(MoveOutcome::EnteredEstate { estate })
                    }
                }
            }
        }
        Location::Estate(estate) => {
            let dest = estate.exit(dir).ok_or(Rejection::NoDoorway)?;
            match state.grid().tile(dest) {
                Tile::Path { occupant: Some(_) } => Err(Rejection::Occupied),
                Tile::Path { occupant: None } => {
                    if visits.seen_tile(dest) {
                        Err(Rejection::AlreadyVisited)
                    } else {
                        Ok(MoveOutcome::ExitedEstate { to: dest })
                    }
                }
                Tile::Wall | Tile::Entrance { .. } => Err(Rejection::Wall),
            }
        }
    }
}

/// Resolves and applies a move request.
///
/// On rejection the state is untouched and the caller re-prompts; on
/// success the player has been relocated and the visit recorded.
pub fn step(
    state: &mut GameState,
    player: PlayerId,
    dir: Direction,
    visits: &mut TurnVisits,
) -> Result<MoveOutcome, Rejection> {
    let outcome = probe(state, player, dir, visits)?;
    match outcome {
        MoveOutcome::Stepped { to } | MoveOutcome::ExitedEstate { to } => {
            state.relocate_to_path(player, to).map_err(|e| match e {
                PlacementError::Occupied(_) => Rejection::Occupied,
                PlacementError::NotPassable(_) => Rejection::Wall,
            })?;
        }
        MoveOutcome::EnteredEstate { estate } => {
            state.enter_estate(player, estate);
        }
    }
    visits.record(outcome);
    Ok(outcome)
}

/// Returns true if any direction would be accepted for this player.
///
/// The turn engine uses this to end a player's movement early when the
/// no-revisit rule has boxed them in, instead of re-prompting forever.
pub fn has_legal_move(state: &GameState, player: PlayerId, visits: &TurnVisits) -> bool {
    ALL_DIRECTIONS
        .iter()
        .any(|&dir| probe(state, player, dir, visits).is_ok())
}
