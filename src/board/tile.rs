//! Tile-level board primitives.
//!
//! A board position is a `Coord` (row and column inside the fixed 24x24
//! grid); a `Tile` is the exhaustive sum of the three cell kinds: open
//! path, wall, and estate entrance. Occupancy lives in the `Path` variant
//! as an option slot, so double-occupancy and wall occupancy are rejected
//! as values rather than discovered at runtime via downcasts.

use crate::board::estate::Estate;
use crate::board::state::PlayerId;

/// Number of rows on the board.
pub const BOARD_ROWS: u8 = 24;

/// Number of columns on the board.
pub const BOARD_COLS: u8 = 24;

/// A validated board coordinate.
///
/// Construction is bounds-checked, so any `Coord` in circulation addresses
/// a real tile and grid lookups cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if it falls outside the board.
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if row < BOARD_ROWS && col < BOARD_COLS {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Returns the row index.
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column index.
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the adjacent coordinate in the given direction, or `None`
    /// at the board edge.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as u8, col as u8)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A compass direction for a single-step move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All four directions in key order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

impl Direction {
    /// Returns the console key bound to this direction.
    pub const fn key(self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Left => 'a',
            Direction::Down => 's',
            Direction::Right => 'd',
        }
    }

    /// Parses a direction from its console key.
    pub fn from_key(c: char) -> Option<Direction> {
        match c {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Returns the (row, col) delta of a single step.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by tile occupancy mutations.
///
/// These mark contract violations, not expected gameplay outcomes: the
/// movement layer checks passability before mutating, so a well-formed
/// caller never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("cell is already occupied")]
    Occupied,

    #[error("player is not in this cell")]
    NotPresent,

    #[error("only a path cell can hold a player")]
    Unsupported,
}

/// One cell of the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Open floor with room for at most one player.
    Path { occupant: Option<PlayerId> },
    /// Impassable masonry.
    Wall,
    /// A doorway that passes a stepping player through into its estate.
    Entrance { estate: Estate },
}

impl Tile {
    /// An unoccupied path tile.
    pub const EMPTY_PATH: Tile = Tile::Path { occupant: None };

    /// Returns true if a player may step onto this tile: an empty path, or
    /// any entrance (estates have no capacity limit).
    pub const fn is_passable(self) -> bool {
        matches!(
            self,
            Tile::Path { occupant: None } | Tile::Entrance { .. }
        )
    }

    /// Returns the occupant of a path tile, if any.
    pub const fn occupant(self) -> Option<PlayerId> {
        match self {
            Tile::Path { occupant } => occupant,
            _ => None,
        }
    }

    /// Places a player on this tile.
    ///
    /// Only an empty path accepts a player; an occupied path reports
    /// `Occupied`, and walls and entrances report `Unsupported` (entrances
    /// register their players with the estate, not the tile).
    pub fn set_occupant(&mut self, player: PlayerId) -> Result<(), TileError> {
        match self {
            Tile::Path { occupant: None } => {
                *self = Tile::Path {
                    occupant: Some(player),
                };
                Ok(())
            }
            Tile::Path { .. } => Err(TileError::Occupied),
            Tile::Wall | Tile::Entrance { .. } => Err(TileError::Unsupported),
        }
    }

    /// Removes the given player from this tile.
    ///
    /// Fails with `NotPresent` when someone else (or nobody) occupies the
    /// path, and `Unsupported` on walls and entrances.
    pub fn clear_occupant(&mut self, player: PlayerId) -> Result<(), TileError> {
        match self {
            Tile::Path {
                occupant: Some(p),
            } if *p == player => {
                *self = Tile::EMPTY_PATH;
                Ok(())
            }
            Tile::Path { .. } => Err(TileError::NotPresent),
            Tile::Wall | Tile::Entrance { .. } => Err(TileError::Unsupported),
        }
    }
}
