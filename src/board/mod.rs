//! Board representation and game-state types.
//!
//! Contains the core data structures for tiles, estates, the grid, and
//! the overall game state.

pub mod estate;
pub mod grid;
pub mod state;
pub mod tile;

pub use estate::{Estate, EstateInfo, Footprint, ALL_ESTATES, ESTATE_COUNT, ESTATE_INFO};
pub use grid::Grid;
pub use state::{
    GameState, Location, PlacementError, PlayerId, PlayerState, SetupError, MAX_PLAYERS,
    MIN_PLAYERS,
};
pub use tile::{
    Coord, Direction, Tile, TileError, ALL_DIRECTIONS, BOARD_COLS, BOARD_ROWS,
};
