//! The board grid.
//!
//! A fixed 24x24 array of tiles with bulk-fill for setup and checked
//! occupancy mutation. `Grid::standard()` lays out the Hobby Detectives
//! board: four corner estates, the central Visitation Villa, and four 2x2
//! wall squares between them; everything else is open path.

use std::ops::RangeInclusive;

use crate::board::estate::ALL_ESTATES;
use crate::board::state::PlayerId;
use crate::board::tile::{Coord, Tile, TileError, BOARD_COLS, BOARD_ROWS};

/// The full board grid, owning every tile.
///
/// Uses a fixed-size 2D array for O(1) lookup; coordinates are validated
/// at construction (`Coord`), so lookups cannot go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: [[Tile; BOARD_COLS as usize]; BOARD_ROWS as usize],
}

impl Grid {
    /// Creates a grid of open path tiles (used by tests and as the base
    /// layer of the standard layout).
    pub fn open() -> Grid {
        Grid {
            tiles: [[Tile::EMPTY_PATH; BOARD_COLS as usize]; BOARD_ROWS as usize],
        }
    }

    /// Builds the standard Hobby Detectives board.
    ///
    /// Estate footprints are filled with wall and their doorways punched
    /// through afterwards, so the grid's entrance tiles are generated from
    /// the same table the estates read their doorways from.
    pub fn standard() -> Grid {
        let mut grid = Grid::open();

        for estate in ALL_ESTATES {
            let fp = estate.footprint();
            grid.fill(fp.top..=fp.bottom, fp.left..=fp.right, Tile::Wall);
            for &door in estate.entrances() {
                *grid.tile_mut(door) = Tile::Entrance { estate };
            }
        }

        // The four wall squares in the open middle of the board.
        grid.fill(5..=6, 11..=12, Tile::Wall);
        grid.fill(11..=12, 17..=18, Tile::Wall);
        grid.fill(17..=18, 11..=12, Tile::Wall);
        grid.fill(11..=12, 5..=6, Tile::Wall);

        grid
    }

    /// Returns the tile at a coordinate.
    pub fn tile(&self, at: Coord) -> Tile {
        self.tiles[at.row()][at.col()]
    }

    /// Returns a mutable reference to the tile at a coordinate.
    pub fn tile_mut(&mut self, at: Coord) -> &mut Tile {
        &mut self.tiles[at.row()][at.col()]
    }

    /// Returns true if a player may step onto the tile at `at`.
    pub fn is_passable(&self, at: Coord) -> bool {
        self.tile(at).is_passable()
    }

    /// Bulk-initializes a rectangular region to copies of a template tile.
    ///
    /// Setup-only. The range is layout data fixed at compile time, so a
    /// range outside the board is a programmer error and asserts.
    pub fn fill(&mut self, rows: RangeInclusive<u8>, cols: RangeInclusive<u8>, tile: Tile) {
        assert!(
            *rows.end() < BOARD_ROWS && *cols.end() < BOARD_COLS,
            "fill range outside the {}x{} board",
            BOARD_ROWS,
            BOARD_COLS
        );
        for row in rows {
            for col in cols.clone() {
                self.tiles[row as usize][col as usize] = tile;
            }
        }
    }

    /// Places a player on the path tile at `at`.
    pub fn place(&mut self, at: Coord, player: PlayerId) -> Result<(), TileError> {
        self.tile_mut(at).set_occupant(player)
    }

    /// Removes a player from the path tile at `at`.
    pub fn clear(&mut self, at: Coord, player: PlayerId) -> Result<(), TileError> {
        self.tile_mut(at).clear_occupant(player)
    }
}
