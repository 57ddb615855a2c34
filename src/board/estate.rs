//! Estate definitions and metadata for the standard Hobby Detectives board.
//!
//! The five estates are enumerated with their board geometry stored in a
//! compile-time lookup table indexed by the `Estate` enum discriminant:
//! footprint rectangle, doorway (entrance) coordinates on the footprint
//! ring, and the per-direction exit table that maps an exit request to a
//! path coordinate just outside the walls.

use crate::board::tile::{Coord, Direction};

/// The number of estates on the standard board.
pub const ESTATE_COUNT: usize = 5;

/// One of the five estates.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Estate {
    HauntedHouse = 0,
    ManicManor = 1,
    CalamityCastle = 2,
    PerilPalace = 3,
    VisitationVilla = 4,
}

/// All estate variants in index order.
pub const ALL_ESTATES: [Estate; ESTATE_COUNT] = [
    Estate::HauntedHouse,
    Estate::ManicManor,
    Estate::CalamityCastle,
    Estate::PerilPalace,
    Estate::VisitationVilla,
];

/// An inclusive rectangle of board tiles: the walled footprint of an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub top: u8,
    pub left: u8,
    pub bottom: u8,
    pub right: u8,
}

impl Footprint {
    /// Returns true if the coordinate lies inside the footprint.
    pub const fn contains(self, at: Coord) -> bool {
        let row = at.row();
        let col = at.col();
        row >= self.top as usize
            && row <= self.bottom as usize
            && col >= self.left as usize
            && col <= self.right as usize
    }

    /// Returns true if the coordinate lies on the outermost ring of the
    /// footprint (where walls and doorways sit).
    pub const fn on_ring(self, at: Coord) -> bool {
        self.contains(at)
            && (at.row() == self.top as usize
                || at.row() == self.bottom as usize
                || at.col() == self.left as usize
                || at.col() == self.right as usize)
    }
}

/// Static metadata for an estate.
pub struct EstateInfo {
    pub name: &'static str,
    /// Pre-padded interior label rows for the text renderer, one string per
    /// interior row above the occupant row.
    pub label: &'static [&'static str],
    pub footprint: Footprint,
    pub entrances: &'static [Coord],
    pub exits: &'static [(Direction, Coord)],
}

/// Builds a coordinate from layout constants known to be on the board.
const fn at(row: u8, col: u8) -> Coord {
    match Coord::new(row, col) {
        Some(c) => c,
        None => panic!("estate layout coordinate outside the board"),
    }
}

/// Compile-time lookup table: index by `Estate as usize`.
pub static ESTATE_INFO: [EstateInfo; ESTATE_COUNT] = [
    // 0: Haunted House
    EstateInfo {
        name: "Haunted House",
        label: &[" Haunted ", "  House  "],
        footprint: Footprint { top: 2, left: 2, bottom: 6, right: 6 },
        entrances: &[at(3, 6), at(6, 5)],
        exits: &[(Direction::Right, at(3, 7)), (Direction::Down, at(7, 5))],
    },
    // 1: Manic Manor
    EstateInfo {
        name: "Manic Manor",
        label: &["  Manic  ", "  Manor  "],
        footprint: Footprint { top: 2, left: 17, bottom: 6, right: 21 },
        entrances: &[at(5, 17), at(6, 20)],
        exits: &[(Direction::Left, at(5, 16)), (Direction::Down, at(7, 20))],
    },
    // 2: Calamity Castle
    EstateInfo {
        name: "Calamity Castle",
        label: &[" Calamity", "  Castle "],
        footprint: Footprint { top: 17, left: 2, bottom: 21, right: 6 },
        entrances: &[at(17, 3), at(18, 6)],
        exits: &[(Direction::Up, at(16, 3)), (Direction::Right, at(18, 7))],
    },
    // 3: Peril Palace
    EstateInfo {
        name: "Peril Palace",
        label: &["  Peril  ", "  Palace "],
        footprint: Footprint { top: 17, left: 17, bottom: 21, right: 21 },
        entrances: &[at(17, 18), at(20, 17)],
        exits: &[(Direction::Up, at(16, 18)), (Direction::Left, at(20, 16))],
    },
    // 4: Visitation Villa
    EstateInfo {
        name: "Visitation Villa",
        label: &["Visit Villa "],
        footprint: Footprint { top: 10, left: 9, bottom: 13, right: 14 },
        entrances: &[at(10, 12), at(11, 14), at(12, 9), at(13, 11)],
        exits: &[
            (Direction::Up, at(9, 12)),
            (Direction::Right, at(11, 15)),
            (Direction::Down, at(14, 11)),
            (Direction::Left, at(12, 8)),
        ],
    },
];

impl Estate {
    /// Returns the static metadata for this estate.
    pub fn info(self) -> &'static EstateInfo {
        &ESTATE_INFO[self as usize]
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the walled footprint.
    pub fn footprint(self) -> Footprint {
        self.info().footprint
    }

    /// Returns the doorway coordinates on the footprint ring.
    pub fn entrances(self) -> &'static [Coord] {
        self.info().entrances
    }

    /// Looks up the exit destination for a direction, or `None` when the
    /// estate has no doorway on that side.
    pub fn exit(self, dir: Direction) -> Option<Coord> {
        self.info()
            .exits
            .iter()
            .find(|(d, _)| *d == dir)
            .map(|(_, dest)| *dest)
    }
}

impl std::fmt::Display for Estate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
