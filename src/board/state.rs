//! Complete game state at a point in time.
//!
//! `GameState` owns the grid, the seated players, the per-estate occupant
//! lists, and the hidden solution. Every relocation goes through methods
//! that update the tile slot, the estate occupant list, and the player's
//! own location together, so the occupancy invariant (a player is exactly
//! where the board thinks they are) holds by construction.

use crate::board::estate::{Estate, ESTATE_COUNT};
use crate::board::grid::Grid;
use crate::board::tile::{Coord, Tile};
use crate::cards::{Card, Solution};
use crate::deal::Deal;

/// Minimum number of seated players.
pub const MIN_PLAYERS: usize = 3;

/// Maximum number of seated players.
pub const MAX_PLAYERS: usize = 4;

/// Seat identifier, 0-based in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a new seat id.
    pub const fn new(id: u8) -> PlayerId {
        PlayerId(id)
    }

    /// Returns the raw 0-based seat index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the seat after this one, wrapping modulo the table size.
    pub const fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.0 as usize + 1) % player_count) as u8)
    }
}

/// Where a player currently is: on a path tile, or inside an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path(Coord),
    Estate(Estate),
}

/// One seated player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    token: Card,
    location: Location,
    hand: Vec<Card>,
    seen: Vec<Card>,
    can_accuse: bool,
}

impl PlayerState {
    /// The suspect card this player plays as.
    pub fn token(&self) -> Card {
        self.token
    }

    /// The player's display name (their suspect's name).
    pub fn name(&self) -> &'static str {
        self.token.name()
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The hand dealt at game start; immutable afterwards.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards revealed to this player by refutations.
    pub fn seen(&self) -> &[Card] {
        &self.seen
    }

    /// True until the player's one solution attempt is spent.
    pub fn can_accuse(&self) -> bool {
        self.can_accuse
    }
}

/// Fixed starting tiles, one per seat in seating order.
const STARTS: [(u8, u8); MAX_PLAYERS] = [(3, 7), (5, 16), (18, 7), (20, 16)];

/// Errors constructing a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),

    #[error("starting tile {0} is not an open path cell")]
    StartBlocked(Coord),
}

/// Errors relocating a player onto a path tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("destination {0} is not an open path cell")]
    NotPassable(Coord),

    #[error("destination {0} is already occupied")]
    Occupied(Coord),
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    players: Vec<PlayerState>,
    occupants: [Vec<PlayerId>; ESTATE_COUNT],
    solution: Solution,
}

impl GameState {
    /// Creates a game on the standard board from a finished deal.
    pub fn new(deal: Deal) -> Result<GameState, SetupError> {
        GameState::with_grid(Grid::standard(), deal)
    }

    /// Creates a game on the given grid; the deal decides the player count.
    pub fn with_grid(grid: Grid, deal: Deal) -> Result<GameState, SetupError> {
        let count = deal.hands.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }

        let mut state = GameState {
            grid,
            players: Vec::with_capacity(count),
            occupants: std::array::from_fn(|_| Vec::new()),
            solution: deal.solution,
        };

        for (i, hand) in deal.hands.into_iter().enumerate() {
            let (row, col) = STARTS[i];
            let start = match Coord::new(row, col) {
                Some(c) => c,
                None => unreachable!("start tiles are on the board"),
            };
            let id = PlayerId::new(i as u8);
            if state.grid.place(start, id).is_err() {
                return Err(SetupError::StartBlocked(start));
            }
            state.players.push(PlayerState {
                token: Card::suspects()[i],
                location: Location::Path(start),
                hand,
                seen: Vec::new(),
                can_accuse: true,
            });
        }

        Ok(state)
    }

    /// Returns the board grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterates over all seats in turn order.
    pub fn seats(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId::new)
    }

    /// Returns a player's state.
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Returns a player's current location.
    pub fn location(&self, id: PlayerId) -> Location {
        self.players[id.index()].location
    }

    /// Returns the players inside an estate, in arrival order.
    pub fn estate_occupants(&self, estate: Estate) -> &[PlayerId] {
        &self.occupants[estate as usize]
    }

    /// Returns the hidden solution. Read-only for the whole game; only the
    /// deduction protocol compares against it.
    pub fn solution(&self) -> Solution {
        self.solution
    }

    /// Moves a player onto an open path tile, detaching them from wherever
    /// they stand now.
    pub fn relocate_to_path(&mut self, id: PlayerId, dest: Coord) -> Result<(), PlacementError> {
        match self.grid.tile(dest) {
            Tile::Path { occupant: None } => {
                self.detach(id);
                *self.grid.tile_mut(dest) = Tile::Path { occupant: Some(id) };
                self.players[id.index()].location = Location::Path(dest);
                Ok(())
            }
            Tile::Path { occupant: Some(_) } => Err(PlacementError::Occupied(dest)),
            Tile::Wall | Tile::Entrance { .. } => Err(PlacementError::NotPassable(dest)),
        }
    }

    /// Moves a player into an estate. Estates have no capacity limit, so
    /// this always succeeds.
    pub fn enter_estate(&mut self, id: PlayerId, estate: Estate) {
        self.detach(id);
        self.occupants[estate as usize].push(id);
        self.players[id.index()].location = Location::Estate(estate);
    }

    /// Records a card revealed to this player by a refutation. The seen
    /// list only grows.
    pub fn record_seen(&mut self, id: PlayerId, card: Card) {
        let seen = &mut self.players[id.index()].seen;
        if !seen.contains(&card) {
            seen.push(card);
        }
    }

    /// Permanently spends the player's one solution attempt.
    pub fn spend_accusation(&mut self, id: PlayerId) {
        self.players[id.index()].can_accuse = false;
    }

    /// Removes the player from their current tile or estate, leaving them
    /// unplaced until the caller sets a new location.
    fn detach(&mut self, id: PlayerId) {
        match self.players[id.index()].location {
            Location::Path(at) => {
                debug_assert_eq!(self.grid.tile(at).occupant(), Some(id));
                if let Tile::Path { occupant } = self.grid.tile_mut(at) {
                    *occupant = None;
                }
            }
            Location::Estate(estate) => {
                self.occupants[estate as usize].retain(|p| *p != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::Deal;

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn bare_deal(players: usize) -> Deal {
        Deal {
            solution: Solution {
                suspect: Card::Lucilla,
                weapon: Card::Broom,
                estate: Card::HauntedHouse,
            },
            hands: vec![Vec::new(); players],
        }
    }

    fn assert_consistent(state: &GameState) {
        for id in state.seats() {
            match state.location(id) {
                Location::Path(at) => {
                    assert_eq!(state.grid().tile(at).occupant(), Some(id));
                }
                Location::Estate(estate) => {
                    assert!(state.estate_occupants(estate).contains(&id));
                }
            }
        }
    }

    #[test]
    fn seats_players_on_their_start_tiles() {
        let state = GameState::new(bare_deal(4)).unwrap();
        assert_eq!(state.player_count(), 4);
        assert_eq!(state.location(PlayerId::new(0)), Location::Path(coord(3, 7)));
        assert_eq!(state.location(PlayerId::new(1)), Location::Path(coord(5, 16)));
        assert_eq!(state.location(PlayerId::new(2)), Location::Path(coord(18, 7)));
        assert_eq!(state.location(PlayerId::new(3)), Location::Path(coord(20, 16)));
        assert_eq!(state.player(PlayerId::new(2)).name(), "Malina");
        assert_consistent(&state);
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert_eq!(
            GameState::new(bare_deal(2)).unwrap_err(),
            SetupError::PlayerCount(2)
        );
        assert_eq!(
            GameState::new(bare_deal(5)).unwrap_err(),
            SetupError::PlayerCount(5)
        );
    }

    #[test]
    fn relocate_updates_both_sides() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        let p = PlayerId::new(0);
        let from = coord(3, 7);
        let to = coord(3, 8);

        state.relocate_to_path(p, to).unwrap();
        assert_eq!(state.location(p), Location::Path(to));
        assert_eq!(state.grid().tile(from).occupant(), None);
        assert_eq!(state.grid().tile(to).occupant(), Some(p));
        assert_consistent(&state);
    }

    #[test]
    fn relocate_rejects_occupied_and_walls() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        let p = PlayerId::new(0);
        // Bert's start tile is taken.
        assert_eq!(
            state.relocate_to_path(p, coord(5, 16)),
            Err(PlacementError::Occupied(coord(5, 16)))
        );
        // Inside Haunted House walls.
        assert_eq!(
            state.relocate_to_path(p, coord(4, 4)),
            Err(PlacementError::NotPassable(coord(4, 4)))
        );
        // Rejections leave the player where they were.
        assert_eq!(state.location(p), Location::Path(coord(3, 7)));
        assert_consistent(&state);
    }

    #[test]
    fn estates_hold_many_players() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        state.enter_estate(PlayerId::new(0), Estate::VisitationVilla);
        state.enter_estate(PlayerId::new(1), Estate::VisitationVilla);
        assert_eq!(
            state.estate_occupants(Estate::VisitationVilla),
            &[PlayerId::new(0), PlayerId::new(1)]
        );
        // The vacated start tiles opened up.
        assert!(state.grid().is_passable(coord(3, 7)));
        assert!(state.grid().is_passable(coord(5, 16)));
        assert_consistent(&state);
    }

    #[test]
    fn leaving_an_estate_clears_the_occupant_list() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        let p = PlayerId::new(0);
        state.enter_estate(p, Estate::HauntedHouse);
        state.relocate_to_path(p, coord(3, 7)).unwrap();
        assert!(state.estate_occupants(Estate::HauntedHouse).is_empty());
        assert_consistent(&state);
    }

    #[test]
    fn seen_list_grows_without_duplicates() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        let p = PlayerId::new(1);
        state.record_seen(p, Card::Knife);
        state.record_seen(p, Card::Knife);
        state.record_seen(p, Card::Percy);
        assert_eq!(state.player(p).seen(), &[Card::Knife, Card::Percy]);
    }

    #[test]
    fn accusation_right_is_spent_permanently() {
        let mut state = GameState::new(bare_deal(3)).unwrap();
        let p = PlayerId::new(2);
        assert!(state.player(p).can_accuse());
        state.spend_accusation(p);
        assert!(!state.player(p).can_accuse());
    }

    #[test]
    fn next_seat_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }
}
