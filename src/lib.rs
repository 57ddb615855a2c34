//! Gumshoe engine library.
//!
//! A Hobby Detectives deduction-game engine: the board and estate
//! occupancy model, the movement state machine, card dealing, the
//! guess/refutation protocol, and the turn clock. I/O is injected via
//! collaborator traits; the console front end is one implementation.

pub mod board;
pub mod cards;
pub mod config;
pub mod console;
pub mod deal;
pub mod deduction;
pub mod game;
pub mod movement;
pub mod turn;
