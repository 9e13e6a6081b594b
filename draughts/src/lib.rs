/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use draughts_types::*;

/// A draughts board, complete with piece placements and FEN support.
mod board;
/// High-level abstraction of a game of draughts: turn order, move legality, and capture history.
mod game;
/// All code related to generating legal moves for pieces on a board.
mod movegen;
/// Enums and structs for modeling the movement of a piece on a draughts board.
mod moves;
/// Utility function for performance testing.
mod perft;

pub use board::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use perft::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::board::*;
    pub use crate::game::*;
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::perft::*;
    pub use draughts_types::*;
}
