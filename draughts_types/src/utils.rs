/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// FEN string for the starting position of a standard game: twelve White men
/// on squares 21-32, twelve Black men on squares 1-12, Black to move.
pub const FEN_STARTPOS: &str =
    "B:W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12";

/// Generous upper bound on the number of legal moves in a reachable position.
///
/// The starting position has 7 moves and even dense king endgames stay far
/// below this.
pub const MAX_NUM_MOVES: usize = 128;

/// Maximum number of captures a single move can make: one side never has
/// more than 12 pieces on the board.
pub const MAX_CAPTURES: usize = 12;
