/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{moves_for, Board, Color, Game};

/// Counts the number of move sequences of length `depth` playable from the
/// provided game's position.
///
/// # Example
/// ```
/// # use draughts::{perft, Game};
/// let game = Game::default();
/// assert_eq!(perft(&game, 1), 7);
/// assert_eq!(perft(&game, 2), 49);
/// ```
#[inline(always)]
pub fn perft(game: &Game, depth: usize) -> u64 {
    nodes(game.board(), game.side_to_move(), depth)
}

/// Performs a perft at the provided depth, printing the number of nodes
/// reachable after each move available at the root, and returns the total.
pub fn splitperft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut total = 0;
    for mv in moves_for(game.board(), game.side_to_move()) {
        let mut board = *game.board();
        board.apply_move(&mv);
        let count = nodes(&board, game.side_to_move().opponent(), depth - 1);

        println!("{mv}\t{count}");
        total += count;
    }

    total
}

/// Recursively accumulates the nodes from the remaining depths.
fn nodes(board: &Board, color: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    moves_for(board, color)
        .into_iter()
        .map(|mv| {
            let mut next = *board;
            next.apply_move(&mv);
            nodes(&next, color.opponent(), depth - 1)
        })
        .sum()
}
