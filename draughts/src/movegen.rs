/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, CapturePath, Color, Move, Piece, Rank, Square, MAX_NUM_MOVES};

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// Diagonal steps as `(file, rank)` deltas.
static ALL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
static BLACK_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (1, -1)];
static WHITE_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, 1), (1, 1)];

/// The diagonal directions `piece` may move and capture in: men forward only,
/// kings everywhere.
#[inline(always)]
fn directions(piece: Piece) -> &'static [(i8, i8)] {
    if piece.is_king() {
        &ALL_DIRECTIONS
    } else {
        match piece.color() {
            Color::Black => &BLACK_MAN_DIRECTIONS,
            Color::White => &WHITE_MAN_DIRECTIONS,
        }
    }
}

/// Generate all legal moves for `color` on the provided board.
///
/// Capture is mandatory: if any jump is available to `color`, only jumps are
/// returned, and every jump is a complete chain (a jump sequence must be
/// continued while a further jump exists). Enumeration order is
/// deterministic: pieces in square-index order, directions in a fixed order.
///
/// An empty list means `color` has no legal move, which ends the game; that
/// determination is left to the caller.
///
/// # Example
/// ```
/// # use draughts::*;
/// let board = Board::default();
/// assert_eq!(moves_for(&board, Color::Black).len(), 7);
/// assert_eq!(moves_for(&board, Color::White).len(), 7);
/// ```
pub fn moves_for(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    for (square, piece) in board.iter() {
        if piece.color() == color {
            jump_moves(board, square, square, piece, 0, &CapturePath::new(), &mut moves);
        }
    }

    // Slides are legal only when no piece of this color can jump
    if moves.is_empty() {
        for (square, piece) in board.iter() {
            if piece.color() == color {
                slide_moves(board, square, piece, &mut moves);
            }
        }
    }

    moves
}

/// Extends the jump chain of `piece` (currently at `from`, having started at
/// `origin`) in every direction it can, appending each complete chain to `moves`.
///
/// `taken` is a square-index bitmask of the pieces already jumped in this
/// chain; a piece may be jumped at most once.
fn jump_moves(
    board: &Board,
    origin: Square,
    from: Square,
    piece: Piece,
    taken: u64,
    path: &CapturePath,
    moves: &mut MoveList,
) {
    let mut extended = false;

    for &(df, dr) in directions(piece) {
        let Some(over) = from.offset(df, dr) else {
            continue;
        };
        let Some(to) = from.offset(df * 2, dr * 2) else {
            continue;
        };

        // The jumped square must hold an enemy piece not already taken in this chain
        match board.color_at(over) {
            Some(c) if c == piece.color().opponent() => {}
            _ => continue,
        }
        if taken & (1 << over.index()) != 0 {
            continue;
        }

        // The landing square must be free. The chain's origin counts as free,
        // since the moving piece vacated it; already-jumped pieces stay on
        // their squares until the move completes, so those squares do not.
        if board.has(to) && to != origin {
            continue;
        }

        extended = true;
        let mut longer = path.clone();
        longer.push(over);

        if !piece.is_king() && to.rank() == Rank::crowning(piece.color()) {
            // Crowning ends the move, even if the new king could jump on
            moves.push(Move::new_capture(origin, to, longer));
        } else {
            jump_moves(board, origin, to, piece, taken | 1 << over.index(), &longer, moves);
        }
    }

    // A chain that cannot be extended is complete
    if !extended && !path.is_empty() {
        moves.push(Move::new_capture(origin, from, path.clone()));
    }
}

/// Appends the non-capturing moves of `piece` at `from` to `moves`.
fn slide_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    for &(df, dr) in directions(piece) {
        if let Some(to) = from.offset(df, dr) {
            if !board.has(to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(numbers: &[u8]) -> Vec<Square> {
        numbers
            .iter()
            .map(|&n| Square::from_pdn(n).unwrap())
            .collect()
    }

    #[test]
    fn test_men_slide_forward_only() {
        // A lone Black man on 10 may only advance down the board
        let board = Board::from_fen("W:B10").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert!(moves
            .iter()
            .all(|mv| mv.to().rank() < mv.from().rank()));
    }

    #[test]
    fn test_kings_slide_in_all_four_directions() {
        let board = Board::from_fen("W:BK22").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_edge_man_has_a_single_slide() {
        // 13 sits on the a-file, so one forward diagonal is off the board
        let board = Board::from_fen("W:B13").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "13-17");
    }

    #[test]
    fn test_capture_is_mandatory() {
        // Black man on 15 could slide, but the jump over 18 must be taken
        let board = Board::from_fen("W18:B15").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "15x22");
        assert_eq!(moves[0].captures(), squares(&[18]).as_slice());
    }

    #[test]
    fn test_jump_chains_are_completed() {
        // 15x22 alone is not legal; the chain must continue to 29
        let board = Board::from_fen("W18,25:B15").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "15x29");
        assert_eq!(moves[0].captures(), squares(&[18, 25]).as_slice());
    }

    #[test]
    fn test_crowning_ends_the_chain() {
        // The man on 24 jumps 27 and lands on White's back rank. The fresh
        // king could jump 26 backwards, but crowning ends the move.
        let board = Board::from_fen("W26,27:B24").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "24x31");
        assert_eq!(moves[0].captures(), squares(&[27]).as_slice());
    }

    #[test]
    fn test_king_capture_chains_branch() {
        // A Black king on 13 in a field of five White men. Four complete
        // chains exist, two of which loop back to the starting square.
        let board = Board::from_fen("W9,10,17,18,26:BK13").unwrap();
        let moves = moves_for(&board, Color::Black);
        assert_eq!(moves.len(), 4);

        let start = Square::from_pdn(13).unwrap();
        assert!(moves.iter().all(|mv| mv.from() == start));

        let mut rendered: Vec<String> = moves
            .iter()
            .map(|mv| format!("{mv}:{}", mv.captures().len()))
            .collect();
        rendered.sort();
        assert_eq!(rendered, ["13x13:4", "13x13:4", "13x31:2", "13x31:4"]);
    }

    #[test]
    fn test_blocked_pieces_have_no_moves() {
        // Black's back-rank men are boxed in by their own side at the start
        let board = Board::default();
        let froms: Vec<Square> = moves_for(&board, Color::Black)
            .into_iter()
            .map(|mv| mv.from())
            .collect();
        for number in 1..=8 {
            assert!(!froms.contains(&Square::from_pdn(number).unwrap()));
        }
    }
}
