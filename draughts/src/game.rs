/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::{moves_for, Board, Color, Move, MoveList, Piece, Square};

/// A complete game session: the board, whose turn it is, and what has been
/// captured so far.
///
/// The session is the single source of truth for turn order and capture
/// history, and every mutation of the board goes through [`Game::make_move`].
/// [`Game::board`] hands out a shared reference, so callers can inspect the
/// live board but never desynchronize it from the bookkeeping here.
///
/// The session never declares a game over: a player with no legal moves has
/// lost, and callers detect that as an empty [`Game::legal_moves`] result.
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    /// The current layout of the pieces.
    board: Board,

    /// The [`Color`] whose turn it is. Black moves first.
    side_to_move: Color,

    /// Pieces removed from White's side, i.e. captured by Black, in capture order.
    captured_white: Vec<Piece>,

    /// Pieces removed from Black's side, i.e. captured by White, in capture order.
    captured_black: Vec<Piece>,
}

impl Game {
    /// Creates a new [`Game`] with the standard starting layout and Black to move.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Color, Game};
    /// let game = Game::new();
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// assert_eq!(game.legal_moves().len(), 7);
    /// assert!(game.captured_white_pieces().is_empty());
    /// assert!(game.captured_black_pieces().is_empty());
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_board(Board::default(), Color::Black)
    }

    /// Creates a new [`Game`] from the provided board with `side_to_move` to
    /// move and no capture history.
    #[inline(always)]
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            captured_white: Vec::new(),
            captured_black: Vec::new(),
        }
    }

    /// Creates a new [`Game`] from the provided FEN string, such as
    /// `"B:W21,22,K30:B1,K2"`. The capture history starts empty.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let side_to_move = match fen.trim().split(':').next() {
            Some(field) => Color::from_str(field)?,
            None => bail!("Invalid FEN string: FEN string must have a side-to-move field"),
        };

        Ok(Self::with_board(Board::from_fen(fen)?, side_to_move))
    }

    /// Generates a FEN string of this game's position.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Game, FEN_STARTPOS};
    /// assert_eq!(Game::default().to_fen(), FEN_STARTPOS);
    /// ```
    #[inline(always)]
    pub fn to_fen(&self) -> String {
        format!("{}:{}", self.side_to_move, self.board.to_fen())
    }

    /// Fetch the current [`Board`] of this game.
    ///
    /// The reference is read-only; all mutation goes through [`Game::make_move`].
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the [`Color`] whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Generate all legal moves for the player whose turn it is.
    ///
    /// A pure query: calling this repeatedly without an intervening
    /// [`Game::make_move`] yields the same list. An empty list means the
    /// side to move has lost.
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        moves_for(&self.board, self.side_to_move)
    }

    /// Returns the legal move from `from` to `to` that captures the most
    /// pieces, or `None` if no legal move has those endpoints.
    ///
    /// Distinct jump chains can share both endpoints; the rules mandate the
    /// maximal-capture line, which is what this selects. Between chains of
    /// equal length the one with the lexicographically smallest capture
    /// sequence (in square-index order) wins, so the choice does not depend
    /// on generation order.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Game, Square};
    /// let game = Game::from_fen("B:W9,10,17,18,26:BK13").unwrap();
    /// let from = Square::from_pdn(13).unwrap();
    /// let to = Square::from_pdn(31).unwrap();
    ///
    /// // Both a 2-capture and a 4-capture chain end on 31; the longer wins.
    /// let mv = game.longest_move(from, to).unwrap();
    /// assert_eq!(mv.captures().len(), 4);
    ///
    /// // No legal move runs from 13 to 14.
    /// assert!(game.longest_move(from, Square::from_pdn(14).unwrap()).is_none());
    /// ```
    #[inline(always)]
    pub fn longest_move(&self, from: Square, to: Square) -> Option<Move> {
        longest_between(self.legal_moves(), from, to)
    }

    /// Applies the provided [`Move`]. If it is not legal in the current
    /// position, returns an `Err` explaining why and changes nothing.
    ///
    /// On success this performs, in order: resolve the identities of the
    /// captured pieces, apply the move to the board (including any crowning),
    /// credit the captures to the moving side's list, and pass the turn to
    /// the opponent.
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        if !self.legal_moves().contains(&mv) {
            bail!("Illegal move {mv} for {}", self.side_to_move);
        }

        // Record the mover and the captured occupants before the board
        // changes; afterwards neither could be reconstructed reliably.
        let mover = self.side_to_move;
        let captured = mv
            .captures()
            .iter()
            .map(|&square| {
                self.board
                    .piece_at(square)
                    .ok_or_else(|| anyhow!("No piece to capture on {square}"))
            })
            .collect::<Result<Vec<Piece>>>()?;

        self.board.apply_move(&mv);

        match mover {
            // Black's moves remove White pieces, and vice versa
            Color::Black => self.captured_white.extend(captured),
            Color::White => self.captured_black.extend(captured),
        }

        self.side_to_move = mover.opponent();
        Ok(())
    }

    /// Copies `self` and returns a [`Game`] after having applied the provided
    /// [`Move`], failing if the move is illegal.
    #[inline(always)]
    pub fn with_move_made(&self, mv: Move) -> Result<Self> {
        let mut copied = self.clone();
        copied.make_move(mv)?;
        Ok(copied)
    }

    /// Resets this session to a fresh game: the standard starting layout,
    /// Black to move, and both capture lists emptied.
    ///
    /// The old board is discarded wholesale, never partially reset.
    pub fn restart(&mut self) {
        self.board = Board::default();
        self.side_to_move = Color::Black;
        self.captured_white.clear();
        self.captured_black.clear();
    }

    /// The White pieces captured by Black so far, in capture order.
    #[inline(always)]
    pub fn captured_white_pieces(&self) -> &[Piece] {
        &self.captured_white
    }

    /// The Black pieces captured by White so far, in capture order.
    #[inline(always)]
    pub fn captured_black_pieces(&self) -> &[Piece] {
        &self.captured_black
    }

    /// The pieces `color` has captured so far, in capture order.
    #[inline(always)]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::Black => &self.captured_white,
            Color::White => &self.captured_black,
        }
    }
}

/// Selects the move with the most captures among those in `moves` running
/// from `from` to `to`; equal lengths resolve to the lexicographically
/// smallest capture sequence.
fn longest_between(
    moves: impl IntoIterator<Item = Move>,
    from: Square,
    to: Square,
) -> Option<Move> {
    moves
        .into_iter()
        .filter(|mv| mv.from() == from && mv.to() == to)
        .max_by(|a, b| {
            (a.captures().len().cmp(&b.captures().len()))
                .then_with(|| b.captures().cmp(a.captures()))
        })
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Game {
    /// Display this game's FEN string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\nFEN: {}\nSide to move: {}\nCaptured by Black: {}\nCaptured by White: {}",
            self.board,
            self.to_fen(),
            self.side_to_move,
            self.captured_white.len(),
            self.captured_black.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CapturePath;

    fn pdn(number: u8) -> Square {
        Square::from_pdn(number).unwrap()
    }

    fn capture(from: u8, to: u8, taken: &[u8]) -> Move {
        let mut path = CapturePath::new();
        for &n in taken {
            path.push(pdn(n));
        }
        Move::new_capture(pdn(from), pdn(to), path)
    }

    #[test]
    fn test_fresh_game_state() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(*game.board(), Board::default());
        assert!(game.captured_white_pieces().is_empty());
        assert!(game.captured_black_pieces().is_empty());
    }

    #[test]
    fn test_making_a_move_passes_the_turn() {
        let mut game = Game::new();
        let mv = game.legal_moves()[0].clone();
        let expected_captures = mv.captures().len();

        game.make_move(mv).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.captured_white_pieces().len() + game.captured_black_pieces().len(),
            expected_captures
        );

        // And back again: two moves return the turn to Black
        let reply = game.legal_moves()[0].clone();
        game.make_move(reply).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_captures_are_credited_to_the_mover() {
        let mut game = Game::from_fen("B:W18:B15").unwrap();

        game.make_move(capture(15, 22, &[18])).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.captured_white_pieces(), &[Piece::man(Color::White)]);
        assert!(game.captured_black_pieces().is_empty());
        assert_eq!(game.captured_by(Color::Black).len(), 1);

        // The captured man is gone from the board for good
        assert!(!game.board().has(pdn(18)));
    }

    #[test]
    fn test_multi_capture_bookkeeping() {
        // One move, two captures: both appear on Black's tally at once
        let mut game = Game::from_fen("B:W18,25:B15").unwrap();
        game.make_move(capture(15, 29, &[18, 25])).unwrap();

        assert_eq!(game.captured_white_pieces().len(), 2);
        assert!(game.captured_black_pieces().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_illegal_moves_are_rejected() {
        let mut game = Game::new();
        let before = game.clone();

        // Structurally fine, but 1-5 is blocked at the start
        let mv = Move::new(pdn(1), pdn(5));
        assert!(game.make_move(mv).is_err());

        // A fabricated capture is rejected too
        assert!(game.make_move(capture(15, 22, &[18])).is_err());

        // Nothing changed: board, turn, and capture lists are untouched
        assert_eq!(game, before);
    }

    #[test]
    fn test_legal_moves_is_idempotent() {
        let game = Game::from_fen("B:W9,10,17,18,26:BK13").unwrap();
        assert_eq!(game.legal_moves(), game.legal_moves());
    }

    #[test]
    fn test_restart_resets_the_whole_session() {
        let mut game = Game::from_fen("B:W18:B15").unwrap();
        game.make_move(capture(15, 22, &[18])).unwrap();
        assert!(!game.captured_white_pieces().is_empty());
        assert_eq!(game.side_to_move(), Color::White);

        // Restart is a full reset: board, turn, and capture history
        game.restart();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_longest_move_prefers_more_captures() {
        let mut moves = MoveList::new();
        moves.push(capture(13, 31, &[17]));
        moves.push(capture(13, 31, &[9, 10, 18]));
        moves.push(capture(13, 13, &[9, 10, 18, 17]));

        let mv = longest_between(moves, pdn(13), pdn(31)).unwrap();
        assert_eq!(mv.captures().len(), 3);
    }

    #[test]
    fn test_longest_move_breaks_length_ties_deterministically() {
        // Same endpoints and length: the smaller capture sequence (in
        // square-index order) wins, regardless of the order the moves were
        // generated in. Square 17 sits on a lower rank than square 9, so its
        // index is the smaller one.
        let winner = capture(13, 31, &[17, 18, 10, 26]);
        let loser = capture(13, 31, &[9, 10, 18, 26]);

        let mut forward = MoveList::new();
        forward.push(winner.clone());
        forward.push(loser.clone());
        let mut backward = MoveList::new();
        backward.push(loser);
        backward.push(winner.clone());

        assert_eq!(
            longest_between(forward, pdn(13), pdn(31)),
            Some(winner.clone())
        );
        assert_eq!(longest_between(backward, pdn(13), pdn(31)), Some(winner));
    }

    #[test]
    fn test_longest_move_with_no_match_is_none() {
        let game = Game::new();
        assert!(game.longest_move(pdn(1), pdn(5)).is_none());
    }

    #[test]
    fn test_longest_move_on_an_ambiguous_position() {
        // Black king on 13: chains of 2 and 4 captures both end on 31
        let game = Game::from_fen("B:W9,10,17,18,26:BK13").unwrap();
        let mv = game.longest_move(pdn(13), pdn(31)).unwrap();
        assert_eq!(mv.captures().len(), 4);
        assert_eq!(
            mv.captures(),
            &[pdn(9), pdn(10), pdn(18), pdn(26)]
        );
    }

    #[test]
    fn test_fen_round_trip_mid_game() {
        let mut game = Game::new();
        let mv = Move::from_pdn(&game, "11-15").unwrap();
        game.make_move(mv).unwrap();

        let fen = game.to_fen();
        assert!(fen.starts_with("W:"));
        let restored = Game::from_fen(&fen).unwrap();
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.side_to_move(), game.side_to_move());
    }
}
