/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{anyhow, bail, Result};

use super::{Color, File, Move, Piece, Rank, Square, FEN_STARTPOS};

/// Represents all pieces and their locations on a draughts board.
///
/// Has no knowledge of whose turn it is or what has been captured so far.
/// If you need those, see [`Game`](crate::Game).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// The occupant of every square, indexed by [`Square::index`].
    mailbox: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use draughts::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_fen(), "W:B");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
        }
    }

    /// Constructs a [`Board`] from the provided FEN string, ignoring the
    /// side-to-move field if one is present.
    ///
    /// The piece sections list each color's squares in the standard 1-32
    /// numbering, kings prefixed with `K`:
    /// `"B:W21,22,K30:B1,K2"`.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Self::new();

        let sections: Vec<&str> = fen.trim().split(':').collect();
        let placements = match sections.len() {
            // Full FEN: the leading field is the side to move
            3 => &sections[1..],
            2 => &sections[..],
            n => bail!("Invalid FEN string: expected 2 piece sections, got {n} fields"),
        };

        for section in placements {
            board.place_section(section)?;
        }

        Ok(board)
    }

    /// Parses one per-color section of a FEN string (`"W21,22,K30"`) and
    /// places its pieces.
    fn place_section(&mut self, section: &str) -> Result<()> {
        let mut chars = section.chars();
        let color = Color::from_char(
            chars
                .next()
                .ok_or_else(|| anyhow!("Invalid FEN string: empty piece section"))?,
        )?;

        // A bare color char means that side has no pieces.
        let entries = chars.as_str();
        if entries.is_empty() {
            return Ok(());
        }

        for entry in entries.split(',') {
            let (king, number) = match entry.strip_prefix(['K', 'k']) {
                Some(rest) => (true, rest),
                None => (false, entry),
            };
            let number: u8 = number
                .parse()
                .map_err(|_| anyhow!("Invalid FEN string: bad square entry {entry:?}"))?;
            let square = Square::from_pdn(number)?;

            if self.has(square) {
                bail!("Invalid FEN string: square {number} is occupied twice");
            }

            let piece = if king {
                Piece::king(color)
            } else {
                Piece::man(color)
            };
            self.place(piece, square);
        }

        Ok(())
    }

    /// Generates the piece sections of a FEN string for this board, White first.
    ///
    /// # Example
    /// ```
    /// # use draughts::Board;
    /// let board = Board::default();
    /// assert_eq!(
    ///     board.to_fen(),
    ///     "W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12"
    /// );
    /// ```
    pub fn to_fen(&self) -> String {
        let section = |color: Color| {
            let mut entries = Vec::new();
            for number in 1..=Square::PLAYABLE_COUNT as u8 {
                // Safe unwrap: 1-32 are always valid square numbers
                let square = Square::from_pdn(number).unwrap();
                if let Some(piece) = self.piece_at(square) {
                    if piece.color() == color {
                        if piece.is_king() {
                            entries.push(format!("K{number}"));
                        } else {
                            entries.push(number.to_string());
                        }
                    }
                }
            }
            format!("{}{}", color.char(), entries.join(","))
        };

        format!("{}:{}", section(Color::White), section(Color::Black))
    }

    /// Returns `true` if there is a piece at the given [`Square`], else `false`.
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    /// Places the provided [`Piece`] at the supplied [`Square`].
    ///
    /// If another piece occupies this square, this does *not* remove that piece.
    /// Use [`Board::take`] first.
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.mailbox[square.index()] = Some(piece);
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Color, Piece, Square};
    /// let mut board = Board::default();
    /// let square = Square::from_pdn(1).unwrap();
    /// assert_eq!(board.take(square), Some(Piece::man(Color::Black)));
    /// assert_eq!(board.take(square), None);
    /// ```
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()].take()
    }

    /// Clears the supplied [`Square`] of any pieces.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.take(square);
    }

    /// Fetches the [`Piece`] at the provided [`Square`], if there is one.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Fetches the [`Color`] of the piece at the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.mailbox[square.index()].map(|piece| piece.color())
    }

    /// Counts the pieces of the provided [`Color`] on this board.
    #[inline(always)]
    pub fn population(&self, color: Color) -> usize {
        self.iter().filter(|(_, piece)| piece.color() == color).count()
    }

    /// Applies the provided [`Move`]: transfers the moving piece, removes the
    /// captured occupants, and crowns the piece if it ends on its crowning
    /// rank. No enforcement of legality.
    pub fn apply_move(&mut self, mv: &Move) {
        // Remove the piece from its previous location, exiting early if there is no piece there
        let Some(mut piece) = self.take(mv.from()) else {
            return;
        };

        for &capture in mv.captures() {
            self.clear(capture);
        }

        if !piece.is_king() && mv.to().rank() == Rank::crowning(piece.color()) {
            piece = piece.promoted();
        }

        self.place(piece, mv.to());
    }

    /// Creates a [`BoardIter`] to iterate over all occupied [`Square`]s in
    /// this [`Board`], in square-index order.
    #[inline(always)]
    pub const fn iter(&self) -> BoardIter<'_> {
        BoardIter {
            board: self,
            square: 0,
        }
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the FEN for startpos is always valid
        Self::from_fen(FEN_STARTPOS).unwrap()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.mailbox[index.index()]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.mailbox[index.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}| ")?;

            for file in File::iter() {
                let square = Square::new(file, rank);
                match self.piece_at(square) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for file in File::iter() {
            write!(f, "{file} ")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}\n\nFEN: {}", self.to_fen())
    }
}

/// An iterator over the occupied squares of a [`Board`].
///
/// Calls to [`Iterator::next`] will yield a tuple of a [`Square`] and a [`Piece`].
pub struct BoardIter<'a> {
    /// The board to retrieve pieces from.
    board: &'a Board,

    /// Next square index to examine.
    square: usize,
}

impl<'a> Iterator for BoardIter<'a> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<Self::Item> {
        while self.square < Square::COUNT {
            let index = self.square;
            self.square += 1;

            if let Some(piece) = self.board.mailbox[index] {
                // Safe unwrap: index is always in 0..64 here
                return Some((Square::from_index(index).unwrap(), piece));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Board {
    type IntoIter = BoardIter<'a>;
    type Item = <BoardIter<'a> as Iterator>::Item;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
