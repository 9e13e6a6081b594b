/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

/// The color of a player (and of that player's pieces).
///
/// Black moves first in a new game.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 2;

    /// Returns the opposite of this color.
    ///
    /// Applying this twice always yields the original color.
    ///
    /// # Example
    /// ```
    /// # use draughts_types::Color;
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Returns this color's index into lists of 2 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The rank direction this color's men move in: White advances up the
    /// board, Black advances down it.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::Black => -1,
            Self::White => 1,
        }
    }

    /// Returns `true` if this color is Black.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self, Self::Black)
    }

    /// Returns `true` if this color is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// Creates a [`Color`] from a FEN char (`B`/`W`, either case).
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'B' | 'b' => Ok(Self::Black),
            'W' | 'w' => Ok(Self::White),
            _ => bail!("Invalid color char: expected B or W, got {c:?}"),
        }
    }

    /// The FEN char of this color.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Black => 'B',
            Self::White => 'W',
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            bail!("Invalid color string: expected one char, got {s:?}");
        };
        Self::from_char(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A draughts piece: a man or a king of a given [`Color`].
///
/// There is no representation for an empty square here; boards store
/// `Option<Piece>`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates a new man of the provided color.
    #[inline(always)]
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    /// Creates a new king of the provided color.
    #[inline(always)]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    /// Fetches the [`Color`] of this piece.
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if this piece has been crowned.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        self.king
    }

    /// Returns a crowned copy of this piece.
    ///
    /// # Example
    /// ```
    /// # use draughts_types::{Color, Piece};
    /// let man = Piece::man(Color::Black);
    /// assert!(!man.is_king());
    /// assert!(man.promoted().is_king());
    /// ```
    #[inline(always)]
    pub const fn promoted(self) -> Self {
        Self::king(self.color)
    }

    /// Creates a [`Piece`] from a FEN char: `b`/`w` for men, `B`/`W` for kings.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'b' => Ok(Self::man(Color::Black)),
            'w' => Ok(Self::man(Color::White)),
            'B' => Ok(Self::king(Color::Black)),
            'W' => Ok(Self::king(Color::White)),
            _ => bail!("Invalid piece char: expected b, w, B, or W, got {c:?}"),
        }
    }

    /// The FEN char of this piece: `b`/`w` for men, `B`/`W` for kings.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match (self.color, self.king) {
            (Color::Black, false) => 'b',
            (Color::White, false) => 'w',
            (Color::Black, true) => 'B',
            (Color::White, true) => 'W',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}
