/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

use crate::Color;

/// A vertical column of the board (`a` through `h`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct File(u8);

impl File {
    /// Number of files on the board.
    pub const COUNT: usize = 8;

    /// Creates a new [`File`] without checking that `file` is in bounds.
    #[inline(always)]
    pub const fn new_unchecked(file: u8) -> Self {
        Self(file)
    }

    /// Creates a new [`File`], failing if `file` is out of bounds.
    pub fn new(file: u8) -> Result<Self> {
        if file as usize >= Self::COUNT {
            bail!("Invalid file index: must be in 0..8, got {file}");
        }
        Ok(Self(file))
    }

    /// Returns this file's index (0 for `a`, 7 for `h`).
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The char of this file (`a` through `h`).
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'a' + self.0) as char
    }

    /// Yields all files, `a` first.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A horizontal row of the board (`1` through `8`).
///
/// Rank `1` is White's back rank; rank `8` is Black's.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Number of ranks on the board.
    pub const COUNT: usize = 8;

    pub const FIRST: Self = Self(0);
    pub const EIGHTH: Self = Self(7);

    /// Creates a new [`Rank`] without checking that `rank` is in bounds.
    #[inline(always)]
    pub const fn new_unchecked(rank: u8) -> Self {
        Self(rank)
    }

    /// Creates a new [`Rank`], failing if `rank` is out of bounds.
    pub fn new(rank: u8) -> Result<Self> {
        if rank as usize >= Self::COUNT {
            bail!("Invalid rank index: must be in 0..8, got {rank}");
        }
        Ok(Self(rank))
    }

    /// Returns this rank's index (0 for rank `1`, 7 for rank `8`).
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The rank on which `color`'s men are crowned: the rank furthest from
    /// that color's side of the board.
    ///
    /// # Example
    /// ```
    /// # use draughts_types::{Color, Rank};
    /// assert_eq!(Rank::crowning(Color::White), Rank::EIGHTH);
    /// assert_eq!(Rank::crowning(Color::Black), Rank::FIRST);
    /// ```
    #[inline(always)]
    pub const fn crowning(color: Color) -> Self {
        match color {
            Color::Black => Self::FIRST,
            Color::White => Self::EIGHTH,
        }
    }

    /// The char of this rank (`1` through `8`).
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'1' + self.0) as char
    }

    /// Yields all ranks, rank `1` first.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A single square of the 8x8 board.
///
/// Only the 32 dark squares are playable in draughts; those squares carry the
/// standard 1-32 numbering used by game notation (see [`Square::pdn`]).
/// Square `a1` is dark, so a square is dark when its file and rank indices
/// have the same parity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Number of playable (dark) squares.
    pub const PLAYABLE_COUNT: usize = 32;

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(rank.0 * 8 + file.0)
    }

    /// Creates a new [`Square`] from an index in `0..64`, failing if out of bounds.
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= Self::COUNT {
            bail!("Invalid square index: must be in 0..64, got {index}");
        }
        Ok(Self(index as u8))
    }

    /// Returns this square's index, in `0..64`.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Fetches the [`File`] of this square.
    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 % 8)
    }

    /// Fetches the [`Rank`] of this square.
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 / 8)
    }

    /// Returns `true` if this square is dark, i.e. playable in draughts.
    ///
    /// # Example
    /// ```
    /// # use draughts_types::Square;
    /// assert!(Square::from_pdn(1).unwrap().is_dark());
    /// ```
    #[inline(always)]
    pub const fn is_dark(&self) -> bool {
        (self.0 / 8 + self.0 % 8) % 2 == 0
    }

    /// The standard 1-32 number of this square.
    ///
    /// Numbering runs left to right across the dark squares, from Black's
    /// back rank (rank 8) down to White's (rank 1). Only meaningful for dark
    /// squares.
    ///
    /// # Example
    /// ```
    /// # use draughts_types::Square;
    /// let sq = Square::from_pdn(21).unwrap();
    /// assert_eq!(sq.to_string(), "a3");
    /// assert_eq!(sq.pdn(), 21);
    /// ```
    #[inline(always)]
    pub const fn pdn(&self) -> u8 {
        debug_assert!(self.is_dark());
        (7 - self.0 / 8) * 4 + (self.0 % 8) / 2 + 1
    }

    /// Creates a [`Square`] from its standard 1-32 number.
    pub fn from_pdn(number: u8) -> Result<Self> {
        if !(1..=Self::PLAYABLE_COUNT as u8).contains(&number) {
            bail!("Invalid square number: must be in 1..=32, got {number}");
        }
        let n = number - 1;
        let rank = 7 - n / 4;
        let file = (n % 4) * 2 + (rank & 1);
        Ok(Self(rank * 8 + file))
    }

    /// Steps diagonally by the provided file and rank deltas, returning
    /// `None` if that leaves the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let file = self.0 as i8 % 8 + df;
        let rank = self.0 as i8 / 8 + dr;
        ((0..8).contains(&file) && (0..8).contains(&rank))
            .then(|| Self((rank * 8 + file) as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdn_numbering_round_trips() {
        for number in 1..=32 {
            let square = Square::from_pdn(number).unwrap();
            assert!(square.is_dark());
            assert_eq!(square.pdn(), number);
        }
        assert!(Square::from_pdn(0).is_err());
        assert!(Square::from_pdn(33).is_err());
    }

    #[test]
    fn test_pdn_corners() {
        // 1 is the leftmost dark square of Black's back rank; 29-32 lie on
        // White's back rank.
        assert_eq!(Square::from_pdn(1).unwrap().to_string(), "b8");
        assert_eq!(Square::from_pdn(4).unwrap().to_string(), "h8");
        assert_eq!(Square::from_pdn(29).unwrap().to_string(), "a1");
        assert_eq!(Square::from_pdn(32).unwrap().to_string(), "g1");
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1 = Square::new(File::new_unchecked(0), Rank::FIRST);
        assert_eq!(a1.offset(1, 1).unwrap().to_string(), "b2");
        assert!(a1.offset(-1, 1).is_none());
        assert!(a1.offset(1, -1).is_none());
    }

    #[test]
    fn test_exactly_half_the_board_is_dark() {
        let dark = (0..Square::COUNT)
            .filter(|&i| Square::from_index(i).unwrap().is_dark())
            .count();
        assert_eq!(dark, Square::PLAYABLE_COUNT);
    }
}
