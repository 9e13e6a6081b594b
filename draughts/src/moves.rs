/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{anyhow, bail, Result};

use super::{Game, Square, MAX_CAPTURES};

/// The ordered squares whose occupants a single [`Move`] captures.
///
/// Empty for a simple slide; one entry per jumped piece for a jump chain.
pub type CapturePath = arrayvec::ArrayVec<Square, MAX_CAPTURES>;

/// Represents a move of a single piece: a diagonal slide, a single jump, or a
/// complete multi-jump chain.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    /// The square the moving piece starts on.
    from: Square,

    /// The square the moving piece ends on, once the whole chain is complete.
    to: Square,

    /// Squares of the pieces captured along the way, in jump order.
    captures: CapturePath,
}

impl Move {
    /// Creates a new non-capturing [`Move`] from `from` to `to`.
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captures: CapturePath::new_const(),
        }
    }

    /// Creates a new capturing [`Move`] whose jumps take the pieces on `captures`.
    #[inline(always)]
    pub const fn new_capture(from: Square, to: Square, captures: CapturePath) -> Self {
        Self { from, to, captures }
    }

    /// The square this move starts on.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// The square this move ends on.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The squares whose occupants this move captures, in jump order.
    ///
    /// An empty slice means a simple slide.
    #[inline(always)]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    /// Returns `true` if this move captures at least one piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Resolves a move in game notation (`"11-15"` for a slide, `"11x18"` for
    /// a jump) against the legal moves of the provided [`Game`].
    ///
    /// Only the endpoints are read: for a jump with ambiguous endpoints the
    /// maximal-capture chain is chosen, which is what the rules mandate.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Game, Move};
    /// let game = Game::default();
    /// let mv = Move::from_pdn(&game, "11-15").unwrap();
    /// assert!(!mv.is_capture());
    /// assert!(Move::from_pdn(&game, "11x18").is_err());
    /// ```
    pub fn from_pdn(game: &Game, pdn: &str) -> Result<Self> {
        let capture = pdn.contains(['x', 'X']);
        let mut fields = pdn.split(['x', 'X', '-']);

        let from = Self::parse_square(fields.next(), pdn)?;
        // Long notation like "11x18x25" spells out the waypoints; the
        // endpoints are all we match on.
        let to = Self::parse_square(fields.last(), pdn)?;

        if capture {
            game.longest_move(from, to)
                .ok_or_else(|| anyhow!("No legal jump matches {pdn:?}"))
        } else {
            game.legal_moves()
                .into_iter()
                .find(|mv| mv.from() == from && mv.to() == to && !mv.is_capture())
                .ok_or_else(|| anyhow!("No legal move matches {pdn:?}"))
        }
    }

    fn parse_square(field: Option<&str>, pdn: &str) -> Result<Square> {
        let Some(field) = field else {
            bail!("Invalid move {pdn:?}: expected <from>-<to> or <from>x<to>");
        };
        let number = field
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid square number {field:?} in move {pdn:?}"))?;
        Square::from_pdn(number)
    }
}

impl fmt::Display for Move {
    /// Formats this move in game notation: endpoints joined by `x` for a
    /// capture, `-` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from.pdn(), self.to.pdn())
    }
}
