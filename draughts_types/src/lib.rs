/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

/// Enums and structs for piece colors and the pieces themselves.
mod piece;
/// Squares on a draughts board (including files and ranks).
mod square;
/// Misc shared constants.
mod utils;

pub use piece::*;
pub use square::*;
pub use utils::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::piece::*;
    pub use crate::square::*;
    pub use crate::utils::*;
}
