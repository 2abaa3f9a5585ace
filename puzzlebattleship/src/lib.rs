// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Checker for proposed solutions to Battleship solitaire puzzles.
//!
//! A solution is a fleet of ship placements on a rectangular grid, together with the
//! puzzle's clues: the number of ship cells in every row and column and a handful of
//! revealed cells. The fleet is painted onto a [`Grid`][board::Grid] once, and then
//! checked without mutation:
//!
//! - [`validate::ship`] checks a single target for bounds, integrity (not overwritten by
//!   a later ship) and spacing (no foreign ship material in its 8-neighbourhood).
//! - [`validate::fleet`] runs the ship checks over every target and collects offenders.
//! - [`validate::aggregate`] compares row/column totals and revealed cells to the clues.
//!
//! [`Puzzle`] bundles all of it and produces a [`Verdict`].
//!
//! ```
//! use puzzlebattleship::{
//!     board::{Position, RectDimensions},
//!     ships::Placement,
//!     Clues, Puzzle,
//! };
//!
//! let puzzle = Puzzle::new(
//!     RectDimensions::new(2, 2),
//!     vec![Placement::submarine(Position::new(0, 0))],
//!     Clues::new(vec![1, 0], vec![1, 0]),
//! );
//! assert!(puzzle.is_valid());
//! ```

pub use self::{
    clues::{Clues, FixedCell},
    puzzle::{Fleet, Puzzle, PuzzleError, Verdict},
};

pub mod board;
mod clues;
mod puzzle;
pub mod ships;
pub mod validate;
