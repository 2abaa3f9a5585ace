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

//! A proposed solution bundled with its clues, and the verdict on it.

use log::debug;

use crate::{
    board::{Grid, RectDimensions},
    clues::{Clues, FixedCell},
    ships::Placement,
    validate::{
        aggregate::{self, CountMismatches},
        fleet::{self, Offender},
    },
};

pub use self::errors::PuzzleError;

mod errors;

/// Ordered collection of placements under test.
pub type Fleet = Vec<Placement>;

/// A fleet rendered onto a grid, together with the clues it must satisfy.
///
/// The grid is painted once on construction; every check afterwards only reads it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Grid painted from `fleet`.
    grid: Grid,
    /// The placements under test.
    fleet: Fleet,
    /// Constraints the grid must satisfy.
    clues: Clues,
}

impl Puzzle {
    /// Paint the fleet onto a grid of the given dimensions. Panics if the number of row
    /// or column clues doesn't match the dimensions.
    pub fn new(dim: RectDimensions, fleet: Fleet, clues: Clues) -> Self {
        match Self::try_new(dim, fleet, clues) {
            Ok(puzzle) => puzzle,
            Err(err) => panic!("{}", err),
        }
    }

    /// Paint the fleet onto a grid of the given dimensions. Returns an error if the
    /// number of row or column clues doesn't match the dimensions.
    pub fn try_new(dim: RectDimensions, fleet: Fleet, clues: Clues) -> Result<Self, PuzzleError> {
        if clues.rows().len() != dim.rows() {
            return Err(PuzzleError::RowClues {
                expected: dim.rows(),
                actual: clues.rows().len(),
            });
        }
        if clues.cols().len() != dim.cols() {
            return Err(PuzzleError::ColumnClues {
                expected: dim.cols(),
                actual: clues.cols().len(),
            });
        }
        let grid = Grid::paint(dim, &fleet);
        Ok(Self { grid, fleet, clues })
    }

    /// Get the [`RectDimensions`] of this puzzle.
    pub fn dimensions(&self) -> &RectDimensions {
        self.grid.dimensions()
    }

    /// The grid painted from the fleet.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The placements under test.
    pub fn fleet(&self) -> &[Placement] {
        &self.fleet
    }

    /// The clues the grid is checked against.
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Placements that are out of bounds, overlapped or touching another ship.
    pub fn invalid_targets(&self) -> Vec<&Placement> {
        fleet::invalid_targets(&self.grid, &self.fleet)
    }

    /// Returns true if every row and column total matches its clue.
    pub fn counts_match(&self) -> bool {
        aggregate::counts_match(&self.grid, &self.clues)
    }

    /// Returns true if every revealed cell matches the grid.
    pub fn clues_match(&self) -> bool {
        aggregate::clues_match(&self.grid, &self.clues)
    }

    /// Returns true if no placement is invalid and all clues are satisfied.
    pub fn is_valid(&self) -> bool {
        self.invalid_targets().is_empty() && self.counts_match() && self.clues_match()
    }

    /// Run every check and collect all diagnostics.
    pub fn verdict(&self) -> Verdict<'_> {
        let verdict = Verdict {
            offenders: fleet::check_fleet(&self.grid, &self.fleet),
            counts: aggregate::count_mismatches(&self.grid, &self.clues),
            clues: aggregate::clue_mismatches(&self.grid, &self.clues),
        };
        debug!(
            "verdict: {} invalid targets, {} rows, {} columns and {} revealed cells mismatched",
            verdict.offenders.len(),
            verdict.counts.rows.len(),
            verdict.counts.cols.len(),
            verdict.clues.len()
        );
        verdict
    }
}

/// Everything wrong with a [`Puzzle`]'s solution. Empty when the solution is valid.
#[derive(Debug, Clone)]
pub struct Verdict<'a> {
    offenders: Vec<Offender<'a, Placement>>,
    counts: CountMismatches,
    clues: Vec<&'a FixedCell>,
}

impl<'a> Verdict<'a> {
    /// Returns true if nothing was reported.
    pub fn is_valid(&self) -> bool {
        self.offenders.is_empty() && self.counts.is_empty() && self.clues.is_empty()
    }

    /// Placements that failed a per-target check, in fleet order.
    pub fn offenders(&self) -> &[Offender<'a, Placement>] {
        &self.offenders
    }

    /// Rows whose ship-cell totals disagree with the clues.
    pub fn row_mismatches(&self) -> &[usize] {
        &self.counts.rows
    }

    /// Columns whose ship-cell totals disagree with the clues.
    pub fn column_mismatches(&self) -> &[usize] {
        &self.counts.cols
    }

    /// Revealed cells the grid disagrees with.
    pub fn clue_mismatches(&self) -> &[&'a FixedCell] {
        &self.clues
    }
}
