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

//! Whole-grid checks against the row, column and revealed-cell clues.

use log::debug;

use crate::{
    board::Grid,
    clues::{Clues, FixedCell},
};

/// Rows and columns whose ship-cell totals disagree with the clues.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CountMismatches {
    /// Mismatched row indices, ascending.
    pub rows: Vec<usize>,
    /// Mismatched column indices, ascending.
    pub cols: Vec<usize>,
}

impl CountMismatches {
    /// Returns true if every row and column matched.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Returns true if every row and column total matches its clue. Stops at the first
/// mismatch. A row or column without a clue counts as a mismatch.
pub fn counts_match(grid: &Grid, clues: &Clues) -> bool {
    let dim = grid.dimensions();
    (0..dim.rows()).all(|row| clues.rows().get(row) == Some(&grid.row_count(row)))
        && (0..dim.cols()).all(|col| clues.cols().get(col) == Some(&grid.column_count(col)))
}

/// Check every row and column total against its clue and report all mismatches.
pub fn count_mismatches(grid: &Grid, clues: &Clues) -> CountMismatches {
    let dim = grid.dimensions();
    let rows = (0..dim.rows())
        .filter(|&row| {
            let actual = grid.row_count(row);
            let expected = clues.rows().get(row);
            if expected == Some(&actual) {
                false
            } else {
                debug!("row {} has {} ship cells, clue is {:?}", row, actual, expected);
                true
            }
        })
        .collect();
    let cols = (0..dim.cols())
        .filter(|&col| {
            let actual = grid.column_count(col);
            let expected = clues.cols().get(col);
            if expected == Some(&actual) {
                false
            } else {
                debug!("column {} has {} ship cells, clue is {:?}", col, actual, expected);
                true
            }
        })
        .collect();
    CountMismatches { rows, cols }
}

/// Returns true if the grid shows the required kind at every revealed cell.
pub fn clues_match(grid: &Grid, clues: &Clues) -> bool {
    clues.fixed().iter().all(|fixed| fixed_matches(grid, fixed))
}

/// Every revealed cell the grid disagrees with, in clue order. A revealed cell off the
/// grid never matches.
pub fn clue_mismatches<'a>(grid: &Grid, clues: &'a Clues) -> Vec<&'a FixedCell> {
    clues
        .fixed()
        .iter()
        .filter(|fixed| {
            let matched = fixed_matches(grid, fixed);
            if !matched {
                debug!(
                    "revealed cell {} requires {:?}, grid has {:?}",
                    fixed.pos,
                    fixed.kind,
                    grid.get(fixed.pos)
                );
            }
            !matched
        })
        .collect()
}

fn fixed_matches(grid: &Grid, fixed: &FixedCell) -> bool {
    grid.get(fixed.pos) == Some(fixed.kind)
}
