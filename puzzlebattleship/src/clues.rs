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

//! Externally supplied constraints a solution has to satisfy.

use crate::board::{CellKind, Position};

/// A revealed cell: the grid must show `kind` at `pos`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCell {
    pub pos: Position,
    pub kind: CellKind,
}

impl FixedCell {
    pub const fn new(pos: Position, kind: CellKind) -> Self {
        Self { pos, kind }
    }
}

/// Row and column ship-cell counts plus any revealed cells.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clues {
    /// Required number of ship cells in each row, top to bottom.
    rows: Vec<usize>,
    /// Required number of ship cells in each column, left to right.
    cols: Vec<usize>,
    /// Revealed cells.
    fixed: Vec<FixedCell>,
}

impl Clues {
    /// Construct clues with the given row and column counts and no revealed cells.
    pub fn new(rows: Vec<usize>, cols: Vec<usize>) -> Self {
        Self {
            rows,
            cols,
            fixed: Vec::new(),
        }
    }

    /// Add revealed cells, consuming and returning `self`.
    pub fn with_fixed<I: IntoIterator<Item = FixedCell>>(mut self, fixed: I) -> Self {
        self.fixed.extend(fixed);
        self
    }

    /// Add a single revealed cell.
    pub fn add_fixed(&mut self, pos: Position, kind: CellKind) {
        self.fixed.push(FixedCell::new(pos, kind));
    }

    /// Required ship-cell counts per row.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Required ship-cell counts per column.
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Revealed cells, in the order they were added.
    pub fn fixed(&self) -> &[FixedCell] {
        &self.fixed
    }
}
