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

use std::fmt;

/// Zero-based `(row, col)` position of a cell.
///
/// Signed so that ships can be anchored partly or fully off the grid; such positions are
/// only rejected during validation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Vertical position of the cell, counted downward from the top row.
    pub row: isize,
    /// Horizontal position of the cell, counted rightward from the left column.
    pub col: isize,
}

impl Position {
    /// Construct a [`Position`] from the given `row` and `col`.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Shift this position by the given deltas. Returns `None` on overflow.
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(drow)?,
            col: self.col.checked_add(dcol)?,
        })
    }
}

impl From<(isize, isize)> for Position {
    /// Construct a [`Position`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (isize, isize) {
    /// Convert the [`Position`] into a `(row, col)` pair.
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
