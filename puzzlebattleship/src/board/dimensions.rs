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

//! Rectangular grid dimensions: bounds checks, linearization and neighbours.

#[cfg(feature = "serde")]
use std::convert::TryFrom;

use crate::board::{DimensionsError, Position};

/// Offsets of the 8 cells surrounding a cell, in row-major order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDimensions")
)]
pub struct RectDimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Position`].
    rows: usize,
    /// Number of columns. This cooresponds to the `col` of a [`Position`].
    cols: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Panics if `rows * cols` exceeds `usize::MAX` or if `rows` or `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Returns an error if `rows * cols` exceeds `usize::MAX` or if `rows` or `cols` is 0.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, DimensionsError> {
        if rows == 0 || cols == 0 {
            Err(DimensionsError::Empty { rows, cols })
        } else {
            rows.checked_mul(cols)
                .map(|_| Self { rows, cols })
                .ok_or(DimensionsError::TooLarge { rows, cols })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells. Used to allocate storage for the grid.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the given [`Position`] lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, pos: Position) -> bool {
        self.check_bounds(pos).is_some()
    }

    /// Convert a position to a linear, row-major index.
    /// Returns `None` if the position is out of bounds.
    pub fn try_linearize(&self, pos: Position) -> Option<usize> {
        self.check_bounds(pos).map(|(row, col)| row * self.cols + col)
    }

    /// Iterate the in-bounds cells of the Moore neighbourhood of `pos`. Out-of-bounds
    /// positions have no neighbours.
    pub fn neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter {
            dim: *self,
            center: pos,
            // Skip directly to the end if the center is out of bounds so we don't
            // yield neighbours of a cell that isn't on the grid.
            next: if self.contains(pos) {
                0
            } else {
                MOORE_OFFSETS.len()
            },
        }
    }

    /// Check if the given [`Position`] is in bounds. If so, return it as unsigned
    /// `(row, col)`, otherwise return `None`.
    #[inline]
    fn check_bounds(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < self.rows && col < self.cols {
            Some((row, col))
        } else {
            None
        }
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, the classic 10x10 puzzle.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// Unchecked form of [`RectDimensions`] used when deserializing.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDimensions {
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimensions> for RectDimensions {
    type Error = DimensionsError;

    fn try_from(raw: RawDimensions) -> Result<Self, DimensionsError> {
        RectDimensions::try_new(raw.rows, raw.cols)
    }
}

/// Iterator over the in-bounds neighbours of a position.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    dim: RectDimensions,
    center: Position,
    next: usize,
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(&(drow, dcol)) = MOORE_OFFSETS.get(self.next) {
            self.next += 1;
            match self.center.offset(drow, dcol) {
                Some(pos) if self.dim.contains(pos) => return Some(pos),
                _ => {}
            }
        }
        None
    }
}
