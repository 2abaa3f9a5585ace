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

//! The rendered grid that every check reads from.

use std::{fmt, ops::Index};

use log::debug;

use crate::{
    board::{CellKind, Position, RectDimensions},
    ships::Target,
};

/// Cell kinds painted from a fleet. Immutable once built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: RectDimensions,
    /// Row-major cells that make up this grid.
    cells: Box<[CellKind]>,
}

impl Grid {
    /// Construct an all-water grid.
    pub fn new(dim: RectDimensions) -> Self {
        let cells = vec![CellKind::Water; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Paint every target's declared cells onto an all-water grid, in iteration order.
    ///
    /// When two targets claim the same position, the later one wins. That overwrite is
    /// what lets the integrity check catch the earlier target afterwards. Declared cells
    /// outside the grid are skipped here and left for the bounds check.
    pub fn paint<'a, I, T>(dim: RectDimensions, fleet: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a + Target + ?Sized,
    {
        let mut grid = Self::new(dim);
        let mut targets = 0;
        let mut skipped = 0;
        for target in fleet {
            targets += 1;
            for cell in target.cells() {
                match dim.try_linearize(cell.pos) {
                    Some(idx) => grid.cells[idx] = cell.kind,
                    None => skipped += 1,
                }
            }
        }
        debug!(
            "painted {} targets onto {}x{} grid ({} cells off-grid)",
            targets,
            dim.rows(),
            dim.cols(),
            skipped
        );
        grid
    }

    /// Get the [`RectDimensions`] of this [`Grid`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// Get the kind painted at the given [`Position`]. Returns `None` if the position is
    /// out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.dim
            .try_linearize(pos)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Get the cells of a single row. Returns `None` if the row is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[CellKind]> {
        if row < self.dim.rows() {
            let start = row * self.dim.cols();
            Some(&self.cells[start..start + self.dim.cols()])
        } else {
            None
        }
    }

    /// Get an iterator over the rows of this grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.dim.cols())
    }

    /// Number of ship-material cells in the given row. Out-of-bounds rows have none.
    pub fn row_count(&self, row: usize) -> usize {
        self.row(row)
            .map_or(0, |cells| cells.iter().filter(|kind| kind.is_ship()).count())
    }

    /// Number of ship-material cells in the given column. Out-of-bounds columns have
    /// none.
    pub fn column_count(&self, col: usize) -> usize {
        if col >= self.dim.cols() {
            return 0;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(self.dim.cols())
            .filter(|kind| kind.is_ship())
            .count()
    }
}

impl Index<Position> for Grid {
    type Output = CellKind;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.dim.try_linearize(pos) {
            Some(idx) => &self.cells[idx],
            None => panic!("{} is out of bounds for {:?}", pos, self.dim),
        }
    }
}

impl fmt::Display for Grid {
    /// Renders one line per row, one glyph per cell.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for kind in row {
                write!(f, "{}", kind.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
