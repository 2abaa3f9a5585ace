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

//! Types used for defining ships and the cells they claim.

use crate::board::{CellKind, Position};

pub use self::{errors::ShipError, linear::Line, submarine::Submarine};

mod errors;
mod linear;
mod submarine;

/// Axis along which a multi-cell ship extends from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightward, increasing `col`.
    Horizontal,
    /// Extends downward, increasing `row`.
    Vertical,
}

impl Orientation {
    /// Kind of the first and last cell of a ship with this orientation.
    pub fn end_kinds(self) -> (CellKind, CellKind) {
        match self {
            Orientation::Horizontal => (CellKind::LeftEnd, CellKind::RightEnd),
            Orientation::Vertical => (CellKind::TopEnd, CellKind::BottomEnd),
        }
    }

    /// Position `steps` cells from `anchor` along this orientation.
    fn advance(self, anchor: Position, steps: isize) -> Position {
        match self {
            Orientation::Horizontal => Position::new(anchor.row, anchor.col.saturating_add(steps)),
            Orientation::Vertical => Position::new(anchor.row.saturating_add(steps), anchor.col),
        }
    }
}

/// A position together with the kind a ship declares should be painted there.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipCell {
    pub pos: Position,
    pub kind: CellKind,
}

impl ShipCell {
    pub const fn new(pos: Position, kind: CellKind) -> Self {
        Self { pos, kind }
    }
}

/// Anything that claims an ordered run of cells on the grid.
///
/// The declared cells are contiguous along one axis (or a single cell) and their kinds
/// are consistent with that shape. Implementors guarantee this by construction; the
/// validators never re-check it.
pub trait Target {
    /// Position the target was anchored at.
    fn anchor(&self) -> Position;

    /// Cells this target claims, in order from the anchor.
    fn cells(&self) -> &[ShipCell];
}

/// Build the cells a ship of the given length claims, starting at `anchor`.
///
/// A length of 1 always yields a single [`CellKind::Submarine`] cell, whatever the
/// orientation. Longer ships get an end kind, `len - 2` [`CellKind::Middle`] cells and the
/// opposite end kind. No bounds checking is done. Panics if `len` is 0.
pub fn build_cells(anchor: Position, len: usize, orientation: Orientation) -> Vec<ShipCell> {
    assert!(len > 0, "ship length must be nonzero");
    if len == 1 {
        return vec![ShipCell::new(anchor, CellKind::Submarine)];
    }
    let (first, last) = orientation.end_kinds();
    (0..len)
        .map(|i| {
            let kind = match i {
                0 => first,
                i if i == len - 1 => last,
                _ => CellKind::Middle,
            };
            // Lengths beyond isize::MAX can't be allocated anyway.
            ShipCell::new(orientation.advance(anchor, i as isize), kind)
        })
        .collect()
}

/// One entry of a fleet: either a multi-cell ship or a submarine.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    Ship(Line),
    Submarine(Submarine),
}

impl Placement {
    /// Place a ship of the given length. A length of 1 yields a [`Placement::Submarine`]
    /// and ignores `orientation`. Panics if `len` is 0.
    pub fn ship(anchor: Position, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        if len == 1 {
            Placement::Submarine(Submarine::new(anchor))
        } else {
            Placement::Ship(Line::new(anchor, len, orientation))
        }
    }

    /// Place a submarine.
    pub fn submarine(anchor: Position) -> Self {
        Placement::Submarine(Submarine::new(anchor))
    }

    /// Number of cells this placement claims.
    pub fn len(&self) -> usize {
        self.cells().len()
    }
}

impl Target for Placement {
    fn anchor(&self) -> Position {
        match self {
            Placement::Ship(line) => line.anchor(),
            Placement::Submarine(sub) => sub.anchor(),
        }
    }

    fn cells(&self) -> &[ShipCell] {
        match self {
            Placement::Ship(line) => line.cells(),
            Placement::Submarine(sub) => sub.cells(),
        }
    }
}

impl From<Line> for Placement {
    fn from(line: Line) -> Self {
        Placement::Ship(line)
    }
}

impl From<Submarine> for Placement {
    fn from(sub: Submarine) -> Self {
        Placement::Submarine(sub)
    }
}
