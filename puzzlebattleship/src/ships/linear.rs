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
#[cfg(feature = "serde")]
use std::convert::TryFrom;

use crate::{
    board::Position,
    ships::{build_cells, Orientation, ShipCell, ShipError, Target},
};

/// A straight ship of length 2 or more.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LineDef", into = "LineDef")
)]
pub struct Line {
    anchor: Position,
    orientation: Orientation,
    cells: Vec<ShipCell>,
}

impl Line {
    /// Construct a ship anchored at its top or left end. Panics if `len < 2`.
    pub fn new(anchor: Position, len: usize, orientation: Orientation) -> Self {
        match Self::try_new(anchor, len, orientation) {
            Ok(line) => line,
            Err(err) => panic!("{}", err),
        }
    }

    /// Construct a ship anchored at its top or left end. Returns an error if `len < 2`.
    pub fn try_new(
        anchor: Position,
        len: usize,
        orientation: Orientation,
    ) -> Result<Self, ShipError> {
        if len < 2 {
            return Err(ShipError::TooShort(len));
        }
        Ok(Self {
            anchor,
            orientation,
            cells: build_cells(anchor, len, orientation),
        })
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Get the orientation of this ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Target for Line {
    fn anchor(&self) -> Position {
        self.anchor
    }

    fn cells(&self) -> &[ShipCell] {
        &self.cells
    }
}

/// Serialized form of a [`Line`]. Cells are rebuilt on load rather than trusted.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LineDef {
    anchor: Position,
    len: usize,
    orientation: Orientation,
}

#[cfg(feature = "serde")]
impl TryFrom<LineDef> for Line {
    type Error = ShipError;

    fn try_from(def: LineDef) -> Result<Self, ShipError> {
        Line::try_new(def.anchor, def.len, def.orientation)
    }
}

#[cfg(feature = "serde")]
impl From<Line> for LineDef {
    fn from(line: Line) -> Self {
        LineDef {
            anchor: line.anchor,
            len: line.len(),
            orientation: line.orientation,
        }
    }
}
