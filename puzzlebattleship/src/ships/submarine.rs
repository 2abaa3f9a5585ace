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
use std::slice;

use crate::{
    board::{CellKind, Position},
    ships::{ShipCell, Target},
};

/// A single-cell ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Position", into = "Position")
)]
pub struct Submarine {
    cell: ShipCell,
}

impl Submarine {
    pub fn new(anchor: Position) -> Self {
        Self {
            cell: ShipCell::new(anchor, CellKind::Submarine),
        }
    }
}

impl Target for Submarine {
    fn anchor(&self) -> Position {
        self.cell.pos
    }

    fn cells(&self) -> &[ShipCell] {
        slice::from_ref(&self.cell)
    }
}

impl From<Position> for Submarine {
    fn from(anchor: Position) -> Self {
        Self::new(anchor)
    }
}

impl From<Submarine> for Position {
    fn from(sub: Submarine) -> Self {
        sub.cell.pos
    }
}
