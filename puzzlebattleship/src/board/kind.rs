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

/// What occupies a single cell of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open water. The only kind that is not ship material.
    Water,
    /// A single-cell ship.
    Submarine,
    /// Left end of a horizontal ship.
    LeftEnd,
    /// Right end of a horizontal ship.
    RightEnd,
    /// Top end of a vertical ship.
    TopEnd,
    /// Bottom end of a vertical ship.
    BottomEnd,
    /// Interior segment of a ship of length 3 or more.
    Middle,
}

impl CellKind {
    /// Returns true if this kind counts toward row and column totals.
    pub const fn is_ship(self) -> bool {
        !matches!(self, CellKind::Water)
    }

    /// Single character used when rendering a [`Grid`][crate::board::Grid].
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Water => '~',
            CellKind::Submarine => 'o',
            CellKind::LeftEnd => '<',
            CellKind::RightEnd => '>',
            CellKind::TopEnd => '^',
            CellKind::BottomEnd => 'v',
            CellKind::Middle => '#',
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        CellKind::Water
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
