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

//! Per-target checks.
//!
//! Each predicate can be called on its own and re-derives its own bounds safety, so it is
//! safe to run against a target that is partly or fully off the grid.

use std::collections::HashSet;

use enumflags2::BitFlags;
use log::trace;

use crate::{board::Grid, ships::Target};

/// Ways a single target can be invalid.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Violation {
    /// At least one declared cell is off the grid.
    OutOfBounds = 0b001,
    /// At least one declared cell was painted over by another target.
    Overlap = 0b010,
    /// Foreign ship material touches the target, including diagonally.
    Spacing = 0b100,
}

/// Returns true if every declared cell lies on the grid.
pub fn in_bounds<T: Target + ?Sized>(target: &T, grid: &Grid) -> bool {
    let dim = grid.dimensions();
    target.cells().iter().all(|cell| dim.contains(cell.pos))
}

/// Returns true if the grid shows exactly the kind this target declared at each of its
/// cells. An off-grid cell never matches.
pub fn intact<T: Target + ?Sized>(target: &T, grid: &Grid) -> bool {
    target.cells().iter().all(|cell| match grid.get(cell.pos) {
        Some(kind) if kind == cell.kind => true,
        painted => {
            trace!(
                "target at {} expected {:?} at {}, found {:?}",
                target.anchor(),
                cell.kind,
                cell.pos,
                painted
            );
            false
        }
    })
}

/// Returns true if every in-bounds neighbour of the target's in-bounds cells is either
/// one of its own cells or water. Off-grid cells and neighbours are ignored.
pub fn isolated<T: Target + ?Sized>(target: &T, grid: &Grid) -> bool {
    let own: HashSet<_> = target.cells().iter().map(|cell| cell.pos).collect();
    let dim = grid.dimensions();
    for cell in target.cells() {
        // Neighbours of an off-grid cell are empty.
        for neighbor in dim.neighbors(cell.pos) {
            if own.contains(&neighbor) {
                continue;
            }
            let kind = grid[neighbor];
            if kind.is_ship() {
                trace!(
                    "target at {} touches {:?} at {}",
                    target.anchor(),
                    kind,
                    neighbor
                );
                return false;
            }
        }
    }
    true
}

/// Returns true if the target is in bounds, intact and isolated, checked in that order.
pub fn is_valid<T: Target + ?Sized>(target: &T, grid: &Grid) -> bool {
    in_bounds(target, grid) && intact(target, grid) && isolated(target, grid)
}

/// Run all three checks without short-circuiting and collect every failure.
/// Empty exactly when [`is_valid`] returns true.
pub fn violations<T: Target + ?Sized>(target: &T, grid: &Grid) -> BitFlags<Violation> {
    let mut found = BitFlags::empty();
    if !in_bounds(target, grid) {
        found.insert(Violation::OutOfBounds);
    }
    if !intact(target, grid) {
        found.insert(Violation::Overlap);
    }
    if !isolated(target, grid) {
        found.insert(Violation::Spacing);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Position, RectDimensions},
        ships::{Orientation, Placement},
    };

    fn painted(rows: usize, cols: usize, fleet: &[Placement]) -> Grid {
        Grid::paint(RectDimensions::new(rows, cols), fleet)
    }

    #[test]
    fn lone_ship_passes_everything() {
        let fleet = [Placement::ship(Position::new(1, 1), 3, Orientation::Vertical)];
        let grid = painted(5, 5, &fleet);
        assert!(in_bounds(&fleet[0], &grid));
        assert!(intact(&fleet[0], &grid));
        assert!(isolated(&fleet[0], &grid));
        assert!(is_valid(&fleet[0], &grid));
        assert!(violations(&fleet[0], &grid).is_empty());
    }

    #[test]
    fn hanging_off_the_edge_fails_bounds_and_integrity_only() {
        let fleet = [Placement::ship(Position::new(0, 3), 2, Orientation::Horizontal)];
        let grid = painted(4, 4, &fleet);
        assert!(!in_bounds(&fleet[0], &grid));
        assert!(!intact(&fleet[0], &grid));
        assert!(isolated(&fleet[0], &grid));
        assert_eq!(
            violations(&fleet[0], &grid),
            Violation::OutOfBounds | Violation::Overlap
        );
    }

    #[test]
    fn fully_off_grid_does_not_panic() {
        let fleet = [Placement::ship(Position::new(-5, -5), 3, Orientation::Vertical)];
        let grid = painted(3, 3, &fleet);
        assert!(!is_valid(&fleet[0], &grid));
        assert!(isolated(&fleet[0], &grid));
    }

    #[test]
    fn overwritten_ship_loses_integrity() {
        let fleet = [
            Placement::ship(Position::new(1, 0), 3, Orientation::Horizontal),
            Placement::ship(Position::new(0, 1), 2, Orientation::Vertical),
        ];
        let grid = painted(4, 4, &fleet);
        assert!(!intact(&fleet[0], &grid));
        assert!(intact(&fleet[1], &grid));
    }

    #[test]
    fn orthogonal_contact_breaks_spacing() {
        let fleet = [
            Placement::submarine(Position::new(0, 0)),
            Placement::submarine(Position::new(0, 1)),
        ];
        let grid = painted(3, 3, &fleet);
        assert!(!isolated(&fleet[0], &grid));
        assert!(!isolated(&fleet[1], &grid));
        assert_eq!(violations(&fleet[0], &grid), BitFlags::from(Violation::Spacing));
    }
}
