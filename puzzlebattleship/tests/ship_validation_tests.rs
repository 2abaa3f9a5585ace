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

use enumflags2::BitFlags;
use puzzlebattleship::board::{CellKind, Grid, Position, RectDimensions};
use puzzlebattleship::ships::{Line, Orientation, Placement, Submarine, Target};
use puzzlebattleship::validate::fleet::{check_fleet, invalid_targets};
use puzzlebattleship::validate::ship::{self, Violation};

fn paint(rows: usize, cols: usize, fleet: &[Placement]) -> Grid {
    Grid::paint(RectDimensions::new(rows, cols), fleet)
}

#[test]
fn later_ship_wins_the_overlap() {
    // Both claim (2, 2): the first as the middle of a horizontal ship, the second as the
    // top of a vertical one.
    let fleet = vec![
        Placement::ship(Position::new(2, 1), 3, Orientation::Horizontal),
        Placement::ship(Position::new(2, 2), 2, Orientation::Vertical),
    ];
    let grid = paint(6, 6, &fleet);
    assert_eq!(grid[Position::new(2, 2)], CellKind::TopEnd);

    assert!(!ship::intact(&fleet[0], &grid));
    assert!(ship::intact(&fleet[1], &grid));
    assert!(ship::in_bounds(&fleet[0], &grid));
    assert!(ship::in_bounds(&fleet[1], &grid));
}

#[test]
fn swapping_fleet_order_swaps_the_integrity_failure() {
    let fleet = vec![
        Placement::ship(Position::new(2, 2), 2, Orientation::Vertical),
        Placement::ship(Position::new(2, 1), 3, Orientation::Horizontal),
    ];
    let grid = paint(6, 6, &fleet);
    assert_eq!(grid[Position::new(2, 2)], CellKind::Middle);
    assert!(!ship::intact(&fleet[0], &grid));
    assert!(ship::intact(&fleet[1], &grid));
}

#[test]
fn one_cell_past_each_edge_fails_bounds() {
    let grid = Grid::new(RectDimensions::new(4, 4));
    let outside = [
        Placement::submarine(Position::new(-1, 0)),
        Placement::submarine(Position::new(0, -1)),
        Placement::submarine(Position::new(4, 0)),
        Placement::submarine(Position::new(0, 4)),
        Placement::ship(Position::new(3, 0), 2, Orientation::Vertical),
        Placement::ship(Position::new(0, 3), 2, Orientation::Horizontal),
    ];
    for target in &outside {
        assert!(!ship::in_bounds(target, &grid), "{:?}", target);
        assert!(!ship::intact(target, &grid), "{:?}", target);
        assert!(!ship::is_valid(target, &grid), "{:?}", target);
        // Spacing ignores the off-grid part instead of indexing out of range.
        assert!(ship::isolated(target, &grid), "{:?}", target);
    }
}

#[test]
fn diagonal_neighbours_both_fail_spacing() {
    let fleet = vec![
        Placement::ship(Position::new(0, 0), 2, Orientation::Horizontal),
        Placement::submarine(Position::new(1, 2)),
    ];
    let grid = paint(4, 4, &fleet);
    for target in &fleet {
        assert!(ship::in_bounds(target, &grid));
        assert!(ship::intact(target, &grid));
        assert!(!ship::isolated(target, &grid));
        assert_eq!(
            ship::violations(target, &grid),
            BitFlags::from(Violation::Spacing)
        );
    }
}

#[test]
fn one_cell_gap_is_enough() {
    let fleet = vec![
        Placement::ship(Position::new(0, 0), 2, Orientation::Horizontal),
        Placement::submarine(Position::new(2, 2)),
        Placement::ship(Position::new(0, 4), 3, Orientation::Vertical),
    ];
    let grid = paint(5, 5, &fleet);
    assert!(invalid_targets(&grid, &fleet).is_empty());
    assert!(check_fleet(&grid, &fleet).is_empty());
}

#[test]
fn fleet_reports_every_offender_in_order() {
    let fleet = vec![
        Placement::submarine(Position::new(0, 0)),
        Placement::submarine(Position::new(3, 3)),
        Placement::submarine(Position::new(1, 1)),
        Placement::ship(Position::new(3, 5), 3, Orientation::Horizontal),
    ];
    let grid = paint(6, 6, &fleet);

    let invalid = invalid_targets(&grid, &fleet);
    assert_eq!(invalid, vec![&fleet[0], &fleet[2], &fleet[3]]);

    let offenders = check_fleet(&grid, &fleet);
    let indices: Vec<_> = offenders.iter().map(|o| o.index()).collect();
    assert_eq!(indices, vec![0, 2, 3]);
    assert_eq!(offenders[0].violations(), BitFlags::from(Violation::Spacing));
    assert_eq!(offenders[1].target().anchor(), Position::new(1, 1));
    assert_eq!(
        offenders[2].violations(),
        Violation::OutOfBounds | Violation::Overlap
    );
}

#[test]
fn predicates_work_on_concrete_ship_types() {
    let line = Line::new(Position::new(1, 1), 2, Orientation::Vertical);
    let sub = Submarine::new(Position::new(1, 3));
    let fleet: Vec<Placement> = vec![line.clone().into(), sub.into()];
    let grid = paint(4, 5, &fleet);
    assert!(ship::is_valid(&line, &grid));
    assert!(ship::is_valid(&sub, &grid));

    let dyn_targets: [&dyn Target; 2] = [&line, &sub];
    for target in dyn_targets.iter() {
        assert!(ship::is_valid(*target, &grid));
    }
}
