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

use proptest::prelude::*;
use puzzlebattleship::board::{CellKind, Grid, Position, RectDimensions};
use puzzlebattleship::ships::{build_cells, Orientation, Placement, Target};
use puzzlebattleship::validate::ship;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn length_one_is_a_submarine(row in -20isize..20, col in -20isize..20, orient in orientation()) {
        let anchor = Position::new(row, col);
        let cells = build_cells(anchor, 1, orient);
        prop_assert_eq!(cells.len(), 1);
        prop_assert_eq!(cells[0].pos, anchor);
        prop_assert_eq!(cells[0].kind, CellKind::Submarine);
    }

    #[test]
    fn longer_ships_are_contiguous_runs(
        row in -20isize..20,
        col in -20isize..20,
        len in 2usize..8,
        orient in orientation(),
    ) {
        let anchor = Position::new(row, col);
        let cells = build_cells(anchor, len, orient);
        prop_assert_eq!(cells.len(), len);

        let (first, last) = orient.end_kinds();
        prop_assert_eq!(cells[0].kind, first);
        prop_assert_eq!(cells[len - 1].kind, last);
        for cell in &cells[1..len - 1] {
            prop_assert_eq!(cell.kind, CellKind::Middle);
        }

        for (i, cell) in cells.iter().enumerate() {
            let expected = match orient {
                Orientation::Horizontal => Position::new(row, col + i as isize),
                Orientation::Vertical => Position::new(row + i as isize, col),
            };
            prop_assert_eq!(cell.pos, expected);
        }
    }

    #[test]
    fn lone_in_bounds_ship_is_valid(
        rows in 1usize..12,
        cols in 1usize..12,
        len in 1usize..6,
        orient in orientation(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let (height, width) = match orient {
            Orientation::Horizontal => (1, len),
            Orientation::Vertical => (len, 1),
        };
        prop_assume!(height <= rows && width <= cols);
        let anchor = Position::new(
            (row_seed % (rows - height + 1)) as isize,
            (col_seed % (cols - width + 1)) as isize,
        );

        let fleet = vec![Placement::ship(anchor, len, orient)];
        let grid = Grid::paint(RectDimensions::new(rows, cols), &fleet);
        prop_assert!(ship::in_bounds(&fleet[0], &grid));
        prop_assert!(ship::intact(&fleet[0], &grid));
        prop_assert!(ship::isolated(&fleet[0], &grid));
        prop_assert!(ship::is_valid(&fleet[0], &grid));

        let painted = grid.rows().flatten().filter(|kind| kind.is_ship()).count();
        prop_assert_eq!(painted, fleet[0].cells().len());
    }
}
