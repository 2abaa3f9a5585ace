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
use thiserror::Error;

/// Error returned when the clues don't fit the grid they were supplied for.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PuzzleError {
    /// There must be exactly one row clue per row.
    #[error("expected {expected} row clues, got {actual}")]
    RowClues { expected: usize, actual: usize },
    /// There must be exactly one column clue per column.
    #[error("expected {expected} column clues, got {actual}")]
    ColumnClues { expected: usize, actual: usize },
}
