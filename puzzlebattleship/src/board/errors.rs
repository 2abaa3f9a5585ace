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

//! Errors used when building the grid.

use thiserror::Error;

/// Reason why a set of [`RectDimensions`][crate::board::RectDimensions] could not be
/// constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// One of the axes had length zero.
    #[error("dimensions must be nonzero, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    /// `rows * cols` does not fit in a `usize`.
    #[error("dimensions too large: {rows} * {cols} overflows usize")]
    TooLarge { rows: usize, cols: usize },
}
