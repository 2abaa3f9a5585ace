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

//! Checks run against a painted [`Grid`][crate::board::Grid]. None of them mutate
//! anything, and none of them fail: every outcome is reported as data.
//!
//! [`ship`] checks one target at a time, [`fleet`] runs those checks across a whole
//! fleet, and [`aggregate`] compares the grid against the row, column and revealed-cell
//! clues.

pub mod aggregate;
pub mod fleet;
pub mod ship;
