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

//! Runs the per-target checks over a whole fleet.

use enumflags2::BitFlags;
use log::debug;

use crate::{
    board::Grid,
    ships::Target,
    validate::ship::{self, Violation},
};

/// A target that failed at least one of the per-target checks.
#[derive(Debug)]
pub struct Offender<'a, T: ?Sized> {
    /// Index of the target in the fleet.
    index: usize,
    /// The offending target.
    target: &'a T,
    /// Every check the target failed. Never empty.
    violations: BitFlags<Violation>,
}

impl<'a, T: ?Sized> Offender<'a, T> {
    /// Index of the target within the fleet it came from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The offending target.
    pub fn target(&self) -> &'a T {
        self.target
    }

    /// The checks this target failed.
    pub fn violations(&self) -> BitFlags<Violation> {
        self.violations
    }
}

// Derive for Copy/Clone include bounds on the generic parameters, however, we can
// implement copy and clone regardless of whether our generics do.
impl<T: ?Sized> Clone for Offender<'_, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            target: self.target,
            violations: self.violations,
        }
    }
}
impl<T: ?Sized> Copy for Offender<'_, T> {}

/// Every target in the fleet that fails [`ship::is_valid`], in fleet order.
pub fn invalid_targets<'a, T: Target>(grid: &Grid, fleet: &'a [T]) -> Vec<&'a T> {
    fleet
        .iter()
        .filter(|target| !ship::is_valid(*target, grid))
        .collect()
}

/// Like [`invalid_targets`], but records the fleet index and the full set of violations
/// of each offender.
pub fn check_fleet<'a, T: Target>(grid: &Grid, fleet: &'a [T]) -> Vec<Offender<'a, T>> {
    fleet
        .iter()
        .enumerate()
        .filter_map(|(index, target)| {
            let violations = ship::violations(target, grid);
            if violations.is_empty() {
                None
            } else {
                debug!(
                    "target {} anchored at {} is invalid: {:?}",
                    index,
                    target.anchor(),
                    violations
                );
                Some(Offender {
                    index,
                    target,
                    violations,
                })
            }
        })
        .collect()
}
