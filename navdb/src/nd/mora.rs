// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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
use serde::{Deserialize, Serialize};

use geo::{Intersects, Point, Rect};

/// Minimum off-route altitude of a grid cell.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoraCell {
    pub rect: Rect<f64>,
    /// Altitude in feet.
    pub altitude: u32,
}

impl MoraCell {
    /// Returns `true` if the point is within or on the edge of the cell.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.rect.intersects(point)
    }
}
