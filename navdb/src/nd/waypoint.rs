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

use geo::Point;

use super::Fix;

/// Area code of en-route waypoints.
pub const ENROUTE: &str = "ENRT";

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub ident: String,
    pub coordinate: Point<f64>,
    pub region: String,
    /// `ENRT` or the airport whose terminal area the waypoint belongs to.
    pub area: String,
    pub description: String,
}

impl Waypoint {
    /// The terminal area of the waypoint.
    ///
    /// Returns `None` if the waypoint is an en-route waypoint.
    pub fn terminal_area(&self) -> Option<&str> {
        (self.area != ENROUTE).then_some(self.area.as_str())
    }
}

impl Fix for Waypoint {
    fn ident(&self) -> &str {
        &self.ident
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn coordinate(&self) -> Point<f64> {
        self.coordinate
    }
}
