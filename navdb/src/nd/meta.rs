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

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirportClass {
    Controlled,
    Private,
    Uncontrolled,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportMetadata {
    pub icao: String,
    pub region: String,
    pub coordinate: Point<f64>,
    /// Elevation in feet.
    pub elevation: i32,
    pub class: AirportClass,
    /// Length of the longest runway in feet.
    pub longest_runway: u32,
    pub ifr: bool,
    /// Transition altitude in feet.
    pub transition_altitude: u32,
    /// Transition level in feet.
    pub transition_level: u32,
}
