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

use super::{FixType, TurnDirection};

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoldingPattern {
    pub fix_ident: String,
    pub fix_region: String,
    /// The owning airport, `None` for en-route holds.
    pub airport: Option<String>,
    pub fix_type: FixType,
    pub inbound_course: f64,
    /// Leg time in minutes.
    pub leg_time: Option<f64>,
    /// Leg distance in nautical miles.
    pub leg_distance: Option<f64>,
    pub turn: TurnDirection,
    /// Minimum altitude in feet.
    pub min_altitude: u32,
    /// Maximum altitude in feet.
    pub max_altitude: u32,
    /// Speed limit in knots.
    pub speed: Option<u32>,
}
