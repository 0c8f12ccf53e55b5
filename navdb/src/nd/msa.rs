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

use super::FixType;

/// Minimum sector altitude around a fix.
///
/// The sector spans clockwise from the start to the end bearing.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsaSector {
    pub fix_ident: String,
    pub fix_region: String,
    pub airport: String,
    pub fix_type: FixType,
    pub start_bearing: f64,
    pub end_bearing: f64,
    /// Radius in nautical miles.
    pub radius: f64,
    /// Altitude in feet.
    pub altitude: u32,
}

impl MsaSector {
    /// Returns `true` if the bearing from the fix is within this sector.
    pub fn contains_bearing(&self, bearing: f64) -> bool {
        let width = (self.end_bearing - self.start_bearing).rem_euclid(360.0);
        let width = if width == 0.0 { 360.0 } else { width };
        (bearing - self.start_bearing).rem_euclid(360.0) < width
    }
}
