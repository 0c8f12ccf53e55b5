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

/// The airspace a controller is responsible for.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtcVolume {
    /// Floor in feet.
    pub floor: i32,
    /// Ceiling in feet.
    pub ceiling: i32,
    pub boundary: geo::Polygon<f64>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtcController {
    pub name: String,
    pub facility_id: Option<String>,
    /// Role like `ctr`, `app` or `twr`.
    pub role: Option<String>,
    /// Frequencies in kHz.
    pub frequencies: Vec<u32>,
    pub volumes: Vec<AtcVolume>,
}
