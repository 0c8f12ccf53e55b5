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

use super::FixType;

/// The direction in which an airway segment may be flown.
///
/// The direction is kept as published. It is not applied when segments are
/// queried.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirwayDirection {
    Both,
    Forward,
    Backward,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirwayFix {
    pub ident: String,
    pub region: String,
    pub fix_type: FixType,
    /// The coordinate of the fix if it is known.
    pub coordinate: Option<Point<f64>>,
}

/// A directed segment of a named airway.
///
/// An airway is the set of all segments with its name. The segments are not
/// chained into a route.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirwaySegment {
    pub name: String,
    pub from: AirwayFix,
    pub to: AirwayFix,
    /// `true` for high-altitude and `false` for low-altitude airways.
    pub high: bool,
    pub direction: AirwayDirection,
    /// Base as flight level.
    pub base: u32,
    /// Top as flight level.
    pub top: u32,
}
