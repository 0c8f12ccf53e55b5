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

/// A named point with a region.
pub trait Fix {
    fn ident(&self) -> &str;

    /// The ICAO region like `K1` or `ED`.
    fn region(&self) -> &str;

    fn coordinate(&self) -> Point<f64>;
}

/// The kind of fix a procedure, airway or hold refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixType {
    /// VOR, DME or TACAN.
    VhfNavaid,
    Ndb,
    EnrouteWaypoint,
    TerminalWaypoint,
    Runway,
    Airport,
    Other,
}

impl FixType {
    /// Returns `true` if the fix is a radio navigation aid.
    pub fn is_navaid(&self) -> bool {
        matches!(self, Self::VhfNavaid | Self::Ndb)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}
