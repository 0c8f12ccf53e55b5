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

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{FixType, TurnDirection};
use crate::geom::Coordinate;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcedureType {
    Sid,
    Star,
    Approach,
}

impl Display for ProcedureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sid => write!(f, "SID"),
            Self::Star => write!(f, "STAR"),
            Self::Approach => write!(f, "APPCH"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeDescriptor {
    At,
    AtOrAbove,
    AtOrBelow,
    /// At or below `altitude1` and at or above `altitude2`.
    Between,
    /// Any other descriptor as its ARINC 424 letter.
    Other(char),
}

/// Altitude restriction in feet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AltitudeConstraint {
    pub descriptor: AltitudeDescriptor,
    pub altitude1: u32,
    pub altitude2: Option<u32>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedDescriptor {
    At,
    AtOrAbove,
    AtOrBelow,
}

/// Speed restriction in knots.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedConstraint {
    pub descriptor: SpeedDescriptor,
    pub speed: u32,
}

/// A leg of a procedure referencing its fix by name.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcedureWaypoint {
    /// The fix the leg ends at, `None` for legs like heading to an altitude.
    pub fix_ident: Option<String>,
    pub fix_region: Option<String>,
    pub fix_type: FixType,
    /// ARINC 424 path terminator like `TF` or `CF`.
    pub path_terminator: String,
    /// Magnetic course in degrees.
    pub course: Option<f64>,
    /// Distance in nautical miles or time in minutes.
    pub distance: Option<f64>,
    pub altitude: Option<AltitudeConstraint>,
    pub speed: Option<SpeedConstraint>,
    pub turn_direction: Option<TurnDirection>,
}

/// A SID, STAR or approach.
///
/// A procedure is identified by its type, name, runway and transition.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Procedure {
    pub procedure_type: ProcedureType,
    pub name: String,
    /// The runway, `None` if the procedure serves all runways.
    pub runway: Option<String>,
    pub transition: Option<String>,
    pub waypoints: Vec<ProcedureWaypoint>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedProcedureWaypoint {
    pub waypoint: ProcedureWaypoint,
    pub coordinate: Option<Coordinate>,
    pub resolved: bool,
}

/// A procedure whose fixes are resolved to coordinates where possible.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedProcedure {
    pub procedure_type: ProcedureType,
    pub name: String,
    pub runway: Option<String>,
    pub transition: Option<String>,
    pub waypoints: Vec<ResolvedProcedureWaypoint>,
}

impl ResolvedProcedure {
    /// Returns `true` if every fix of the procedure is resolved.
    pub fn is_complete(&self) -> bool {
        self.waypoints
            .iter()
            .filter(|wp| wp.waypoint.fix_ident.is_some())
            .all(|wp| wp.resolved)
    }
}
