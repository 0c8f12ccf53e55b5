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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Airspace class or special-use designation.
///
/// Combines the ICAO classification (ICAO Annex 11, Chapter 2) with the
/// structural and special-use types OpenAir files use as class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Control Zone (CTR)
    CTR,
    /// Terminal Manoeuvring Area (TMA)
    TMA,
    /// Restricted airspace
    Restricted,
    /// Prohibited area
    Prohibited,
    /// Danger area
    Danger,
    Other,
}

/// Airspace.
///
/// The airspace is enclosed by the `polygon` and ranges from the `lower` to
/// the `upper` limit vertically. The limits are kept as published, e.g.
/// `FL195` or `2500ft MSL`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub name: String,
    pub class: AirspaceClass,
    pub upper: String,
    pub lower: String,
    pub polygon: geo::Polygon<f64>,
}

impl Display for AirspaceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceClass::A => write!(f, "A"),
            AirspaceClass::B => write!(f, "B"),
            AirspaceClass::C => write!(f, "C"),
            AirspaceClass::D => write!(f, "D"),
            AirspaceClass::E => write!(f, "E"),
            AirspaceClass::F => write!(f, "F"),
            AirspaceClass::G => write!(f, "G"),
            AirspaceClass::CTR => write!(f, "CTR"),
            AirspaceClass::TMA => write!(f, "TMA"),
            AirspaceClass::Restricted => write!(f, "Restricted"),
            AirspaceClass::Prohibited => write!(f, "Prohibited"),
            AirspaceClass::Danger => write!(f, "Danger"),
            AirspaceClass::Other => write!(f, "Other"),
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: {} | {}/{}",
            self.name, self.class, self.upper, self.lower
        )
    }
}
