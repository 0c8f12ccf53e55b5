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

use geo::Point;

use super::Fix;

/// The type of a navigation aid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidType {
    Vor,
    Vortac,
    VorDme,
    Ndb,
    Dme,
    Tacan,
    Ils,
    Loc,
    Gs,
    OuterMarker,
    MiddleMarker,
    InnerMarker,
    Fpap,
    Gls,
    Ltp,
    Ftp,
}

/// Groups of navaid types that are usually shown together.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidFamily {
    /// VOR, VORTAC and VOR-DME.
    Vor,
    Ndb,
    /// DME and TACAN.
    Dme,
    /// Localizer and glideslope.
    Ils,
    Marker,
    /// FPAP, GLS, LTP and FTP.
    Rnav,
}

impl NavaidType {
    /// Derives the type from the row code and the name.
    ///
    /// Returns `None` for unknown row codes.
    pub fn classify(code: u8, name: &str) -> Option<Self> {
        let t = match code {
            2 => Self::Ndb,
            3 if name.contains("VORTAC") => Self::Vortac,
            3 if name.contains("VOR-DME") || name.contains("VOR/DME") => Self::VorDme,
            3 => Self::Vor,
            4 => Self::Ils,
            5 => Self::Loc,
            6 => Self::Gs,
            7 => Self::OuterMarker,
            8 => Self::MiddleMarker,
            9 => Self::InnerMarker,
            12 | 13 if name.contains("TACAN") => Self::Tacan,
            12 | 13 => Self::Dme,
            14 => Self::Fpap,
            15 => Self::Gls,
            16 if name.contains("FTP") => Self::Ftp,
            16 => Self::Ltp,
            _ => return None,
        };
        Some(t)
    }

    pub fn family(&self) -> NavaidFamily {
        match self {
            Self::Vor | Self::Vortac | Self::VorDme => NavaidFamily::Vor,
            Self::Ndb => NavaidFamily::Ndb,
            Self::Dme | Self::Tacan => NavaidFamily::Dme,
            Self::Ils | Self::Loc | Self::Gs => NavaidFamily::Ils,
            Self::OuterMarker | Self::MiddleMarker | Self::InnerMarker => NavaidFamily::Marker,
            Self::Fpap | Self::Gls | Self::Ltp | Self::Ftp => NavaidFamily::Rnav,
        }
    }
}

impl Display for NavaidType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            Self::Vor => "VOR",
            Self::Vortac => "VORTAC",
            Self::VorDme => "VOR-DME",
            Self::Ndb => "NDB",
            Self::Dme => "DME",
            Self::Tacan => "TACAN",
            Self::Ils => "ILS",
            Self::Loc => "LOC",
            Self::Gs => "GS",
            Self::OuterMarker => "OM",
            Self::MiddleMarker => "MM",
            Self::InnerMarker => "IM",
            Self::Fpap => "FPAP",
            Self::Gls => "GLS",
            Self::Ltp => "LTP",
            Self::Ftp => "FTP",
        };
        f.write_str(s)
    }
}

/// A radio navigation aid or a point of an approach path.
///
/// Fields that only apply to some types are `None` for the others.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub navaid_type: NavaidType,
    pub ident: String,
    pub name: String,
    pub coordinate: Point<f64>,
    /// Elevation in feet.
    pub elevation: i32,
    /// Frequency as in the source, i.e. 10 kHz for VHF, kHz for NDB and the
    /// channel of FPAP, GLS and threshold points.
    pub frequency: u32,
    /// Service range in nautical miles.
    pub range: u32,
    pub region: String,
    /// ICAO nationality letter, the first letter of the region.
    pub country: String,
    /// True bearing of localizers, markers and glidepaths.
    pub bearing: Option<f64>,
    /// Magnetic course of localizers.
    pub magnetic_course: Option<u32>,
    /// Glidepath angle in degrees.
    pub glidepath_angle: Option<f64>,
    /// Slaved variation of VORs.
    pub variation: Option<f64>,
    /// DME bias in nautical miles.
    pub dme_bias: Option<f64>,
    pub airport: Option<String>,
    pub runway: Option<String>,
    /// Final approach course of FPAPs.
    pub course: Option<f64>,
    pub length_offset: Option<f64>,
    /// Threshold crossing height in feet.
    pub threshold_crossing_height: Option<f64>,
    pub reference_path: Option<String>,
    pub approach_performance: Option<String>,
}

impl Fix for Navaid {
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

impl Display for Navaid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} ({})", self.navaid_type, self.ident, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_vor_family() {
        assert_eq!(NavaidType::classify(3, "SEATTLE"), Some(NavaidType::Vor));
        assert_eq!(NavaidType::classify(3, "SEATTLE VORTAC"), Some(NavaidType::Vortac));
        assert_eq!(NavaidType::classify(3, "PAINE VOR-DME"), Some(NavaidType::VorDme));
        assert_eq!(NavaidType::classify(3, "PAINE VOR/DME"), Some(NavaidType::VorDme));
        assert_eq!(NavaidType::classify(12, "WHIDBEY TACAN"), Some(NavaidType::Tacan));
        assert_eq!(NavaidType::classify(13, "SEATTLE DME"), Some(NavaidType::Dme));
    }

    #[test]
    fn classifies_approach_aids() {
        assert_eq!(NavaidType::classify(4, "ILS-cat-III"), Some(NavaidType::Ils));
        assert_eq!(NavaidType::classify(5, "LOC"), Some(NavaidType::Loc));
        assert_eq!(NavaidType::classify(6, "GS"), Some(NavaidType::Gs));
        assert_eq!(NavaidType::classify(8, "MM"), Some(NavaidType::MiddleMarker));
        assert_eq!(NavaidType::classify(16, "WAAS LTP LPV"), Some(NavaidType::Ltp));
        assert_eq!(NavaidType::classify(16, "WAAS FTP LPV"), Some(NavaidType::Ftp));
        assert_eq!(NavaidType::classify(42, ""), None);
    }

    #[test]
    fn families() {
        assert_eq!(NavaidType::Vortac.family(), NavaidFamily::Vor);
        assert_eq!(NavaidType::Tacan.family(), NavaidFamily::Dme);
        assert_eq!(NavaidType::Gs.family(), NavaidFamily::Ils);
        assert_eq!(NavaidType::Ftp.family(), NavaidFamily::Rnav);
    }
}
