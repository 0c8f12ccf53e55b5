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

//! Navaid table (`earth_nav.dat`).
//!
//! Every line starts with a row code that selects one of the layouts below.
//! All layouts share the leading columns `code lat lon elevation frequency
//! range value ident`.

use crate::fields::*;
use crate::record::Fields;
use crate::{Error, Record, Records, StandardHeader, Text, Token};

/// One line of the navaid table.
#[derive(Clone, PartialEq, Debug)]
pub enum Navaid<'a> {
    /// Row code 2.
    Ndb(Ndb<'a>),
    /// Row code 3.
    Vor(Vor<'a>),
    /// Row codes 4 (ILS) and 5 (localizer only).
    Localizer(Localizer<'a>),
    /// Row code 6.
    Glideslope(Glideslope<'a>),
    /// Row codes 7 (outer), 8 (middle) and 9 (inner).
    Marker(Marker<'a>),
    /// Row codes 12 and 13.
    Dme(Dme<'a>),
    /// Row code 14.
    Fpap(Fpap<'a>),
    /// Row code 15.
    Gls(Gls<'a>),
    /// Row code 16.
    ThresholdPoint(ThresholdPoint<'a>),
}

impl<'a> Navaid<'a> {
    /// Returns the row code of the line.
    pub fn code(&self) -> u8 {
        match self {
            Self::Ndb(v) => v.code,
            Self::Vor(v) => v.code,
            Self::Localizer(v) => v.code,
            Self::Glideslope(v) => v.code,
            Self::Marker(v) => v.code,
            Self::Dme(v) => v.code,
            Self::Fpap(v) => v.code,
            Self::Gls(v) => v.code,
            Self::ThresholdPoint(v) => v.code,
        }
    }
}

impl<'a> Record<'a> for Navaid<'a> {
    fn parse(fields: Fields<'a>) -> Result<Self, Error> {
        let code = fields.peek().ok_or(Error::MissingField { index: 0 })?;
        match code {
            "2" => Ndb::parse(fields).map(Self::Ndb),
            "3" => Vor::parse(fields).map(Self::Vor),
            "4" | "5" => Localizer::parse(fields).map(Self::Localizer),
            "6" => Glideslope::parse(fields).map(Self::Glideslope),
            "7" | "8" | "9" => Marker::parse(fields).map(Self::Marker),
            "12" | "13" => Dme::parse(fields).map(Self::Dme),
            "14" => Fpap::parse(fields).map(Self::Fpap),
            "15" => Gls::parse(fields).map(Self::Gls),
            "16" => ThresholdPoint::parse(fields).map(Self::ThresholdPoint),
            _ => Err(Error::UnknownRowCode {
                code: code.to_owned(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a str> for Navaid<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        Self::from_line(line)
    }
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Ndb<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    /// Frequency in kHz.
    pub frequency: u32,
    pub range: u32,
    #[navdat(skip(1))]
    pub ident: Token<'a>,
    pub terminal: Token<'a>,
    pub region: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Vor<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    /// Frequency in 10 kHz.
    pub frequency: u32,
    pub range: u32,
    pub slaved_variation: f64,
    pub ident: Token<'a>,
    pub terminal: Token<'a>,
    pub region: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Localizer<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub frequency: u32,
    pub range: u32,
    pub bearing: LocalizerBearing,
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Glideslope<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub frequency: u32,
    pub range: u32,
    pub glidepath: Glidepath,
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Marker<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    #[navdat(skip(2))]
    pub bearing: f64,
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Dme<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub frequency: u32,
    pub range: u32,
    /// Distance bias in nautical miles.
    pub bias: f64,
    pub ident: Token<'a>,
    pub terminal: Token<'a>,
    pub region: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

/// Flight path alignment point of an RNAV approach.
#[derive(Clone, PartialEq, Debug, Record)]
pub struct Fpap<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub channel: u32,
    pub length_offset: f64,
    pub course: f64,
    /// The reference path identifier.
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    /// Approach performance class like `LPV`.
    #[navdat(rest)]
    pub performance: Text<'a>,
}

#[derive(Clone, PartialEq, Debug, Record)]
pub struct Gls<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub channel: u32,
    #[navdat(skip(1))]
    pub glidepath: Glidepath,
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    #[navdat(rest)]
    pub name: Text<'a>,
}

/// Landing or fictitious threshold point of an RNAV approach.
#[derive(Clone, PartialEq, Debug, Record)]
pub struct ThresholdPoint<'a> {
    pub code: u8,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub channel: u32,
    /// Threshold crossing height in feet.
    pub threshold_crossing_height: f64,
    pub glidepath: Glidepath,
    pub ident: Token<'a>,
    pub airport: Token<'a>,
    pub region: Token<'a>,
    pub runway: Token<'a>,
    /// Either `LTP` or `FTP` followed by the approach performance class.
    #[navdat(rest)]
    pub reference: Text<'a>,
}

impl ThresholdPoint<'_> {
    /// Returns `true` for a fictitious threshold point.
    pub fn is_fictitious(&self) -> bool {
        self.reference.contains("FTP")
    }
}

/// Parses all navaids of the navaid table.
pub fn parse(text: &str) -> impl Iterator<Item = Navaid<'_>> {
    Records::new(text, StandardHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vortac_line() {
        let line = "3  47.43538889 -122.30961111    354 11680 130   19.0 SEA ENRT K1 SEATTLE VORTAC";
        let Ok(Navaid::Vor(vor)) = Navaid::try_from(line) else {
            panic!("line should be a VOR");
        };
        assert_eq!(vor.latitude.as_decimal(), 47.43538889);
        assert_eq!(vor.longitude.as_decimal(), -122.30961111);
        assert_eq!(vor.elevation, 354);
        assert_eq!(vor.frequency, 11680);
        assert_eq!(vor.range, 130);
        assert_eq!(vor.slaved_variation, 19.0);
        assert_eq!(vor.ident, "SEA");
        assert_eq!(vor.region, "K1");
        assert_eq!(vor.name.to_string(), "SEATTLE VORTAC");
    }

    #[test]
    fn ils_localizer_line() {
        let line = "4  47.43102500 -122.30802778    338 11090  18   58135.933 ISNQ KSEA K1 16L ILS-cat-III";
        let Ok(Navaid::Localizer(loc)) = Navaid::try_from(line) else {
            panic!("line should be a localizer");
        };
        assert_eq!(loc.code, 4);
        assert_eq!(loc.bearing.magnetic_course, 161);
        assert!((loc.bearing.true_bearing - 175.933).abs() < 1e-9);
        assert_eq!(loc.airport, "KSEA");
        assert_eq!(loc.runway, "16L");
    }

    #[test]
    fn glideslope_line() {
        let line = "6  47.46216667 -122.31086111    423 11090  10 300175.933 ISNQ KSEA K1 16L GS";
        let Ok(Navaid::Glideslope(gs)) = Navaid::try_from(line) else {
            panic!("line should be a glideslope");
        };
        assert_eq!(gs.glidepath.angle(), 3.0);
        assert!((gs.glidepath.true_course - 175.933).abs() < 1e-9);
    }

    #[test]
    fn threshold_point_line() {
        let line = "16 47.46380000 -122.30770000    429   56900   52.0  300175.933 R16LY KSEA K1 16L WAAS FTP LPV";
        let Ok(Navaid::ThresholdPoint(tp)) = Navaid::try_from(line) else {
            panic!("line should be a threshold point");
        };
        assert_eq!(tp.channel, 56900);
        assert_eq!(tp.threshold_crossing_height, 52.0);
        assert_eq!(tp.glidepath.angle_hundredths, 300);
        assert!(tp.is_fictitious());
    }

    #[test]
    fn marker_line() {
        let line = "7  47.5 -122.3  0 0 0 175.9 ---- KSEA K1 16L OM";
        let Ok(Navaid::Marker(m)) = Navaid::try_from(line) else {
            panic!("line should be a marker");
        };
        assert_eq!(m.code, 7);
        assert_eq!(m.bearing, 175.9);
    }

    #[test]
    fn short_line_is_an_error() {
        assert!(Navaid::try_from("3 47.4 -122.3 354 11680 130 19.0 SEA ENRT").is_err());
    }

    #[test]
    fn unknown_row_code() {
        assert_eq!(
            Navaid::try_from("42 47.4 -122.3 354 11680 130 19.0 SEA ENRT K1 NAME"),
            Err(Error::UnknownRowCode {
                code: "42".to_owned()
            })
        );
    }

    #[test]
    fn parses_table() {
        let text = "I
1200 Version - data cycle 2305. Copyright
3  47.43538889 -122.30961111 354 11680 130 19.0 SEA ENRT K1 SEATTLE VORTAC
2  47.29 -122.31 0 362 50 0.0 OL ENRT K1 OLLIE NDB
3  47.4 -122.3 354 11680
99
";
        let navaids: Vec<_> = parse(text).collect();
        assert_eq!(navaids.len(), 2);
        assert_eq!(navaids[0].code(), 3);
        assert_eq!(navaids[1].code(), 2);
    }
}
