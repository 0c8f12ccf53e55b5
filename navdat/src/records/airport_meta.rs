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

use crate::fields::*;
use crate::{BannerHeader, Error, Field, Record, Records, Token};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AirportClass {
    Controlled,
    Private,
    Uncontrolled,
}

impl Field<'_> for AirportClass {
    fn from_token(token: &str) -> Result<Self, Error> {
        Ok(match token {
            "C" => Self::Controlled,
            "P" => Self::Private,
            _ => Self::Uncontrolled,
        })
    }
}

/// A line of the airport metadata table (`earth_aptmeta.dat`).
#[derive(Clone, PartialEq, Debug, Record)]
pub struct AirportMeta<'a> {
    pub icao: Token<'a>,
    pub region: Token<'a>,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub elevation: i32,
    pub class: AirportClass,
    /// Length of the longest runway in feet.
    pub longest_runway: u32,
    pub ifr: bool,
    pub transition_altitude: u32,
    pub transition_level: u32,
}

/// Parses all airport metadata lines.
pub fn parse(text: &str) -> impl Iterator<Item = AirportMeta<'_>> {
    Records::new(text, BannerHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_line() {
        let meta = AirportMeta::try_from("KSEA K1 47.449 -122.309 433 C 11901 1 18000 18000")
            .expect("metadata should parse");
        assert_eq!(meta.icao, "KSEA");
        assert_eq!(meta.class, AirportClass::Controlled);
        assert_eq!(meta.longest_runway, 11901);
        assert!(meta.ifr);
        assert_eq!(meta.transition_altitude, 18000);
    }

    #[test]
    fn unknown_class_is_uncontrolled() {
        let meta = AirportMeta::try_from("S43 K1 47.9 -122.1 21 X 2674 0 18000 18000")
            .expect("metadata should parse");
        assert_eq!(meta.class, AirportClass::Uncontrolled);
        assert!(!meta.ifr);
    }
}
