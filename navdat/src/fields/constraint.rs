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

use std::fmt;

use crate::{Error, Field};

/// An altitude in feet.
///
/// Either five digits of feet (`05000`) or a flight level (`FL180`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Altitude(pub u32);

impl Altitude {
    /// Returns the altitude in feet.
    #[inline]
    pub fn feet(&self) -> u32 {
        self.0
    }
}

impl Field<'_> for Altitude {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token.strip_prefix("FL") {
            Some(level) => u32::from_token(level)?
                .checked_mul(100)
                .map(Self)
                .ok_or_else(|| Error::NotANumber {
                    token: token.to_owned(),
                }),
            None => u32::from_token(token).map(Self),
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}

/// How an altitude of a procedure leg applies.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum AltitudeDescriptor {
    #[default]
    At,
    AtOrAbove,
    AtOrBelow,
    /// At or below the first and at or above the second altitude.
    Between,
    /// Any other ARINC descriptor like glide slope or step-down altitudes.
    Other(char),
}

impl Field<'_> for AltitudeDescriptor {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "" => Ok(Self::At),
            "+" => Ok(Self::AtOrAbove),
            "-" => Ok(Self::AtOrBelow),
            "B" => Ok(Self::Between),
            _ => char::from_token(token).map(Self::Other),
        }
    }

    fn missing() -> Option<Self> {
        Some(Self::At)
    }
}

/// Altitude restriction of a procedure leg.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct AltitudeConstraint {
    pub descriptor: AltitudeDescriptor,
    pub altitude1: Altitude,
    pub altitude2: Option<Altitude>,
}

impl AltitudeConstraint {
    /// Builds the constraint from the descriptor and both altitude columns.
    ///
    /// A between constraint may carry both altitudes as one ten digit token in
    /// the first column.
    pub fn new(
        descriptor: AltitudeDescriptor,
        altitude1: &str,
        altitude2: &str,
    ) -> Result<Option<Self>, Error> {
        if altitude1.is_empty() {
            return Ok(None);
        }

        if descriptor == AltitudeDescriptor::Between
            && altitude1.len() == 10
            && altitude1.bytes().all(|b| b.is_ascii_digit())
        {
            let (upper, lower) = altitude1.split_at(5);
            return Ok(Some(Self {
                descriptor,
                altitude1: Altitude::from_token(upper)?,
                altitude2: Some(Altitude::from_token(lower)?),
            }));
        }

        Ok(Some(Self {
            descriptor,
            altitude1: Altitude::from_token(altitude1)?,
            altitude2: Option::<Altitude>::from_token(altitude2)?,
        }))
    }
}

/// How the speed limit of a procedure leg applies.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum SpeedDescriptor {
    #[default]
    At,
    AtOrAbove,
    AtOrBelow,
}

impl Field<'_> for SpeedDescriptor {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "" => Ok(Self::At),
            "+" => Ok(Self::AtOrAbove),
            "-" => Ok(Self::AtOrBelow),
            _ => Err(Error::InvalidVariant {
                field: "Speed Descriptor",
                token: token.to_owned(),
                expected: "blank, + or -",
            }),
        }
    }

    fn missing() -> Option<Self> {
        Some(Self::At)
    }
}

/// A value coded in tenths like courses (`1755` is 175.5°) and distances.
///
/// A trailing `T` marks a true course and is ignored.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Tenths(pub f64);

impl Field<'_> for Tenths {
    fn from_token(token: &str) -> Result<Self, Error> {
        let digits = token.strip_suffix('T').unwrap_or(token);
        u32::from_token(digits).map(|v| Self(v as f64 / 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feet_and_flight_levels() {
        assert_eq!(Altitude::from_token("05000"), Ok(Altitude(5000)));
        assert_eq!(Altitude::from_token("FL180"), Ok(Altitude(18000)));
        assert!(Altitude::from_token("FLXXX").is_err());
    }

    #[test]
    fn flight_level_out_of_range() {
        assert_eq!(
            Altitude::from_token("FL99999999"),
            Err(Error::NotANumber {
                token: "FL99999999".to_string()
            })
        );
    }

    #[test]
    fn between_from_two_columns() {
        let alt = AltitudeConstraint::new(AltitudeDescriptor::Between, "08000", "06000")
            .expect("should parse");
        assert_eq!(
            alt,
            Some(AltitudeConstraint {
                descriptor: AltitudeDescriptor::Between,
                altitude1: Altitude(8000),
                altitude2: Some(Altitude(6000)),
            })
        );
    }

    #[test]
    fn between_from_combined_token() {
        let alt = AltitudeConstraint::new(AltitudeDescriptor::Between, "1100009000", "")
            .expect("should parse")
            .expect("should have a constraint");
        assert_eq!(alt.altitude1, Altitude(11000));
        assert_eq!(alt.altitude2, Some(Altitude(9000)));
    }

    #[test]
    fn tenths() {
        assert_eq!(Tenths::from_token("1755"), Ok(Tenths(175.5)));
        assert_eq!(Tenths::from_token("0960T"), Ok(Tenths(96.0)));
    }

    #[test]
    fn blank_altitude_has_no_constraint() {
        assert_eq!(
            AltitudeConstraint::new(AltitudeDescriptor::AtOrAbove, "", ""),
            Ok(None)
        );
    }
}
