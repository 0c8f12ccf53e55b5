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
use crate::record::Fields;
use crate::{BannerHeader, Error, Record, Records, Token};

/// One sector as it appears in the line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sector {
    /// Bearing in degrees at which the sector starts.
    pub bearing: f64,
    /// Minimum altitude in feet.
    pub altitude: u32,
    /// Radius in nautical miles.
    pub radius: f64,
}

impl Sector {
    /// Returns the bearing in degrees at which the sector ends.
    ///
    /// A sector ends where the next one starts. The last sector wraps to the
    /// first and a single sector covers the full circle.
    pub fn end_bearing(sectors: &[Sector], index: usize) -> Option<f64> {
        let this = sectors.get(index)?;
        let next = sectors.get((index + 1) % sectors.len())?;
        if sectors.len() == 1 {
            Some(this.bearing + 360.0)
        } else {
            Some(next.bearing)
        }
    }
}

/// A line of the minimum sector altitude table (`earth_msa.dat`).
#[derive(Clone, PartialEq, Debug)]
pub struct Msa<'a> {
    pub fix_ident: Token<'a>,
    pub fix_region: Token<'a>,
    pub airport: Token<'a>,
    pub fix_type: FixType,
    pub sectors: Vec<Sector>,
}

impl<'a> Record<'a> for Msa<'a> {
    fn parse(mut fields: Fields<'a>) -> Result<Self, Error> {
        let fix_ident = fields.next()?;
        let fix_region = fields.next()?;
        let airport = fields.next()?;
        let fix_type = fields.next()?;

        if fields.remaining() == 0 || fields.remaining() % 3 != 0 {
            return Err(Error::MissingField {
                index: fields.len(),
            });
        }

        let mut sectors = Vec::with_capacity(fields.remaining() / 3);
        while fields.remaining() > 0 {
            let bearing = fields.next()?;
            let hundreds: u32 = fields.next()?;
            let altitude = hundreds
                .checked_mul(100)
                .ok_or_else(|| Error::NotANumber {
                    token: hundreds.to_string(),
                })?;
            let radius = fields.next()?;
            sectors.push(Sector {
                bearing,
                altitude,
                radius,
            });
        }

        Ok(Self {
            fix_ident,
            fix_region,
            airport,
            fix_type,
            sectors,
        })
    }
}

impl<'a> TryFrom<&'a str> for Msa<'a> {
    type Error = Error;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        Self::from_line(line)
    }
}

/// Parses all minimum sector altitudes.
pub fn parse(text: &str) -> impl Iterator<Item = Msa<'_>> {
    Records::new(text, BannerHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_sectors() {
        let msa = Msa::try_from("SEA K1 KSEA 3 0 60 25 90 45 25 270 52 25").expect("should parse");
        assert_eq!(msa.fix_ident, "SEA");
        assert_eq!(msa.fix_type, FixType::VhfNavaid);
        assert_eq!(msa.sectors.len(), 3);
        assert_eq!(msa.sectors[1].altitude, 4500);
        assert_eq!(Sector::end_bearing(&msa.sectors, 0), Some(90.0));
        assert_eq!(Sector::end_bearing(&msa.sectors, 1), Some(270.0));
        // the last sector wraps to the first
        assert_eq!(Sector::end_bearing(&msa.sectors, 2), Some(0.0));
    }

    #[test]
    fn single_sector_covers_full_circle() {
        let msa = Msa::try_from("RW16L K1 KSEA 11 0 40 25").expect("should parse");
        assert_eq!(Sector::end_bearing(&msa.sectors, 0), Some(360.0));
    }

    #[test]
    fn incomplete_sector() {
        assert!(Msa::try_from("SEA K1 KSEA 3 0 60").is_err());
        assert!(Msa::try_from("SEA K1 KSEA 3").is_err());
    }

    #[test]
    fn altitude_out_of_range() {
        assert_eq!(
            Msa::try_from("SEA K1 KSEA 3 0 99999999 25"),
            Err(Error::NotANumber {
                token: "99999999".to_string()
            })
        );
        let text = "I\n1150 Version - Copyright\nSEA K1 KSEA 3 0 99999999 25\nPAE K1 KPAE 3 0 40 25\n99\n";
        let idents: Vec<_> = parse(text).map(|msa| msa.fix_ident.to_string()).collect();
        assert_eq!(idents, vec!["PAE"]);
    }
}
