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

use crate::{Error, Field};

/// Latitude in decimal degrees.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Latitude(f64);

impl Latitude {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0
    }
}

impl Field<'_> for Latitude {
    fn from_token(token: &str) -> Result<Self, Error> {
        let value = f64::from_token(token)?;
        if (-90.0..=90.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidCoordinate {
                field: "Latitude",
                token: token.to_owned(),
            })
        }
    }
}

/// Longitude in decimal degrees.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Longitude(f64);

impl Longitude {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0
    }
}

impl Field<'_> for Longitude {
    fn from_token(token: &str) -> Result<Self, Error> {
        let value = f64::from_token(token)?;
        if (-180.0..=180.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidCoordinate {
                field: "Longitude",
                token: token.to_owned(),
            })
        }
    }
}

/// Parses a degrees:minutes:seconds position with hemisphere letters.
///
/// Accepts `52:30:00 N 013:20:00 E` as well as `52:30:00N 013:20:00E`,
/// `52:30N 013:20E` and fractional seconds. South and west are negative.
///
/// Returns the position as `(latitude, longitude)` in decimal degrees.
pub fn parse_dms_position(text: &str) -> Result<(f64, f64), Error> {
    let mut parts: Vec<(String, char)> = Vec::with_capacity(2);
    let mut value = String::new();

    for c in text.chars() {
        match c {
            'N' | 'S' | 'E' | 'W' | 'n' | 's' | 'e' | 'w' => {
                parts.push((value.trim().to_owned(), c.to_ascii_uppercase()));
                value.clear();
            }
            _ => value.push(c),
        }
    }

    if !value.trim().is_empty() || parts.len() != 2 {
        return Err(Error::InvalidVariant {
            field: "DMS Position",
            token: text.to_owned(),
            expected: "latitude and longitude with hemisphere",
        });
    }

    let lat = dms_to_decimal(&parts[0].0)?;
    let lon = dms_to_decimal(&parts[1].0)?;

    let lat = match parts[0].1 {
        'N' => lat,
        'S' => -lat,
        hem => return Err(hemisphere_error("Latitude", hem, "N or S")),
    };

    let lon = match parts[1].1 {
        'E' => lon,
        'W' => -lon,
        hem => return Err(hemisphere_error("Longitude", hem, "E or W")),
    };

    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok((lat, lon))
    } else {
        Err(Error::InvalidCoordinate {
            field: "DMS Position",
            token: text.to_owned(),
        })
    }
}

fn hemisphere_error(field: &'static str, hem: char, expected: &'static str) -> Error {
    Error::InvalidVariant {
        field,
        token: hem.to_string(),
        expected,
    }
}

/// Converts `DD:MM:SS.s`, `DD:MM` or `DD` to decimal degrees.
fn dms_to_decimal(s: &str) -> Result<f64, Error> {
    let mut components = s.split(':').map(|c| f64::from_token(c.trim()));

    let deg = components.next().unwrap_or(Ok(0.0))?;
    let min = components.next().unwrap_or(Ok(0.0))?;
    let sec = components.next().unwrap_or(Ok(0.0))?;

    if components.next().is_some() || !(0.0..60.0).contains(&min) || !(0.0..60.0).contains(&sec)
    {
        return Err(Error::InvalidVariant {
            field: "DMS",
            token: s.to_owned(),
            expected: "DD:MM:SS",
        });
    }

    Ok(deg + min / 60.0 + sec / 3600.0)
}
