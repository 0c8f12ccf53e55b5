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

//! Two values packed into one number.
//!
//! X-Plane stores the magnetic course of a localizer and the glidepath angle
//! of a glideslope, GLS or threshold point in the same column as the true
//! bearing. Each packing is a decode/encode pair where
//! `encode(decode(v)) == v` holds exactly for every valid `v`.

use crate::{Error, Field};

const LOCALIZER_FACTOR: f64 = 360.0;
const GLIDEPATH_FACTOR: f64 = 100_000.0;

/// Localizer bearing packed as `magnetic_course × 360 + true_bearing`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LocalizerBearing {
    /// Magnetic course in whole degrees.
    pub magnetic_course: u32,
    /// True bearing in degrees in the range `[0, 360)`.
    pub true_bearing: f64,
}

impl LocalizerBearing {
    pub fn decode(value: f64) -> Self {
        let (high, low) = split(value, LOCALIZER_FACTOR);
        Self {
            magnetic_course: high,
            true_bearing: low,
        }
    }

    pub fn encode(&self) -> f64 {
        self.magnetic_course as f64 * LOCALIZER_FACTOR + self.true_bearing
    }
}

impl Field<'_> for LocalizerBearing {
    fn from_token(token: &str) -> Result<Self, Error> {
        packed(token, "Localizer Bearing").map(Self::decode)
    }
}

/// Glidepath packed as `angle_hundredths × 100000 + true_course`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Glidepath {
    /// Glidepath angle in hundredths of a degree.
    pub angle_hundredths: u32,
    /// True course in degrees.
    pub true_course: f64,
}

impl Glidepath {
    pub fn decode(value: f64) -> Self {
        let (high, low) = split(value, GLIDEPATH_FACTOR);
        Self {
            angle_hundredths: high,
            true_course: low,
        }
    }

    pub fn encode(&self) -> f64 {
        self.angle_hundredths as f64 * GLIDEPATH_FACTOR + self.true_course
    }

    /// Returns the glidepath angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle_hundredths as f64 / 100.0
    }
}

impl Field<'_> for Glidepath {
    fn from_token(token: &str) -> Result<Self, Error> {
        packed(token, "Glidepath").map(Self::decode)
    }
}

/// Splits `value` into the quotient and remainder of `factor`.
///
/// The remainder is computed by `rem_euclid` which is exact, so is the
/// difference `value - remainder`. The quotient is therefore an exact integer
/// and the packing can be reversed without loss.
fn split(value: f64, factor: f64) -> (u32, f64) {
    let low = value.rem_euclid(factor);
    let high = ((value - low) / factor) as u32;
    (high, low)
}

fn packed(token: &str, field: &'static str) -> Result<f64, Error> {
    let value = f64::from_token(token)?;
    if value.is_finite() && value >= 0.0 && value < u32::MAX as f64 {
        Ok(value)
    } else {
        Err(Error::InvalidVariant {
            field,
            token: token.to_owned(),
            expected: "a positive packed number",
        })
    }
}
