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
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Distance, Haversine};

/// Meters per nautical mile.
pub const NM_IN_M: f64 = 1852.0;

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the great-circle distance in nautical miles to the `other`.
    ///
    /// Uses the haversine formula on a sphere with the mean earth radius.
    pub fn distance_nm(&self, other: &Coordinate) -> f64 {
        distance_nm((*self).into(), (*other).into())
    }
}

/// Returns the great-circle distance in nautical miles between two points.
pub fn distance_nm(a: geo::Point<f64>, b: geo::Point<f64>) -> f64 {
    Haversine.distance(a, b) / NM_IN_M
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seattle VORTAC
    const SEA: Coordinate = Coordinate {
        latitude: 47.43538889,
        longitude: -122.30961111,
    };
    // Paine Field
    const KPAE: Coordinate = Coordinate {
        latitude: 47.90633333,
        longitude: -122.28155556,
    };

    #[test]
    fn distance() {
        // the chart rounds to whole miles
        assert_eq!(SEA.distance_nm(&KPAE).round(), 28.0);
    }

    #[test]
    fn one_minute_of_latitude() {
        // one minute of arc is slightly more than a nautical mile on the
        // mean earth sphere
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0 / 60.0, 0.0);
        let d = a.distance_nm(&b);
        assert!(d > 1.0 && d < 1.001);
    }
}
