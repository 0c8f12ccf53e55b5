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

//! Geometry helpers.

mod coordinate;

pub use coordinate::{distance_nm, Coordinate, NM_IN_M};

use geo::Point;

/// A circle on the earth with a cheap bounding box pre-check.
///
/// One nautical mile is less than a minute of arc on the mean earth sphere,
/// so an angular radius of `r = radius / 60` degrees covers the circle. The
/// box spans `r` degrees latitude and `asin(sin(r) / cos(lat))` degrees
/// longitude, the widest longitude offset a point of the circle can reach.
/// Points within the box are checked with the great-circle distance.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SearchArea {
    center: Point<f64>,
    radius_nm: f64,
    min_lat: f64,
    max_lat: f64,
    /// `None` if every longitude has to be checked.
    lon_range: Option<(f64, f64)>,
}

impl SearchArea {
    pub fn new(center: Coordinate, radius_nm: f64) -> Self {
        let lat_range = radius_nm / 60.0;
        let min_lat = center.latitude - lat_range;
        let max_lat = center.latitude + lat_range;

        let sin_ratio = lat_range.to_radians().sin() / center.latitude.to_radians().cos();
        let lon_range = if min_lat <= -90.0 || max_lat >= 90.0 || sin_ratio >= 1.0 {
            // the circle contains a pole
            None
        } else {
            let range = sin_ratio.asin().to_degrees();
            let min_lon = center.longitude - range;
            let max_lon = center.longitude + range;
            // TODO: Split the box instead of checking the whole globe when the
            // circle crosses the antimeridian.
            (min_lon >= -180.0 && max_lon <= 180.0).then_some((min_lon, max_lon))
        };

        Self {
            center: center.into(),
            radius_nm,
            min_lat,
            max_lat,
            lon_range,
        }
    }

    /// Returns `true` if the point is within the bounding box.
    #[inline]
    pub fn may_contain(&self, point: &Point<f64>) -> bool {
        let (lon, lat) = point.x_y();
        lat >= self.min_lat
            && lat <= self.max_lat
            && self
                .lon_range
                .is_none_or(|(min, max)| lon >= min && lon <= max)
    }

    /// Returns `true` if the point is within the radius, the radius included.
    #[inline]
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.may_contain(point) && distance_nm(self.center, *point) <= self.radius_nm
    }

    pub fn center(&self) -> Point<f64> {
        self.center
    }
}
