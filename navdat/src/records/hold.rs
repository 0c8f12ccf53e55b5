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
use crate::{BannerHeader, Record, Records, Token};

/// A line of the holding pattern table (`earth_hold.dat`).
#[derive(Clone, PartialEq, Debug, Record)]
pub struct Hold<'a> {
    pub fix_ident: Token<'a>,
    pub fix_region: Token<'a>,
    /// The airport owning the hold or `ENRT`.
    pub airport: Token<'a>,
    pub fix_type: FixType,
    pub inbound_course: f64,
    /// Leg time in minutes, zero if the leg is defined by distance.
    pub leg_time: f64,
    /// Leg distance in nautical miles, zero if the leg is timed.
    pub leg_distance: f64,
    pub turn: TurnDirection,
    pub min_altitude: u32,
    pub max_altitude: u32,
    /// Speed limit in knots, zero if none.
    pub speed: u32,
}

impl Hold<'_> {
    /// Returns `true` if the hold is not owned by an airport.
    pub fn is_enroute(&self) -> bool {
        self.airport == "ENRT"
    }
}

/// Parses all holding patterns.
pub fn parse(text: &str) -> impl Iterator<Item = Hold<'_>> {
    Records::new(text, BannerHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroute_hold() {
        let hold = Hold::try_from("ABCDE K2 ENRT 11 93.0 1.0 0.0 R 6000 18000 230")
            .expect("hold should parse");
        assert!(hold.is_enroute());
        assert_eq!(hold.fix_type, FixType::EnrouteWaypoint);
        assert_eq!(hold.inbound_course, 93.0);
        assert_eq!(hold.leg_time, 1.0);
        assert_eq!(hold.turn, TurnDirection::Right);
        assert_eq!(hold.min_altitude, 6000);
        assert_eq!(hold.max_altitude, 18000);
        assert_eq!(hold.speed, 230);
    }

    #[test]
    fn invalid_turn_drops_line() {
        let text = "I\n1140 Version - Copyright\nABCDE K2 KSEA 11 93.0 1.0 0.0 X 6000 18000 230\n99";
        assert_eq!(parse(text).count(), 0);
    }
}
