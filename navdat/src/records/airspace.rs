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

//! Airspace boundaries in the OpenAir format.
//!
//! Only polygons are supported. The commands `AC` (class), `AN` (name), `AH`
//! and `AL` (limits) and `DP` (point) are read, circles and arcs (`DC`, `DA`,
//! `DB` and `V`) are recognized but carry no geometry. An airspace without a
//! valid ring of at least three distinct points is not returned at all.

use crate::fields::parse_dms_position;
use crate::{Error, Field, Lines, NoHeader, Text};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AirspaceClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Ctr,
    Tma,
    Restricted,
    Prohibited,
    Danger,
    Other,
}

impl Field<'_> for AirspaceClass {
    fn from_token(token: &str) -> Result<Self, Error> {
        Ok(match token {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "E" => Self::E,
            "F" => Self::F,
            "G" => Self::G,
            "CTR" => Self::Ctr,
            "TMA" => Self::Tma,
            "R" => Self::Restricted,
            "P" => Self::Prohibited,
            "Q" => Self::Danger,
            _ => Self::Other,
        })
    }
}

/// An airspace with a closed boundary.
#[derive(Clone, PartialEq, Debug)]
pub struct Airspace<'a> {
    pub class: AirspaceClass,
    pub name: Text<'a>,
    /// Upper limit as written, e.g. `FL195` or `4500ft MSL`.
    pub upper: Text<'a>,
    /// Lower limit as written, e.g. `GND`.
    pub lower: Text<'a>,
    /// Closed ring of `(latitude, longitude)` pairs.
    pub boundary: Vec<(f64, f64)>,
}

struct Partial<'a> {
    class: AirspaceClass,
    name: Text<'a>,
    upper: Text<'a>,
    lower: Text<'a>,
    points: Vec<(f64, f64)>,
}

impl<'a> Partial<'a> {
    fn new(class: AirspaceClass) -> Self {
        Self {
            class,
            name: Text::default(),
            upper: Text::default(),
            lower: Text::default(),
            points: Vec::new(),
        }
    }

    /// Closes the ring and returns the airspace if the ring is valid.
    fn finish(mut self) -> Option<Airspace<'a>> {
        if let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) {
            if first != last {
                self.points.push(first);
            }
        }

        if !has_distinct_points(&self.points, 3) {
            log::trace!("dropping airspace {} without valid boundary", self.name);
            return None;
        }

        Some(Airspace {
            class: self.class,
            name: self.name,
            upper: self.upper,
            lower: self.lower,
            boundary: self.points,
        })
    }
}

fn has_distinct_points(points: &[(f64, f64)], n: usize) -> bool {
    let mut distinct: Vec<(f64, f64)> = Vec::with_capacity(n);
    for p in points {
        if !distinct.contains(p) {
            distinct.push(*p);
            if distinct.len() >= n {
                return true;
            }
        }
    }
    false
}

/// Iterator over the airspaces of an OpenAir file.
pub struct Airspaces<'a> {
    lines: Lines<'a, NoHeader>,
    current: Option<Partial<'a>>,
}

impl<'a> Airspaces<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: Lines::new(text, NoHeader),
            current: None,
        }
    }
}

impl<'a> Iterator for Airspaces<'a> {
    type Item = Airspace<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(line) = self.lines.next() else {
                // flush the last airspace once the input ends
                return self.current.take().and_then(Partial::finish);
            };

            if line.starts_with('*') {
                continue;
            }

            let (command, arg) = match line.split_once(char::is_whitespace) {
                Some((command, arg)) => (command, arg.trim()),
                None => (line, ""),
            };

            if command == "AC" {
                let class = AirspaceClass::from_token(arg).unwrap_or(AirspaceClass::Other);
                let previous = self.current.replace(Partial::new(class));
                if let Some(airspace) = previous.and_then(Partial::finish) {
                    return Some(airspace);
                }
                continue;
            }

            let Some(current) = self.current.as_mut() else {
                log::trace!("skipping line {} outside of airspace", self.lines.line_number());
                continue;
            };

            match command {
                "AN" => current.name = Text(arg),
                "AH" => current.upper = Text(arg),
                "AL" => current.lower = Text(arg),
                "DP" => match parse_dms_position(arg) {
                    Ok(point) => current.points.push(point),
                    Err(e) => log::trace!("skipping line {}: {e}", self.lines.line_number()),
                },
                "DC" | "DA" | "DB" | "V" => {}
                _ => log::trace!("unknown command {command} in line {}", self.lines.line_number()),
            }
        }
    }
}

/// Parses all airspaces with a valid boundary.
pub fn parse(text: &str) -> Airspaces<'_> {
    Airspaces::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRSPACES: &str = "* Test airspaces
AC D
AN SEATTLE CLASS D
AH 3000ft MSL
AL GND
DP 47:30:00 N 122:20:00 W
DP 47:30:00 N 122:10:00 W
DP 47:20:00 N 122:10:00 W

AC R
AN R-6703 CIRCLE
AH FL290
AL GND
V X=47:00:00 N 122:00:00 W
DC 5

AC CTR
AN DEGENERATE
DP 47:30:00 N 122:20:00 W
DP 47:30:00 N 122:20:00 W
DP 47:20:00 N 122:10:00 W
DP 47:30:00 N 122:20:00 W

AC Q
AN DANGER AREA
DP 47:00:00N 122:00:00W
DP 47:10:00N 122:00:00W
DP 47:10:00N 121:50:00W
DP 47:00:00N 122:00:00W
";

    #[test]
    fn only_valid_rings_are_returned() {
        let airspaces: Vec<_> = parse(AIRSPACES).collect();
        assert_eq!(airspaces.len(), 2);

        let d = &airspaces[0];
        assert_eq!(d.class, AirspaceClass::D);
        assert_eq!(d.name.to_string(), "SEATTLE CLASS D");
        assert_eq!(d.upper.to_string(), "3000ft MSL");
        assert_eq!(d.lower.to_string(), "GND");
        assert_eq!(d.boundary.len(), 4);
        assert_eq!(d.boundary[0], (47.5, -122.0 - 20.0 / 60.0));

        let q = &airspaces[1];
        assert_eq!(q.class, AirspaceClass::Danger);
        // already closed rings are not closed twice
        assert_eq!(q.boundary.len(), 4);
    }

    #[test]
    fn rings_are_closed() {
        for airspace in parse(AIRSPACES) {
            assert_eq!(airspace.boundary.first(), airspace.boundary.last());
            assert!(has_distinct_points(&airspace.boundary, 3));
        }
    }

    #[test]
    fn invalid_point_is_skipped() {
        let text = "AC C\nAN X\nDP 47:30:00 N 122:20:00 W\nDP garbage\nDP 47:30:00 N 122:10:00 W\nDP 47:20:00 N 122:10:00 W\n";
        let airspaces: Vec<_> = parse(text).collect();
        assert_eq!(airspaces.len(), 1);
        assert_eq!(airspaces[0].boundary.len(), 4);
    }
}
