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

//! Instrument procedures of one airport (`CIFP/<ICAO>.dat`).
//!
//! Each leg is one line like `SID:010,5,BANGR9,RW16L,SEA,K1,D, ,...;` whose
//! prefix names the procedure type. The transition column means different
//! things depending on the route type of the leg, see [`LegRole`].

use std::collections::HashMap;

use crate::fields::*;
use crate::{Error, Lines, NoHeader, Record, Token};

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ProcedureType {
    Sid,
    Star,
    Approach,
}

impl ProcedureType {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "SID" => Some(Self::Sid),
            "STAR" => Some(Self::Star),
            "APPCH" => Some(Self::Approach),
            _ => None,
        }
    }
}

/// The part of a procedure a leg belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum LegRole {
    /// The transition column holds the runway.
    RunwayTransition,
    /// The transition column holds the en-route transition.
    EnrouteTransition,
    CommonRoute,
    /// The transition column holds the approach transition.
    ApproachTransition,
    FinalApproach,
}

impl LegRole {
    pub fn new(procedure_type: ProcedureType, route_type: char) -> Self {
        match (procedure_type, route_type) {
            (ProcedureType::Sid, '1' | '4' | 'F' | 'T') => Self::RunwayTransition,
            (ProcedureType::Sid, '3' | '6' | 'S' | 'V') => Self::EnrouteTransition,
            (ProcedureType::Star, '3' | '6' | '9' | 'F') => Self::RunwayTransition,
            (ProcedureType::Star, '1' | '4' | '7' | 'S') => Self::EnrouteTransition,
            (ProcedureType::Approach, 'A') => Self::ApproachTransition,
            (ProcedureType::Approach, _) => Self::FinalApproach,
            _ => Self::CommonRoute,
        }
    }
}

/// The columns of a procedure leg.
#[derive(Clone, PartialEq, Debug, Record)]
#[navdat(delimiter = ',')]
pub struct Leg<'a> {
    pub sequence: u16,
    pub route_type: char,
    pub ident: Token<'a>,
    pub transition: Option<Token<'a>>,
    pub fix_ident: Option<Token<'a>>,
    pub fix_region: Option<Token<'a>>,
    pub fix_section: Option<char>,
    pub fix_subsection: Option<char>,
    pub description: Option<Token<'a>>,
    pub turn_direction: Option<TurnDirection>,
    pub rnp: Option<Token<'a>>,
    pub path_terminator: Token<'a>,
    #[navdat(skip(1))]
    pub recommended_navaid: Option<Token<'a>>,
    pub recommended_region: Option<Token<'a>>,
    #[navdat(skip(2))]
    pub arc_radius: Option<Token<'a>>,
    pub theta: Option<Tenths>,
    pub rho: Option<Tenths>,
    /// Magnetic course in degrees.
    pub course: Option<Tenths>,
    /// Distance in nautical miles or time in minutes.
    pub distance: Option<Tenths>,
    pub altitude_descriptor: AltitudeDescriptor,
    altitude1: Option<Token<'a>>,
    altitude2: Option<Token<'a>>,
    pub transition_altitude: Option<u32>,
    pub speed_descriptor: SpeedDescriptor,
    /// Speed limit in knots.
    pub speed: Option<u32>,
    /// Vertical angle in hundredths of a degree.
    pub vertical_angle: Option<i32>,
}

impl Leg<'_> {
    /// Decodes the altitude constraint of the leg.
    pub fn altitude(&self) -> Result<Option<AltitudeConstraint>, Error> {
        AltitudeConstraint::new(
            self.altitude_descriptor,
            self.altitude1.map_or("", |t| t.as_str()),
            self.altitude2.map_or("", |t| t.as_str()),
        )
    }

    /// Returns the kind of the fix this leg terminates at.
    pub fn fix_type(&self) -> FixType {
        FixType::from_section(self.fix_section, self.fix_subsection)
    }
}

/// A single leg with its procedure type and decoded altitude.
#[derive(Clone, PartialEq, Debug)]
pub struct ProcedureLine<'a> {
    pub procedure_type: ProcedureType,
    pub leg: Leg<'a>,
    pub altitude: Option<AltitudeConstraint>,
}

impl<'a> ProcedureLine<'a> {
    /// Parses a procedure line.
    ///
    /// Returns `Ok(None)` for lines of other kinds like `RWY:` or `PRDAT:`.
    pub fn from_line(line: &'a str) -> Result<Option<Self>, Error> {
        let Some((prefix, columns)) = line.split_once(':') else {
            return Ok(None);
        };
        let Some(procedure_type) = ProcedureType::from_prefix(prefix.trim()) else {
            return Ok(None);
        };

        let leg = Leg::from_line(columns.trim_end().trim_end_matches(';'))?;
        let altitude = leg.altitude()?;

        Ok(Some(Self {
            procedure_type,
            leg,
            altitude,
        }))
    }

    pub fn role(&self) -> LegRole {
        LegRole::new(self.procedure_type, self.leg.route_type)
    }
}

/// A procedure reassembled from its legs.
#[derive(Clone, PartialEq, Debug)]
pub struct Procedure<'a> {
    pub procedure_type: ProcedureType,
    pub ident: Token<'a>,
    /// The runway like `RW16L`, `None` if the procedure serves all runways.
    pub runway: Option<String>,
    pub transition: Option<Token<'a>>,
    pub legs: Vec<ProcedureLine<'a>>,
}

/// Derives the runway of an approach from its identifier.
///
/// The first letter names the approach type and is followed by the runway
/// number and designator, e.g. `I25R` or `R16LY`. Circling approaches like
/// `VDM-A` have no runway.
pub fn approach_runway(ident: &str) -> Option<String> {
    let number = ident.get(1..3)?;
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let designator = ident[3..]
        .chars()
        .next()
        .filter(|c| matches!(c, 'L' | 'R' | 'C'));

    let mut runway = format!("RW{number}");
    runway.extend(designator);
    Some(runway)
}

fn runway_and_transition<'a>(line: &ProcedureLine<'a>) -> (Option<String>, Option<Token<'a>>) {
    let transition = line.leg.transition;
    match line.role() {
        LegRole::RunwayTransition => (transition.map(String::from), None),
        LegRole::EnrouteTransition => (None, transition),
        LegRole::CommonRoute => (None, None),
        LegRole::ApproachTransition => (approach_runway(line.leg.ident.as_str()), transition),
        LegRole::FinalApproach => (approach_runway(line.leg.ident.as_str()), None),
    }
}

/// Parses all procedures of an airport.
///
/// Legs are grouped by procedure type, name, runway and transition. The
/// procedures are returned in the order they appear first.
pub fn parse(text: &str) -> Vec<Procedure<'_>> {
    let mut procedures: Vec<Procedure<'_>> = Vec::new();
    let mut index: HashMap<(ProcedureType, &str, String, &str), usize> = HashMap::new();
    let mut lines = Lines::new(text, NoHeader);

    while let Some(line) = lines.next() {
        let line = match ProcedureLine::from_line(line) {
            Ok(Some(line)) => line,
            Ok(None) => continue,
            Err(e) => {
                log::trace!("skipping line {}: {e}", lines.line_number());
                continue;
            }
        };

        let (runway, transition) = runway_and_transition(&line);
        let key = (
            line.procedure_type,
            line.leg.ident.as_str(),
            runway.clone().unwrap_or_else(|| "ALL".to_string()),
            transition.map_or("", |t| t.as_str()),
        );

        match index.get(&key) {
            Some(&i) => procedures[i].legs.push(line),
            None => {
                index.insert(key, procedures.len());
                procedures.push(Procedure {
                    procedure_type: line.procedure_type,
                    ident: line.leg.ident,
                    runway,
                    transition,
                    legs: vec![line],
                });
            }
        }
    }

    procedures
}
