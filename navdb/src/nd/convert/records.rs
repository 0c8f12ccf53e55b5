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

use geo::Rect;
use navdat::fields::{Latitude, Longitude};
use navdat::records;
use navdat::Token;

use crate::nd::*;

fn point(latitude: Latitude, longitude: Longitude) -> geo::Point<f64> {
    coord!(latitude.as_decimal(), longitude.as_decimal())
}

fn optional(token: Token) -> Option<String> {
    Some(token.to_string()).filter(|s| !s.is_empty())
}

/// A navaid with only the fields every row code has.
fn common(
    navaid_type: NavaidType,
    ident: Token,
    name: String,
    position: geo::Point<f64>,
    elevation: i32,
    region: Token,
) -> Navaid {
    let region = region.to_string();
    Navaid {
        navaid_type,
        ident: ident.to_string(),
        name,
        coordinate: position,
        elevation,
        frequency: 0,
        range: 0,
        country: region.chars().take(1).collect(),
        region,
        bearing: None,
        magnetic_course: None,
        glidepath_angle: None,
        variation: None,
        dme_bias: None,
        airport: None,
        runway: None,
        course: None,
        length_offset: None,
        threshold_crossing_height: None,
        reference_path: None,
        approach_performance: None,
    }
}

impl<'a> TryFrom<records::Navaid<'a>> for Navaid {
    type Error = navdat::Error;

    fn try_from(record: records::Navaid<'a>) -> Result<Self, Self::Error> {
        let code = record.code();
        let name = match &record {
            records::Navaid::Ndb(v) => v.name,
            records::Navaid::Vor(v) => v.name,
            records::Navaid::Localizer(v) => v.name,
            records::Navaid::Glideslope(v) => v.name,
            records::Navaid::Marker(v) => v.name,
            records::Navaid::Dme(v) => v.name,
            records::Navaid::Fpap(v) => v.performance,
            records::Navaid::Gls(v) => v.name,
            records::Navaid::ThresholdPoint(v) => v.reference,
        }
        .to_string();

        let navaid_type =
            NavaidType::classify(code, &name).ok_or_else(|| navdat::Error::UnknownRowCode {
                code: code.to_string(),
            })?;

        Ok(match record {
            records::Navaid::Ndb(v) => Navaid {
                frequency: v.frequency,
                range: v.range,
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Vor(v) => Navaid {
                frequency: v.frequency,
                range: v.range,
                variation: Some(v.slaved_variation),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Localizer(v) => Navaid {
                frequency: v.frequency,
                range: v.range,
                bearing: Some(v.bearing.true_bearing),
                magnetic_course: Some(v.bearing.magnetic_course),
                airport: optional(v.airport),
                runway: optional(v.runway),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Glideslope(v) => Navaid {
                frequency: v.frequency,
                range: v.range,
                bearing: Some(v.glidepath.true_course),
                glidepath_angle: Some(v.glidepath.angle()),
                airport: optional(v.airport),
                runway: optional(v.runway),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Marker(v) => Navaid {
                bearing: Some(v.bearing),
                airport: optional(v.airport),
                runway: optional(v.runway),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Dme(v) => Navaid {
                frequency: v.frequency,
                range: v.range,
                dme_bias: Some(v.bias),
                airport: optional(v.terminal).filter(|t| t != ENROUTE),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Fpap(v) => Navaid {
                frequency: v.channel,
                course: Some(v.course),
                length_offset: Some(v.length_offset),
                airport: optional(v.airport),
                runway: optional(v.runway),
                approach_performance: Some(v.performance.to_string()).filter(|p| !p.is_empty()),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::Gls(v) => Navaid {
                frequency: v.channel,
                bearing: Some(v.glidepath.true_course),
                glidepath_angle: Some(v.glidepath.angle()),
                airport: optional(v.airport),
                runway: optional(v.runway),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
            records::Navaid::ThresholdPoint(v) => Navaid {
                frequency: v.channel,
                bearing: Some(v.glidepath.true_course),
                glidepath_angle: Some(v.glidepath.angle()),
                threshold_crossing_height: Some(v.threshold_crossing_height),
                airport: optional(v.airport),
                runway: optional(v.runway),
                reference_path: v.reference.tokens().next().map(String::from),
                ..common(navaid_type, v.ident, name, point(v.latitude, v.longitude), v.elevation, v.region)
            },
        })
    }
}

impl<'a> From<records::Waypoint<'a>> for Waypoint {
    fn from(wp: records::Waypoint<'a>) -> Self {
        Waypoint {
            ident: wp.ident.to_string(),
            coordinate: point(wp.latitude, wp.longitude),
            region: wp.region.to_string(),
            area: wp.area.to_string(),
            description: wp.description.to_string(),
        }
    }
}

fn airway_fix(ident: Token, region: Token, fix_type: navdat::fields::FixType) -> AirwayFix {
    AirwayFix {
        ident: ident.to_string(),
        region: region.to_string(),
        fix_type: fix_type.into(),
        coordinate: None,
    }
}

/// Splits a line into one segment per airway it belongs to.
pub fn airway_segments(record: records::AirwaySegment<'_>) -> impl Iterator<Item = AirwaySegment> + '_ {
    let from = airway_fix(record.from_ident, record.from_region, record.from_type);
    let to = airway_fix(record.to_ident, record.to_region, record.to_type);

    record.names().map(move |name| AirwaySegment {
        name: name.to_string(),
        from: from.clone(),
        to: to.clone(),
        high: record.level == navdat::fields::AirwayLevel::High,
        direction: record.direction.into(),
        base: record.base,
        top: record.top,
    })
}

impl<'a> From<records::Airspace<'a>> for Airspace {
    fn from(arsp: records::Airspace<'a>) -> Self {
        Airspace {
            name: arsp.name.to_string(),
            class: arsp.class.into(),
            upper: arsp.upper.to_string(),
            lower: arsp.lower.to_string(),
            polygon: polygon!(ring: arsp.boundary),
        }
    }
}

impl<'a> From<records::Hold<'a>> for HoldingPattern {
    fn from(hold: records::Hold<'a>) -> Self {
        let positive = |v: f64| (v > 0.0).then_some(v);

        HoldingPattern {
            fix_ident: hold.fix_ident.to_string(),
            fix_region: hold.fix_region.to_string(),
            airport: (!hold.is_enroute()).then(|| hold.airport.to_string()),
            fix_type: hold.fix_type.into(),
            inbound_course: hold.inbound_course,
            leg_time: positive(hold.leg_time),
            leg_distance: positive(hold.leg_distance),
            turn: hold.turn.into(),
            min_altitude: hold.min_altitude,
            max_altitude: hold.max_altitude,
            speed: (hold.speed > 0).then_some(hold.speed),
        }
    }
}

impl<'a> From<records::AirportMeta<'a>> for AirportMetadata {
    fn from(meta: records::AirportMeta<'a>) -> Self {
        AirportMetadata {
            icao: meta.icao.to_string(),
            region: meta.region.to_string(),
            coordinate: point(meta.latitude, meta.longitude),
            elevation: meta.elevation,
            class: meta.class.into(),
            longest_runway: meta.longest_runway,
            ifr: meta.ifr,
            transition_altitude: meta.transition_altitude,
            transition_level: meta.transition_level,
        }
    }
}

/// Splits an MSA line into its sectors.
pub fn msa_sectors(msa: records::Msa<'_>) -> Vec<MsaSector> {
    msa.sectors
        .iter()
        .enumerate()
        .filter_map(|(i, sector)| {
            Some(MsaSector {
                fix_ident: msa.fix_ident.to_string(),
                fix_region: msa.fix_region.to_string(),
                airport: msa.airport.to_string(),
                fix_type: msa.fix_type.into(),
                start_bearing: sector.bearing,
                end_bearing: records::Sector::end_bearing(&msa.sectors, i)?,
                radius: sector.radius,
                altitude: sector.altitude,
            })
        })
        .collect()
}

impl From<records::MoraCell> for MoraCell {
    fn from(cell: records::MoraCell) -> Self {
        MoraCell {
            rect: Rect::new(
                geo::Coord {
                    x: cell.west,
                    y: cell.south,
                },
                geo::Coord {
                    x: cell.east,
                    y: cell.north,
                },
            ),
            altitude: cell.altitude,
        }
    }
}

impl<'a> From<records::Controller<'a>> for AtcController {
    fn from(ctrl: records::Controller<'a>) -> Self {
        AtcController {
            name: ctrl.name.to_string(),
            facility_id: ctrl.facility_id.map(String::from),
            role: ctrl.role.map(String::from),
            frequencies: ctrl.frequencies,
            volumes: ctrl
                .volumes
                .into_iter()
                .map(|volume| AtcVolume {
                    floor: volume.floor,
                    ceiling: volume.ceiling,
                    boundary: polygon!(ring: volume.boundary),
                })
                .collect(),
        }
    }
}

impl<'a> From<&records::ProcedureLine<'a>> for ProcedureWaypoint {
    fn from(line: &records::ProcedureLine<'a>) -> Self {
        let leg = &line.leg;

        ProcedureWaypoint {
            fix_ident: leg.fix_ident.map(String::from),
            fix_region: leg.fix_region.map(String::from),
            fix_type: leg.fix_type().into(),
            path_terminator: leg.path_terminator.to_string(),
            course: leg.course.map(|c| c.0),
            distance: leg.distance.map(|d| d.0),
            altitude: line.altitude.map(Into::into),
            speed: leg.speed.map(|speed| SpeedConstraint {
                descriptor: leg.speed_descriptor.into(),
                speed,
            }),
            turn_direction: leg.turn_direction.map(Into::into),
        }
    }
}

impl<'a> From<records::Procedure<'a>> for Procedure {
    fn from(proc: records::Procedure<'a>) -> Self {
        Procedure {
            procedure_type: proc.procedure_type.into(),
            name: proc.ident.to_string(),
            runway: proc.runway,
            transition: proc.transition.map(String::from),
            waypoints: proc.legs.iter().map(Into::into).collect(),
        }
    }
}
