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

//! Resolution of procedure fixes to coordinates.
//!
//! Procedures name their fixes by identifier and region only. The fix is
//! looked up in the region first. Identifiers are reused around the world, so
//! without a match in the region the candidate nearest to the airport is
//! taken if it is close enough.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;
use crate::geom::{distance_nm, Coordinate};

/// Candidates farther away from the airport are never taken.
pub const DEFAULT_CEILING_NM: f64 = 500.0;

/// Number of resolved and unresolved fixes.
///
/// Legs that don't end at a fix are not counted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolutionStats {
    pub resolved: usize,
    pub unresolved: usize,
}

impl ResolutionStats {
    pub fn total(&self) -> usize {
        self.resolved + self.unresolved
    }
}

impl<'a> FromIterator<&'a ResolvedProcedure> for ResolutionStats {
    fn from_iter<T: IntoIterator<Item = &'a ResolvedProcedure>>(iter: T) -> Self {
        iter.into_iter()
            .flat_map(|proc| proc.waypoints.iter())
            .filter(|wp| wp.waypoint.fix_ident.is_some())
            .fold(Self::default(), |stats, wp| {
                if wp.resolved {
                    Self {
                        resolved: stats.resolved + 1,
                        ..stats
                    }
                } else {
                    Self {
                        unresolved: stats.unresolved + 1,
                        ..stats
                    }
                }
            })
    }
}

/// Returns `true` for runway fixes like `RW09` or `RW16L`.
///
/// These are placed relative to the airport and can't be looked up.
pub fn is_runway_fix(ident: &str) -> bool {
    let Some(rest) = ident.strip_prefix("RW") else {
        return false;
    };
    let bytes = rest.as_bytes();
    match bytes {
        [a, b] => a.is_ascii_digit() && b.is_ascii_digit(),
        [a, b, c] => a.is_ascii_digit() && b.is_ascii_digit() && matches!(c, b'L' | b'R' | b'C'),
        _ => false,
    }
}

/// Resolves the fixes of procedures against navigation data.
///
/// # Examples
///
/// ```
/// # use navdb::nd::{NavigationData, Procedure, ProcedureResolver};
/// # use navdb::geom::Coordinate;
/// # fn resolve(nd: &NavigationData, procedures: &[Procedure]) {
/// let ksea = Coordinate::new(47.449888889, -122.311777778);
/// let resolver = ProcedureResolver::new(nd);
///
/// for proc in resolver.resolve_all(procedures, ksea) {
///     if !proc.is_complete() {
///         println!("{} has unresolved fixes", proc.name);
///     }
/// }
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ProcedureResolver<'a> {
    data: &'a NavigationData,
    ceiling_nm: f64,
}

impl<'a> ProcedureResolver<'a> {
    pub fn new(data: &'a NavigationData) -> Self {
        Self {
            data,
            ceiling_nm: DEFAULT_CEILING_NM,
        }
    }

    /// Sets the maximum distance of candidates from the airport.
    pub fn with_ceiling(mut self, ceiling_nm: f64) -> Self {
        self.ceiling_nm = ceiling_nm;
        self
    }

    /// Resolves a fix to its coordinate.
    ///
    /// Navaids are searched before waypoints if the fix is a navaid. Returns
    /// `None` if the fix is unknown, a runway or only found farther away from
    /// the `reference` than the ceiling.
    pub fn resolve_fix(
        &self,
        ident: &str,
        region: Option<&str>,
        fix_type: FixType,
        reference: Coordinate,
    ) -> Option<Coordinate> {
        if is_runway_fix(ident) {
            return None;
        }

        let navaids = fix_type.is_navaid();

        let exact = region.and_then(|region| {
            navaids
                .then(|| self.data.find_navaid(ident, region))
                .flatten()
                .map(|navaid| navaid.coordinate)
                .or_else(|| {
                    self.data
                        .find_waypoint(ident, region)
                        .map(|wp| wp.coordinate)
                })
        });

        exact
            .or_else(|| {
                navaids
                    .then(|| self.nearest(self.data.navaids_by_ident(ident), reference))
                    .flatten()
            })
            .or_else(|| self.nearest(self.data.waypoints_by_ident(ident), reference))
            .map(Coordinate::from)
    }

    /// Returns the candidate nearest to the reference within the ceiling.
    fn nearest<T: Fix>(&self, candidates: &[Arc<T>], reference: Coordinate) -> Option<geo::Point<f64>> {
        candidates
            .iter()
            .map(|c| (distance_nm(reference.into(), c.coordinate()), c.coordinate()))
            .filter(|(distance, _)| *distance <= self.ceiling_nm)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, point)| point)
    }

    /// Resolves all fixes of the procedure.
    pub fn resolve(&self, procedure: &Procedure, reference: Coordinate) -> ResolvedProcedure {
        let waypoints = procedure
            .waypoints
            .iter()
            .map(|wp| {
                let coordinate = wp.fix_ident.as_deref().and_then(|ident| {
                    self.resolve_fix(ident, wp.fix_region.as_deref(), wp.fix_type, reference)
                });

                ResolvedProcedureWaypoint {
                    waypoint: wp.clone(),
                    coordinate,
                    resolved: coordinate.is_some(),
                }
            })
            .collect();

        ResolvedProcedure {
            procedure_type: procedure.procedure_type,
            name: procedure.name.clone(),
            runway: procedure.runway.clone(),
            transition: procedure.transition.clone(),
            waypoints,
        }
    }

    pub fn resolve_all(&self, procedures: &[Procedure], reference: Coordinate) -> Vec<ResolvedProcedure> {
        procedures
            .iter()
            .map(|proc| self.resolve(proc, reference))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KSEA: Coordinate = Coordinate {
        latitude: 47.449888889,
        longitude: -122.311777778,
    };

    fn waypoint(ident: &str, region: &str, lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            ident: ident.to_string(),
            coordinate: coord!(lat, lon),
            region: region.to_string(),
            area: String::from(ENROUTE),
            description: String::new(),
        }
    }

    fn leg(ident: &str, region: &str, fix_type: FixType) -> ProcedureWaypoint {
        ProcedureWaypoint {
            fix_ident: Some(ident.to_string()),
            fix_region: Some(region.to_string()),
            fix_type,
            path_terminator: String::from("TF"),
            course: None,
            distance: None,
            altitude: None,
            speed: None,
            turn_direction: None,
        }
    }

    fn data(waypoints: Vec<Waypoint>) -> NavigationData {
        let mut builder = NavigationData::builder();
        builder.add_waypoints(waypoints);
        builder.build()
    }

    #[test]
    fn exact_region_beats_nearer_candidate() {
        // the K2 fix is farther away than the K1 fix but in the right region
        let nd = data(vec![
            waypoint("ABCDE", "K1", 47.5, -122.3),
            waypoint("ABCDE", "K2", 40.0, -100.0),
        ]);
        let resolver = ProcedureResolver::new(&nd);

        assert_eq!(
            resolver.resolve_fix("ABCDE", Some("K2"), FixType::EnrouteWaypoint, KSEA),
            Some(Coordinate::new(40.0, -100.0))
        );
    }

    #[test]
    fn nearest_candidate_within_ceiling() {
        // 40 NM north of KSEA and about 4000 NM away in Europe
        let near = waypoint("XYZ12", "K1", KSEA.latitude + 40.0 / 60.0, KSEA.longitude);
        let far = waypoint("XYZ12", "ED", 53.0, 10.0);
        assert!(distance_nm(KSEA.into(), far.coordinate) > 4000.0);

        let nd = data(vec![far.clone(), near.clone()]);
        let resolver = ProcedureResolver::new(&nd);
        assert_eq!(
            resolver.resolve_fix("XYZ12", Some("K2"), FixType::TerminalWaypoint, KSEA),
            Some(near.coordinate.into())
        );

        let nd = data(vec![far]);
        let resolver = ProcedureResolver::new(&nd);
        assert_eq!(
            resolver.resolve_fix("XYZ12", Some("K2"), FixType::TerminalWaypoint, KSEA),
            None
        );
    }

    #[test]
    fn runway_fixes_are_unresolved() {
        let nd = data(vec![waypoint("RW09", "K1", KSEA.latitude, KSEA.longitude)]);
        let resolver = ProcedureResolver::new(&nd);

        assert_eq!(resolver.resolve_fix("RW09", Some("K1"), FixType::Runway, KSEA), None);
        assert_eq!(resolver.resolve_fix("RW16L", Some("K1"), FixType::Runway, KSEA), None);

        assert!(is_runway_fix("RW09"));
        assert!(is_runway_fix("RW34C"));
        assert!(!is_runway_fix("RW9"));
        assert!(!is_runway_fix("RW09X"));
        assert!(!is_runway_fix("RWABC"));
    }

    #[test]
    fn navaid_fix_prefers_navaids() {
        let mut builder = NavigationData::builder();
        builder.add_waypoints([waypoint("SEA", "K1", 47.0, -122.0)]);
        builder.add_navaids(
            convert::navaids(
                "I\n1200 Version - Copyright\n\
                 3  47.43538889 -122.30961111    354 11680 130   19.0 SEA ENRT K1 SEATTLE VORTAC\n99\n",
            ),
        );
        let nd = builder.build();
        let resolver = ProcedureResolver::new(&nd);

        assert_eq!(
            resolver.resolve_fix("SEA", Some("K1"), FixType::VhfNavaid, KSEA),
            Some(Coordinate::new(47.43538889, -122.30961111))
        );
        assert_eq!(
            resolver.resolve_fix("SEA", Some("K1"), FixType::EnrouteWaypoint, KSEA),
            Some(Coordinate::new(47.0, -122.0))
        );
    }

    #[test]
    fn partially_resolved_procedure() {
        let nd = data(vec![waypoint("ABCDE", "K1", 47.5, -122.3)]);
        let resolver = ProcedureResolver::new(&nd);

        let mut no_fix = leg("", "", FixType::Other);
        no_fix.fix_ident = None;
        no_fix.fix_region = None;
        no_fix.path_terminator = String::from("VA");

        let procedure = Procedure {
            procedure_type: ProcedureType::Sid,
            name: String::from("ABCDE1"),
            runway: Some(String::from("RW16L")),
            transition: None,
            waypoints: vec![
                leg("RW16L", "K1", FixType::Runway),
                no_fix,
                leg("ABCDE", "K1", FixType::TerminalWaypoint),
                leg("NOPE", "K1", FixType::TerminalWaypoint),
            ],
        };

        let resolved = resolver.resolve_all(&[procedure], KSEA);
        let proc = &resolved[0];
        assert!(!proc.is_complete());
        assert_eq!(
            proc.waypoints.iter().map(|wp| wp.resolved).collect::<Vec<_>>(),
            vec![false, false, true, false]
        );
        assert_eq!(proc.waypoints[2].coordinate, Some(Coordinate::new(47.5, -122.3)));

        let stats: ResolutionStats = resolved.iter().collect();
        assert_eq!(
            stats,
            ResolutionStats {
                resolved: 1,
                unresolved: 2
            }
        );
    }
}
