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

//! Radius queries over the navigation data.
//!
//! Every query scans all entities of a kind. A bounding box around the circle
//! rejects most of them before the great-circle distance is computed.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Contains;

use super::*;
use crate::apt::AirportSummary;
use crate::geom::{Coordinate, SearchArea};

/// Restricts a navaid query.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidFilter {
    Family(NavaidFamily),
    Type(NavaidType),
}

impl NavaidFilter {
    pub fn matches(&self, navaid: &Navaid) -> bool {
        match self {
            Self::Family(family) => navaid.navaid_type.family() == *family,
            Self::Type(t) => navaid.navaid_type == *t,
        }
    }
}

/// The kind of entity to query.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    Navaid(Option<NavaidFilter>),
    Waypoint,
    Airway,
    Airspace,
    Airport,
}

/// An entity found by a query.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Entity {
    Navaid(Arc<Navaid>),
    Waypoint(Arc<Waypoint>),
    Airway(Arc<AirwaySegment>),
    Airspace(Arc<Airspace>),
    Airport(Arc<AirportSummary>),
}

impl Entity {
    /// The identifier or name of the entity.
    pub fn ident(&self) -> &str {
        match self {
            Self::Navaid(navaid) => &navaid.ident,
            Self::Waypoint(wp) => &wp.ident,
            Self::Airway(segment) => &segment.name,
            Self::Airspace(airspace) => &airspace.name,
            Self::Airport(airport) => &airport.icao,
        }
    }
}

impl NavigationData {
    /// Returns the entities of a kind within the radius around the center.
    ///
    /// An entity exactly at the radius is included. Airway segments are
    /// found if one of their endpoints is within the radius and airspaces if
    /// one of their boundary points is within the radius or the center is
    /// inside the airspace. The entities are not ordered.
    ///
    /// # Examples
    ///
    /// ```
    /// # use navdb::nd::{EntityKind, NavaidFamily, NavaidFilter, NavigationData};
    /// # use navdb::geom::Coordinate;
    /// # fn query(nd: &NavigationData) {
    /// let seattle = Coordinate::new(47.45, -122.31);
    /// let vors = nd.within_radius(
    ///     EntityKind::Navaid(Some(NavaidFilter::Family(NavaidFamily::Vor))),
    ///     seattle,
    ///     50.0,
    /// );
    ///
    /// for vor in vors {
    ///     println!("{}", vor.ident());
    /// }
    /// # }
    /// ```
    pub fn within_radius(&self, kind: EntityKind, center: Coordinate, radius_nm: f64) -> Vec<Entity> {
        let area = SearchArea::new(center, radius_nm);

        match kind {
            EntityKind::Navaid(filter) => self
                .navaids()
                .iter()
                .filter(|navaid| filter.is_none_or(|f| f.matches(navaid)))
                .filter(|navaid| area.contains(&navaid.coordinate))
                .map(|navaid| Entity::Navaid(Arc::clone(navaid)))
                .collect(),

            EntityKind::Waypoint => self
                .waypoints()
                .iter()
                .filter(|wp| area.contains(&wp.coordinate))
                .map(|wp| Entity::Waypoint(Arc::clone(wp)))
                .collect(),

            EntityKind::Airway => self
                .airways()
                .iter()
                .filter(|segment| {
                    [segment.from.coordinate, segment.to.coordinate]
                        .iter()
                        .flatten()
                        .any(|point| area.contains(point))
                })
                .map(|segment| Entity::Airway(Arc::clone(segment)))
                .collect(),

            EntityKind::Airspace => self
                .airspaces()
                .iter()
                .filter(|airspace| {
                    airspace
                        .polygon
                        .exterior()
                        .points()
                        .any(|point| area.contains(&point))
                        || airspace.polygon.contains(&area.center())
                })
                .map(|airspace| Entity::Airspace(Arc::clone(airspace)))
                .collect(),

            EntityKind::Airport => self
                .airports()
                .iter()
                .filter(|airport| area.contains(&airport.coordinate.into()))
                .map(|airport| Entity::Airport(Arc::clone(airport)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apt::{FieldType, Provenance};
    use crate::geom::distance_nm;

    fn navaid(navaid_type: NavaidType, ident: &str, lat: f64, lon: f64) -> Navaid {
        Navaid {
            navaid_type,
            ident: ident.to_string(),
            name: ident.to_string(),
            coordinate: coord!(lat, lon),
            elevation: 0,
            frequency: 11680,
            range: 130,
            region: String::from("K1"),
            country: String::from("K"),
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

    fn waypoint(ident: &str, lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            ident: ident.to_string(),
            coordinate: coord!(lat, lon),
            region: String::from("K1"),
            area: String::from(ENROUTE),
            description: String::new(),
        }
    }

    fn idents(entities: Vec<Entity>) -> Vec<String> {
        let mut idents: Vec<_> = entities.iter().map(|e| e.ident().to_string()).collect();
        idents.sort();
        idents
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        //  47.9                WP2
        //
        //  47.4    center      r = distance to WP2
        let center = Coordinate::new(47.4, -122.3);
        let wp2 = waypoint("WP2", 47.9, -121.7);
        let radius = distance_nm(center.into(), wp2.coordinate);

        let mut builder = NavigationData::builder();
        builder.add_waypoints([wp2]);
        let nd = builder.build();

        assert_eq!(nd.within_radius(EntityKind::Waypoint, center, radius).len(), 1);
        assert!(nd
            .within_radius(EntityKind::Waypoint, center, radius - 1e-6)
            .is_empty());
    }

    #[test]
    fn filters_navaids_by_family_and_type() {
        //        -122.31     -122.28
        //  47.92            PAE (VORTAC)
        //  47.45  SEA (VOR)
        //  47.44  ISNQ (ILS)
        let mut builder = NavigationData::builder();
        builder.add_navaids([
            navaid(NavaidType::Vor, "SEA", 47.45, -122.31),
            navaid(NavaidType::Vortac, "PAE", 47.92, -122.28),
            navaid(NavaidType::Ils, "ISNQ", 47.44, -122.31),
        ]);
        let nd = builder.build();
        let center = Coordinate::new(47.45, -122.31);

        let all = nd.within_radius(EntityKind::Navaid(None), center, 50.0);
        assert_eq!(idents(all), vec!["ISNQ", "PAE", "SEA"]);

        let vors = nd.within_radius(
            EntityKind::Navaid(Some(NavaidFilter::Family(NavaidFamily::Vor))),
            center,
            50.0,
        );
        assert_eq!(idents(vors), vec!["PAE", "SEA"]);

        let vortacs = nd.within_radius(
            EntityKind::Navaid(Some(NavaidFilter::Type(NavaidType::Vortac))),
            center,
            50.0,
        );
        assert_eq!(idents(vortacs), vec!["PAE"]);

        // PAE is about 28 NM away
        let near = nd.within_radius(EntityKind::Navaid(None), center, 10.0);
        assert_eq!(idents(near), vec!["ISNQ", "SEA"]);
    }

    #[test]
    fn airspace_by_vertex_or_center() {
        //         -123.0          -121.0
        //  48.0    +---------------+
        //          |               |
        //  47.5    |       x       |   x = center far from every vertex
        //          |               |
        //  47.0    +---------------+
        //
        //  45.0            y           y = center outside
        let mut builder = NavigationData::builder();
        builder.add_airspaces([Airspace {
            name: String::from("WIDE"),
            class: AirspaceClass::E,
            upper: String::from("FL180"),
            lower: String::from("1200ft AGL"),
            polygon: polygon![
                (47.0, -123.0),
                (48.0, -123.0),
                (48.0, -121.0),
                (47.0, -121.0),
                (47.0, -123.0)
            ],
        }]);
        let nd = builder.build();

        let inside = nd.within_radius(EntityKind::Airspace, Coordinate::new(47.5, -122.0), 5.0);
        assert_eq!(idents(inside), vec!["WIDE"]);

        let outside = nd.within_radius(EntityKind::Airspace, Coordinate::new(45.0, -122.0), 5.0);
        assert!(outside.is_empty());

        // reaches the south-west corner
        let corner = nd.within_radius(EntityKind::Airspace, Coordinate::new(46.95, -123.0), 5.0);
        assert_eq!(idents(corner), vec!["WIDE"]);
    }

    #[test]
    fn airways_and_airports() {
        let mut builder = NavigationData::builder();
        builder.add_waypoints([waypoint("ABCDE", 47.0, -122.0), waypoint("FGHIJ", 49.0, -122.0)]);
        builder.add_airways([AirwaySegment {
            name: String::from("V23"),
            from: AirwayFix {
                ident: String::from("ABCDE"),
                region: String::from("K1"),
                fix_type: FixType::EnrouteWaypoint,
                coordinate: None,
            },
            to: AirwayFix {
                ident: String::from("FGHIJ"),
                region: String::from("K1"),
                fix_type: FixType::EnrouteWaypoint,
                coordinate: None,
            },
            high: false,
            direction: AirwayDirection::Forward,
            base: 0,
            top: 180,
        }]);
        builder.add_airports([AirportSummary {
            icao: String::from("KSEA"),
            name: String::from("Seattle Tacoma Intl"),
            coordinate: Coordinate::new(47.449888889, -122.311777778),
            field_type: FieldType::Land,
            provenance: Provenance::Global,
        }]);
        let nd = builder.build();

        let near_end = nd.within_radius(EntityKind::Airway, Coordinate::new(49.0, -122.1), 10.0);
        assert_eq!(idents(near_end), vec!["V23"]);

        // between the endpoints but far from both
        let middle = nd.within_radius(EntityKind::Airway, Coordinate::new(48.0, -122.0), 10.0);
        assert!(middle.is_empty());

        let airports = nd.within_radius(EntityKind::Airport, Coordinate::new(47.45, -122.3), 5.0);
        assert_eq!(idents(airports), vec!["KSEA"]);
    }
}
