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

use std::collections::HashMap;
use std::sync::Arc;

use crate::apt::AirportSummary;

use super::*;

/// Navigation data factory, which is used to build [navigation data].
///
/// [navigation data]: super::NavigationData
#[derive(Default)]
pub struct NavigationDataBuilder {
    airports: Vec<AirportSummary>,
    navaids: Vec<Navaid>,
    waypoints: Vec<Waypoint>,
    airspaces: Vec<Airspace>,
    airways: Vec<AirwaySegment>,
    holds: Vec<HoldingPattern>,
    msa_sectors: Vec<MsaSector>,
    mora_cells: Vec<MoraCell>,
    airport_metadata: Vec<AirportMetadata>,
    controllers: Vec<AtcController>,
    cycle: Option<AiracCycle>,
}

macro_rules! add_all {
    ($(#[$doc:meta])* $name:ident, $field:ident, $t:ty) => {
        $(#[$doc])*
        pub fn $name<I>(&mut self, items: I)
        where
            I: IntoIterator<Item = $t>,
        {
            self.$field.extend(items);
        }
    };
}

fn index<T: Fix>(items: &[Arc<T>]) -> IdentIndex<T> {
    let mut index: IdentIndex<T> = HashMap::new();
    for item in items {
        index
            .entry(item.ident().to_string())
            .or_default()
            .push(Arc::clone(item));
    }
    index
}

impl NavigationDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    add_all!(add_airports, airports, AirportSummary);
    add_all!(add_navaids, navaids, Navaid);
    add_all!(add_waypoints, waypoints, Waypoint);
    add_all!(add_airspaces, airspaces, Airspace);
    add_all!(
        /// Adds airway segments.
        ///
        /// The coordinates of the endpoints are resolved when the data is
        /// built.
        add_airways,
        airways,
        AirwaySegment
    );
    add_all!(add_holds, holds, HoldingPattern);
    add_all!(add_msa_sectors, msa_sectors, MsaSector);
    add_all!(add_mora_cells, mora_cells, MoraCell);
    add_all!(add_airport_metadata, airport_metadata, AirportMetadata);
    add_all!(add_controllers, controllers, AtcController);

    pub fn set_cycle(&mut self, cycle: Option<AiracCycle>) {
        self.cycle = cycle;
    }

    pub fn build(self) -> NavigationData {
        let navaids: Vec<Arc<Navaid>> = self.navaids.into_iter().map(Arc::new).collect();
        let waypoints: Vec<Arc<Waypoint>> = self.waypoints.into_iter().map(Arc::new).collect();
        let navaids_by_ident = index(&navaids);
        let waypoints_by_ident = index(&waypoints);

        let locate = |fix: &AirwayFix| -> Option<geo::Point<f64>> {
            let navaid = || {
                navaids_by_ident
                    .get(&fix.ident)?
                    .iter()
                    .find(|n| n.region == fix.region)
                    .map(|n| n.coordinate)
            };
            let waypoint = || {
                waypoints_by_ident
                    .get(&fix.ident)?
                    .iter()
                    .find(|wp| wp.region == fix.region)
                    .map(|wp| wp.coordinate)
            };

            if fix.fix_type.is_navaid() {
                navaid().or_else(waypoint)
            } else {
                waypoint().or_else(navaid)
            }
        };

        let mut unresolved = 0;
        let airways: Vec<Arc<AirwaySegment>> = self
            .airways
            .into_iter()
            .map(|mut segment| {
                segment.from.coordinate = locate(&segment.from);
                segment.to.coordinate = locate(&segment.to);
                if segment.from.coordinate.is_none() || segment.to.coordinate.is_none() {
                    unresolved += 1;
                }
                Arc::new(segment)
            })
            .collect();

        if unresolved > 0 {
            log::debug!("{unresolved} airway segments have an unknown endpoint");
        }

        let airports: Vec<Arc<AirportSummary>> = self.airports.into_iter().map(Arc::new).collect();
        let airports_by_icao = airports
            .iter()
            .map(|a| (a.icao.clone(), Arc::clone(a)))
            .collect();

        let airport_metadata: Vec<Arc<AirportMetadata>> =
            self.airport_metadata.into_iter().map(Arc::new).collect();
        let metadata_by_icao = airport_metadata
            .iter()
            .map(|m| (m.icao.clone(), Arc::clone(m)))
            .collect();

        NavigationData {
            airports,
            navaids,
            waypoints,
            airspaces: self.airspaces.into_iter().map(Arc::new).collect(),
            airways,
            holds: self.holds.into_iter().map(Arc::new).collect(),
            msa_sectors: self.msa_sectors.into_iter().map(Arc::new).collect(),
            mora_cells: self.mora_cells.into_iter().map(Arc::new).collect(),
            airport_metadata,
            controllers: self.controllers.into_iter().map(Arc::new).collect(),
            cycle: self.cycle,
            airports_by_icao,
            metadata_by_icao,
            navaids_by_ident,
            waypoints_by_ident,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(ident: &str, region: &str, fix_type: FixType) -> AirwayFix {
        AirwayFix {
            ident: ident.to_string(),
            region: region.to_string(),
            fix_type,
            coordinate: None,
        }
    }

    #[test]
    fn resolves_airway_endpoints() {
        let mut builder = NavigationData::builder();
        builder.add_waypoints([Waypoint {
            ident: String::from("ABCDE"),
            coordinate: coord!(47.0, -122.0),
            region: String::from("K1"),
            area: String::from(ENROUTE),
            description: String::new(),
        }]);
        builder.add_airways([AirwaySegment {
            name: String::from("V23"),
            from: fix("ABCDE", "K1", FixType::EnrouteWaypoint),
            to: fix("ABCDE", "K2", FixType::EnrouteWaypoint),
            high: false,
            direction: AirwayDirection::Both,
            base: 0,
            top: 180,
        }]);

        let nd = builder.build();
        let segment = &nd.airways()[0];
        assert_eq!(segment.from.coordinate, Some(coord!(47.0, -122.0)));
        assert_eq!(segment.to.coordinate, None);
    }
}
