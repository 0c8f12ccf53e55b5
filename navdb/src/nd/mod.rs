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

//! Navigation Data.

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Contains;

use crate::apt::AirportSummary;
use crate::geom::Coordinate;

mod airspace;
mod airway;
mod atc;
mod builder;
pub mod convert;
mod cycle;
mod fix;
mod hold;
mod meta;
mod mora;
mod msa;
mod navaid;
mod procedure;
mod query;
mod resolver;
mod waypoint;

pub use airspace::{Airspace, AirspaceClass};
pub use airway::{AirwayDirection, AirwayFix, AirwaySegment};
pub use atc::{AtcController, AtcVolume};
pub use builder::NavigationDataBuilder;
pub use cycle::AiracCycle;
pub use fix::{Fix, FixType, TurnDirection};
pub use hold::HoldingPattern;
pub use meta::{AirportClass, AirportMetadata};
pub use mora::MoraCell;
pub use msa::MsaSector;
pub use navaid::{Navaid, NavaidFamily, NavaidType};
pub use procedure::*;
pub use query::{Entity, EntityKind, NavaidFilter};
pub use resolver::{is_runway_fix, ProcedureResolver, ResolutionStats, DEFAULT_CEILING_NM};
pub use waypoint::*;

type IdentIndex<T> = HashMap<String, Vec<Arc<T>>>;

/// Number of entities per kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Counts {
    pub airports: usize,
    pub navaids: usize,
    pub waypoints: usize,
    pub airspaces: usize,
    pub airways: usize,
    pub holds: usize,
    pub msa_sectors: usize,
    pub mora_cells: usize,
    pub airport_metadata: usize,
    pub controllers: usize,
}

/// All navigation data of one X-Plane installation.
///
/// The data is created by the [`NavigationDataBuilder`] and never changes.
/// Reloading the installation creates new navigation data.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationData {
    airports: Vec<Arc<AirportSummary>>,
    navaids: Vec<Arc<Navaid>>,
    waypoints: Vec<Arc<Waypoint>>,
    airspaces: Vec<Arc<Airspace>>,
    airways: Vec<Arc<AirwaySegment>>,
    holds: Vec<Arc<HoldingPattern>>,
    msa_sectors: Vec<Arc<MsaSector>>,
    mora_cells: Vec<Arc<MoraCell>>,
    airport_metadata: Vec<Arc<AirportMetadata>>,
    controllers: Vec<Arc<AtcController>>,
    cycle: Option<AiracCycle>,
    airports_by_icao: HashMap<String, Arc<AirportSummary>>,
    metadata_by_icao: HashMap<String, Arc<AirportMetadata>>,
    navaids_by_ident: IdentIndex<Navaid>,
    waypoints_by_ident: IdentIndex<Waypoint>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> NavigationDataBuilder {
        NavigationDataBuilder::new()
    }

    /// The AIRAC cycle of the navaid table.
    pub fn cycle(&self) -> Option<AiracCycle> {
        self.cycle
    }

    pub fn counts(&self) -> Counts {
        Counts {
            airports: self.airports.len(),
            navaids: self.navaids.len(),
            waypoints: self.waypoints.len(),
            airspaces: self.airspaces.len(),
            airways: self.airways.len(),
            holds: self.holds.len(),
            msa_sectors: self.msa_sectors.len(),
            mora_cells: self.mora_cells.len(),
            airport_metadata: self.airport_metadata.len(),
            controllers: self.controllers.len(),
        }
    }

    pub fn airports(&self) -> &[Arc<AirportSummary>] {
        &self.airports
    }

    pub fn navaids(&self) -> &[Arc<Navaid>] {
        &self.navaids
    }

    pub fn waypoints(&self) -> &[Arc<Waypoint>] {
        &self.waypoints
    }

    pub fn airspaces(&self) -> &[Arc<Airspace>] {
        &self.airspaces
    }

    pub fn airways(&self) -> &[Arc<AirwaySegment>] {
        &self.airways
    }

    pub fn holds(&self) -> &[Arc<HoldingPattern>] {
        &self.holds
    }

    pub fn msa_sectors(&self) -> &[Arc<MsaSector>] {
        &self.msa_sectors
    }

    pub fn mora_cells(&self) -> &[Arc<MoraCell>] {
        &self.mora_cells
    }

    pub fn airport_metadata(&self) -> &[Arc<AirportMetadata>] {
        &self.airport_metadata
    }

    pub fn controllers(&self) -> &[Arc<AtcController>] {
        &self.controllers
    }

    /// Returns the airport with the ICAO code.
    pub fn airport(&self, icao: &str) -> Option<&Arc<AirportSummary>> {
        self.airports_by_icao.get(icao)
    }

    /// Returns the metadata of the airport with the ICAO code.
    pub fn metadata(&self, icao: &str) -> Option<&Arc<AirportMetadata>> {
        self.metadata_by_icao.get(icao)
    }

    /// Returns all navaids with the identifier in any region.
    pub fn navaids_by_ident(&self, ident: &str) -> &[Arc<Navaid>] {
        self.navaids_by_ident
            .get(ident)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns all waypoints with the identifier in any region.
    ///
    /// Identifiers are not unique. The same identifier is used in different
    /// regions and for terminal waypoints of different airports.
    pub fn waypoints_by_ident(&self, ident: &str) -> &[Arc<Waypoint>] {
        self.waypoints_by_ident
            .get(ident)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the navaid with the identifier in the region.
    ///
    /// If the region has more than one navaid with the identifier, like a VOR
    /// and its DME, the first one in the navaid table is returned.
    pub fn find_navaid(&self, ident: &str, region: &str) -> Option<&Arc<Navaid>> {
        self.navaids_by_ident(ident)
            .iter()
            .find(|navaid| navaid.region == region)
    }

    /// Returns the waypoint with the identifier in the region.
    pub fn find_waypoint(&self, ident: &str, region: &str) -> Option<&Arc<Waypoint>> {
        self.waypoints_by_ident(ident)
            .iter()
            .find(|wp| wp.region == region)
    }

    /// Returns all airspaces that contain the point.
    ///
    /// Only the lateral boundary is checked, the vertical limits are not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use navdb::nd::NavigationData;
    /// # use navdb::geom::Coordinate;
    /// # fn check_airspace(nd: &NavigationData) {
    /// let position = Coordinate::new(47.45, -122.31);
    ///
    /// for airspace in nd.airspaces_at(position) {
    ///     println!("Inside {airspace}");
    /// }
    /// # }
    /// ```
    pub fn airspaces_at(&self, point: Coordinate) -> Vec<&Arc<Airspace>> {
        let point: geo::Point<f64> = point.into();
        self.airspaces
            .iter()
            .filter(|airspace| airspace.polygon.contains(&point))
            .collect()
    }

    /// Returns the MORA grid cell that contains the point.
    pub fn mora_at(&self, point: Coordinate) -> Option<&Arc<MoraCell>> {
        let point = point.into();
        self.mora_cells.iter().find(|cell| cell.contains(&point))
    }

    /// Returns the MSA sectors of an airport.
    pub fn msa_sectors_of<'a>(&'a self, icao: &'a str) -> impl Iterator<Item = &'a Arc<MsaSector>> {
        self.msa_sectors.iter().filter(move |s| s.airport == icao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airspace_at_point() {
        let mut builder = NavigationData::builder();
        builder.add_airspaces([Airspace {
            name: String::from("SEATTLE CLASS B"),
            class: AirspaceClass::B,
            upper: String::from("10000ft MSL"),
            lower: String::from("GND"),
            polygon: polygon![
                (47.6, -122.5),
                (47.6, -122.1),
                (47.3, -122.1),
                (47.3, -122.5),
                (47.6, -122.5)
            ],
        }]);
        let nd = builder.build();

        assert_eq!(nd.airspaces_at(Coordinate::new(47.45, -122.31)).len(), 1);
        assert!(nd.airspaces_at(Coordinate::new(47.9, -122.31)).is_empty());
    }

    #[test]
    fn lookup_by_ident_and_region() {
        let wp = |region: &str, lat: f64| Waypoint {
            ident: String::from("ABCDE"),
            coordinate: coord!(lat, -122.0),
            region: region.to_string(),
            area: ENROUTE.to_string(),
            description: String::new(),
        };

        let mut builder = NavigationData::builder();
        builder.add_waypoints([wp("K2", 40.0), wp("ED", 53.0)]);
        let nd = builder.build();

        assert_eq!(nd.waypoints_by_ident("ABCDE").len(), 2);
        assert_eq!(
            nd.find_waypoint("ABCDE", "ED").map(|wp| wp.coordinate.y()),
            Some(53.0)
        );
        assert!(nd.find_waypoint("ABCDE", "K1").is_none());
        assert!(nd.waypoints_by_ident("FGHIJ").is_empty());
    }
}
