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

//! Decoding of X-Plane data files into navigation data.
//!
//! Every function takes the whole file as text. Lines that can't be decoded
//! are dropped and the rest of the file is still read.

use navdat::fields::Cycle;

use crate::nd::*;

mod fields;
mod records;

/// Decodes the navaid table (`earth_nav.dat`).
pub fn navaids(text: &str) -> Vec<Navaid> {
    navdat::records::navaid::parse(text)
        .filter_map(|record| {
            Navaid::try_from(record)
                .inspect_err(|e| log::trace!("dropping navaid: {e}"))
                .ok()
        })
        .collect()
}

/// Returns the AIRAC cycle from the header of a table.
pub fn cycle(text: &str) -> Option<AiracCycle> {
    Cycle::from_header(text).map(Into::into)
}

/// Decodes the fix table (`earth_fix.dat`).
pub fn waypoints(text: &str) -> Vec<Waypoint> {
    navdat::records::waypoint::parse(text)
        .map(Waypoint::from)
        .collect()
}

/// Decodes the airway table (`earth_awy.dat`).
///
/// The endpoints of the segments have no coordinates yet.
pub fn airways(text: &str) -> Vec<AirwaySegment> {
    navdat::records::airway::parse(text)
        .flat_map(records::airway_segments)
        .collect()
}

/// Decodes an OpenAir airspace file.
pub fn airspaces(text: &str) -> Vec<Airspace> {
    navdat::records::airspace::parse(text)
        .map(Airspace::from)
        .collect()
}

/// Decodes the procedures of one airport (`CIFP/<ICAO>.dat`).
pub fn procedures(text: &str) -> Vec<Procedure> {
    navdat::records::procedure::parse(text)
        .into_iter()
        .map(Procedure::from)
        .collect()
}

/// Decodes the holding pattern table (`earth_hold.dat`).
pub fn holds(text: &str) -> Vec<HoldingPattern> {
    navdat::records::hold::parse(text)
        .map(HoldingPattern::from)
        .collect()
}

/// Decodes the MSA table (`earth_msa.dat`).
pub fn msa_sectors(text: &str) -> Vec<MsaSector> {
    navdat::records::msa::parse(text)
        .flat_map(records::msa_sectors)
        .collect()
}

/// Decodes the MORA grid (`earth_mora.dat`).
pub fn mora_cells(text: &str) -> Vec<MoraCell> {
    navdat::records::mora::parse(text)
        .map(MoraCell::from)
        .collect()
}

/// Decodes the airport metadata table (`earth_aptmeta.dat`).
pub fn airport_metadata(text: &str) -> Vec<AirportMetadata> {
    navdat::records::airport_meta::parse(text)
        .map(AirportMetadata::from)
        .collect()
}

/// Decodes the ATC table (`atc.dat`).
pub fn controllers(text: &str) -> Vec<AtcController> {
    navdat::records::atc::parse(text)
        .map(AtcController::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_navaid_is_dropped() {
        let text = "I\n\
            1200 Version - data cycle 2305, build 20230418, metadata NavXP1200. Copyright\n\
            \n\
            3  47.43538889 -122.30961111    354 11680 130   19.0 SEA ENRT K1 SEATTLE VOR/DME\n\
            3  47.91950000 -122.27783333    600 11160  40   20.0 PAE ENRT K1 PAINE VORTAC\n\
            3  47.43538889 -122.30961111    354 11680\n\
            99\n";

        let navaids = navaids(text);
        assert_eq!(navaids.len(), 2);
        assert_eq!(navaids[0].navaid_type, NavaidType::VorDme);
        assert_eq!(navaids[0].country, "K");
        assert_eq!(navaids[1].navaid_type, NavaidType::Vortac);
        assert_eq!(navaids[1].variation, Some(20.0));

        assert_eq!(cycle(text), Some(AiracCycle { year: 23, cycle: 5 }));
    }

    #[test]
    fn decodes_localizer_and_glideslope() {
        let text = "I\n\
            1200 Version - Copyright\n\
            \n\
            4  47.44117300 -122.31189000    433 11090  18   59220.343 ISNQ KSEA K1 16L ILS-cat-III\n\
            6  47.46102500 -122.30886900    433 11090  10 300343.603 ISNQ KSEA K1 16L GS\n\
            99\n";

        let navaids = navaids(text);
        assert_eq!(navaids.len(), 2);

        let loc = &navaids[0];
        assert_eq!(loc.navaid_type, NavaidType::Ils);
        assert_eq!(loc.magnetic_course, Some(164));
        assert!((loc.bearing.unwrap() - 180.343).abs() < 1e-9);
        assert_eq!(loc.airport.as_deref(), Some("KSEA"));
        assert_eq!(loc.runway.as_deref(), Some("16L"));

        let gs = &navaids[1];
        assert_eq!(gs.navaid_type, NavaidType::Gs);
        assert_eq!(gs.glidepath_angle, Some(3.0));
        assert!((gs.bearing.unwrap() - 343.603).abs() < 1e-9);
    }

    #[test]
    fn airway_line_per_name() {
        let text = "I\n\
            1100 Version\n\
            \n\
            ABCDE K2 11 SEA K1 3 N 1 180 450 J1-V2\n\
            99\n";

        let segments = airways(text);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].name, "J1");
        assert_eq!(segments[1].name, "V2");
        assert_eq!(segments[0].to.fix_type, FixType::VhfNavaid);
        assert!(segments[0].from.coordinate.is_none());
        assert!(!segments[0].high);
    }

    #[test]
    fn enroute_hold_has_no_airport() {
        let text = "I\n\
            1140 Version\n\
            \n\
            ABCDE K2 ENRT 11 93.0 1.0 0.0 R 6000 18000 0\n\
            99\n";

        let holds = holds(text);
        assert_eq!(holds.len(), 1);
        assert_eq!(holds[0].airport, None);
        assert_eq!(holds[0].leg_time, Some(1.0));
        assert_eq!(holds[0].leg_distance, None);
        assert_eq!(holds[0].speed, None);
    }

    #[test]
    fn msa_sectors_wrap() {
        let text = "I\n\
            1150 Version - Copyright\n\
            \n\
            SEA K1 KSEA 3 0 60 25 180 40 25\n\
            99\n";

        let sectors = msa_sectors(text);
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].start_bearing, 0.0);
        assert_eq!(sectors[0].end_bearing, 180.0);
        assert_eq!(sectors[1].start_bearing, 180.0);
        assert_eq!(sectors[1].end_bearing, 0.0);
        assert_eq!(sectors[1].altitude, 4000);
    }

    #[test]
    fn mora_cell_contains() {
        let text = "I\n\
            1150 Version - Copyright\n\
            \n\
            47.0 -123.0 48.0 -122.0 8400\n\
            99\n";

        let cells = mora_cells(text);
        assert_eq!(cells.len(), 1);
        assert!(cells[0].contains(&coord!(47.5, -122.5)));
        assert!(!cells[0].contains(&coord!(46.5, -122.5)));
    }
}
