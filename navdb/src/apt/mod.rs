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

//! Airports of the global scenery and the custom scenery packs.
//!
//! The global airport table is read first. Every scenery pack then overrides
//! the airports it contains, so the last pack wins. An airport is counted once
//! and attributed to the pack whose version is kept.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use navdat::records::{self, AirportBlock};

use crate::geom::Coordinate;

mod store;

pub use store::{AirportStore, StoreLocation};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldType {
    Land,
    Seaplane,
    Heliport,
}

impl FieldType {
    /// The row code that starts the airport in `apt.dat`.
    pub fn code(&self) -> u8 {
        match self {
            Self::Land => 1,
            Self::Seaplane => 16,
            Self::Heliport => 17,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Land),
            16 => Some(Self::Seaplane),
            17 => Some(Self::Heliport),
            _ => None,
        }
    }
}

impl From<records::FieldType> for FieldType {
    fn from(value: records::FieldType) -> Self {
        match value {
            records::FieldType::Land => Self::Land,
            records::FieldType::Seaplane => Self::Seaplane,
            records::FieldType::Heliport => Self::Heliport,
        }
    }
}

/// Where an airport comes from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Provenance {
    /// The global airports shipped with X-Plane.
    Global,
    /// A custom scenery pack with its directory name.
    Custom { pack: String },
}

impl Display for Provenance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Custom { pack } => write!(f, "custom ({pack})"),
        }
    }
}

/// An airport with its `apt.dat` block.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportRecord {
    pub icao: String,
    pub name: String,
    pub coordinate: Coordinate,
    /// Elevation in feet.
    pub elevation: i32,
    pub field_type: FieldType,
    /// The block as it appears in the file.
    pub raw: String,
    pub provenance: Provenance,
}

impl AirportRecord {
    /// Creates the record of an airport block.
    ///
    /// Returns `None` if the airport has no datum, runway or helipad.
    pub fn from_block(block: &AirportBlock<'_>, provenance: Provenance) -> Option<Self> {
        let (latitude, longitude) = block.position()?;

        Some(Self {
            icao: block.icao.to_string(),
            name: block.name.to_string(),
            coordinate: Coordinate::new(latitude, longitude),
            elevation: block.elevation,
            field_type: block.field_type.into(),
            raw: block.raw.to_string(),
            provenance,
        })
    }

    pub fn summary(&self) -> AirportSummary {
        AirportSummary {
            icao: self.icao.clone(),
            name: self.name.clone(),
            coordinate: self.coordinate,
            field_type: self.field_type,
            provenance: self.provenance.clone(),
        }
    }
}

/// An airport without its raw block.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportSummary {
    pub icao: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub field_type: FieldType,
    pub provenance: Provenance,
}

/// Number of airports per source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportBreakdown {
    /// Airports only found in the global airports.
    pub global_only: usize,
    /// Airports of custom scenery packs.
    pub custom: usize,
    /// Packs that contribute at least one airport.
    pub packs: usize,
}

impl AirportBreakdown {
    pub fn total(&self) -> usize {
        self.global_only + self.custom
    }
}

/// Merges the global airports with the scenery packs.
///
/// # Examples
///
/// ```
/// use navdb::apt::{AirportOverlay, Provenance};
///
/// let global = "I\n1100 Version\n1 13 0 0 KJFK John F Kennedy Intl\n\
///               1302 datum_lat 40.639751\n1302 datum_lon -73.778925\n99\n";
/// let pack = "I\n1100 Version\n1 13 0 0 KJFK JFK Custom\n\
///             1302 datum_lat 40.64\n1302 datum_lon -73.78\n99\n";
///
/// let mut overlay = AirportOverlay::new();
/// overlay.add_global(global);
/// overlay.add_pack("KJFK Scenery", pack);
///
/// let breakdown = overlay.breakdown();
/// assert_eq!(breakdown.custom, 1);
/// assert_eq!(breakdown.global_only, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AirportOverlay {
    airports: BTreeMap<String, AirportRecord>,
}

impl AirportOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the airports of the global airport table.
    pub fn add_global(&mut self, text: &str) {
        self.add(text, Provenance::Global);
    }

    /// Adds the airports of a scenery pack, replacing airports with the same
    /// ICAO code.
    pub fn add_pack(&mut self, pack: &str, text: &str) {
        self.add(
            text,
            Provenance::Custom {
                pack: pack.to_string(),
            },
        );
    }

    fn add(&mut self, text: &str, provenance: Provenance) {
        for block in records::apt::parse(text) {
            match AirportRecord::from_block(&block, provenance.clone()) {
                Some(record) => {
                    self.airports.insert(record.icao.clone(), record);
                }
                None => log::debug!("dropping unplaceable airport {}", block.icao),
            }
        }
    }

    pub fn breakdown(&self) -> AirportBreakdown {
        let custom = self
            .airports
            .values()
            .filter(|a| matches!(a.provenance, Provenance::Custom { .. }))
            .count();

        AirportBreakdown {
            global_only: self.airports.len() - custom,
            custom,
            packs: self.packs_in_use().count(),
        }
    }

    /// Packs that contribute an airport.
    fn packs_in_use(&self) -> impl Iterator<Item = &str> {
        let mut seen = BTreeSet::new();
        self.airports.values().filter_map(move |a| match &a.provenance {
            Provenance::Custom { pack } if seen.insert(pack.as_str()) => Some(pack.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn get(&self, icao: &str) -> Option<&AirportRecord> {
        self.airports.get(icao)
    }

    /// Returns the merged airports ordered by ICAO code.
    pub fn into_records(self) -> Vec<AirportRecord> {
        self.airports.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL: &str = "I
1100 Generated by WorldEditor

1     13 0 0 KJFK John F Kennedy Intl
1302 datum_lat 40.639751
1302 datum_lon -73.778925
1     21 0 0 KLGA La Guardia
100 45.72 1 0 0.25 1 3 0 04  40.76926 -73.88415 0 0 2 0 0 1 22  40.78537 -73.87035 0 0 2 0 0 1
1      0 0 0 XXXX Nowhere
99
";

    const PACK: &str = "I
1100 Generated by WorldEditor

1     13 0 0 KJFK JFK Custom
1302 datum_lat 40.64
1302 datum_lon -73.78
1302 city New York
99
";

    #[test]
    fn pack_overrides_global() {
        let mut overlay = AirportOverlay::new();
        overlay.add_global(GLOBAL);
        overlay.add_pack("KJFK Scenery", PACK);

        assert_eq!(overlay.len(), 2);

        let kjfk = overlay.get("KJFK").expect("KJFK should be merged");
        assert_eq!(kjfk.name, "JFK Custom");
        assert_eq!(kjfk.coordinate, Coordinate::new(40.64, -73.78));
        assert_eq!(
            kjfk.provenance,
            Provenance::Custom {
                pack: "KJFK Scenery".to_string()
            }
        );
        assert!(kjfk.raw.ends_with("1302 city New York"));

        assert_eq!(
            overlay.breakdown(),
            AirportBreakdown {
                global_only: 1,
                custom: 1,
                packs: 1,
            }
        );
    }

    #[test]
    fn last_pack_wins() {
        let mut overlay = AirportOverlay::new();
        overlay.add_global(GLOBAL);
        overlay.add_pack("A", PACK);
        overlay.add_pack("B", &PACK.replace("JFK Custom", "JFK Other"));

        let kjfk = overlay.get("KJFK").expect("KJFK should be merged");
        assert_eq!(kjfk.name, "JFK Other");

        // pack A has no airport left
        assert_eq!(overlay.breakdown().packs, 1);
        assert_eq!(overlay.breakdown().total(), 2);
    }

    #[test]
    fn drops_unplaceable_airports() {
        let mut overlay = AirportOverlay::new();
        overlay.add_global(GLOBAL);

        assert!(overlay.get("XXXX").is_none());
        let klga = overlay.get("KLGA").expect("KLGA should be placed by its runway");
        assert_eq!(klga.coordinate, Coordinate::new(40.76926, -73.88415));
        assert_eq!(overlay.breakdown().global_only, 2);
    }
}
