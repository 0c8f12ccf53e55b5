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

//! Minimum off-route altitudes (`earth_mora.dat`).
//!
//! The table mixes two layouts. A line of five tokens is one explicit box
//! `south west north east altitude`. Longer lines are a row of one degree
//! cells `lat lon a0 a1 …` where cell `i` spans the longitudes `lon + i` to
//! `lon + i + 1` and altitudes are in hundreds of feet.

use crate::fields::{Latitude, Longitude};
use crate::record::Fields;
use crate::{Error, Field, Record, Records, StandardHeader};

/// A rectangular cell with its minimum off-route altitude.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MoraCell {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    /// Altitude in feet.
    pub altitude: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Mora {
    Cell(MoraCell),
    Row {
        latitude: f64,
        longitude: f64,
        /// Altitudes in hundreds of feet, `None` if unknown.
        altitudes: Vec<Option<u32>>,
    },
}

impl Mora {
    /// Returns all cells of the line.
    pub fn cells(&self) -> Vec<MoraCell> {
        match self {
            Self::Cell(cell) => vec![*cell],
            Self::Row {
                latitude,
                longitude,
                altitudes,
            } => altitudes
                .iter()
                .enumerate()
                .filter_map(|(i, alt)| {
                    // a cell beyond the range of feet counts as unknown
                    let altitude = (*alt)?.checked_mul(100)?;
                    let west = longitude + i as f64;
                    Some(MoraCell {
                        south: *latitude,
                        west,
                        north: latitude + 1.0,
                        east: west + 1.0,
                        altitude,
                    })
                })
                .collect(),
        }
    }
}

impl<'a> Record<'a> for Mora {
    fn parse(mut fields: Fields<'a>) -> Result<Self, Error> {
        match fields.len() {
            5 => Ok(Self::Cell(MoraCell {
                south: fields.next::<Latitude>()?.as_decimal(),
                west: fields.next::<Longitude>()?.as_decimal(),
                north: fields.next::<Latitude>()?.as_decimal(),
                east: fields.next::<Longitude>()?.as_decimal(),
                altitude: fields.next()?,
            })),
            n if n > 5 => {
                let latitude = fields.next::<Latitude>()?.as_decimal();
                let longitude = fields.next::<Longitude>()?.as_decimal();
                let mut altitudes = Vec::with_capacity(n - 2);
                while let Some(token) = fields.peek() {
                    // unknown or garbled cells keep their column
                    altitudes.push(u32::from_token(token).ok());
                    fields.skip(1);
                }
                Ok(Self::Row {
                    latitude,
                    longitude,
                    altitudes,
                })
            }
            n => Err(Error::MissingField { index: n }),
        }
    }
}

/// Parses all MORA cells.
pub fn parse(text: &str) -> impl Iterator<Item = MoraCell> + '_ {
    Records::<Mora, _>::new(text, StandardHeader).flat_map(|mora| mora.cells())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_box() {
        let mora = Mora::from_line("47.0 -123.0 48.0 -122.0 8900").expect("should parse");
        assert_eq!(
            mora.cells(),
            vec![MoraCell {
                south: 47.0,
                west: -123.0,
                north: 48.0,
                east: -122.0,
                altitude: 8900,
            }]
        );
    }

    #[test]
    fn row_of_cells() {
        let mora = Mora::from_line("47 -123 89 UNK 120").expect("should parse");
        let cells = mora.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].west, -123.0);
        assert_eq!(cells[0].east, -122.0);
        assert_eq!(cells[0].altitude, 8900);
        // the unknown cell is skipped but keeps its column
        assert_eq!(cells[1].west, -121.0);
        assert_eq!(cells[1].north, 48.0);
        assert_eq!(cells[1].altitude, 12000);
    }

    #[test]
    fn box_out_of_range_is_dropped() {
        assert!(matches!(
            Mora::from_line("47 -123 89 99999999 120"),
            Err(Error::InvalidCoordinate { field: "Longitude", .. })
        ));
        assert!(Mora::from_line("91 -123 92 -122 120").is_err());
    }

    #[test]
    fn overflowing_cell_is_unknown() {
        let mora = Mora::from_line("47 -123 99999999 120 UNK 130").expect("should parse");
        let cells = mora.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].west, -122.0);
        assert_eq!(cells[0].altitude, 12000);
        assert_eq!(cells[1].west, -120.0);
    }

    #[test]
    fn both_layouts_in_one_table() {
        let text = "I\n1150 Version - Copyright\n47.0 -123.0 48.0 -122.0 8900\n-10 20 30 31 UNK 33\n12 34\n99\n";
        let cells: Vec<_> = parse(text).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1].south, -10.0);
        assert_eq!(cells[3].west, 23.0);
    }
}
