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

//! Airport blocks of an `apt.dat` file.
//!
//! A block starts with a land airport (`1`), seaplane base (`16`) or heliport
//! (`17`) line and ends where the next block starts. Only the fields needed to
//! place and identify the airport are decoded, the block itself is kept as it
//! appears in the file.

use crate::fields::Latitude;
use crate::fields::Longitude;
use crate::lines::END_OF_DATA;
use crate::{Error, Field, Record, Text, Token};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum FieldType {
    Land,
    Seaplane,
    Heliport,
}

impl Field<'_> for FieldType {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "1" => Ok(Self::Land),
            "16" => Ok(Self::Seaplane),
            "17" => Ok(Self::Heliport),
            _ => Err(Error::UnknownRowCode {
                code: token.to_owned(),
            }),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Record)]
struct Header<'a> {
    field_type: FieldType,
    elevation: i32,
    #[navdat(skip(2))]
    icao: Token<'a>,
    #[navdat(rest)]
    name: Text<'a>,
}

/// An airport with its raw block.
#[derive(Clone, PartialEq, Debug)]
pub struct AirportBlock<'a> {
    pub field_type: FieldType,
    /// Elevation in feet.
    pub elevation: i32,
    pub icao: Token<'a>,
    pub name: Text<'a>,
    /// The airport reference point from the `datum_lat` and `datum_lon`
    /// metadata.
    pub datum: Option<(f64, f64)>,
    /// First end of the first land or water runway.
    pub runway_end: Option<(f64, f64)>,
    /// Position of the first helipad.
    pub helipad: Option<(f64, f64)>,
    /// All lines of the block as they appear in the file.
    pub raw: &'a str,
}

impl<'a> AirportBlock<'a> {
    /// Decodes the block.
    ///
    /// # Errors
    ///
    /// Returns an error if the first line is not a valid airport line. Other
    /// lines of the block that fail to decode are ignored.
    pub fn from_block(raw: &'a str) -> Result<Self, Error> {
        let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
        let header = Header::from_line(lines.next().unwrap_or_default())?;

        let mut datum_lat = None;
        let mut datum_lon = None;
        let mut runway_end = None;
        let mut helipad = None;

        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                ["1302", "datum_lat", value, ..] => {
                    datum_lat = Latitude::from_token(value).ok().map(|l| l.as_decimal());
                }
                ["1302", "datum_lon", value, ..] => {
                    datum_lon = Longitude::from_token(value).ok().map(|l| l.as_decimal());
                }
                ["100", ..] if runway_end.is_none() => runway_end = position(&tokens, 9),
                ["101", ..] if runway_end.is_none() => runway_end = position(&tokens, 4),
                ["102", ..] if helipad.is_none() => helipad = position(&tokens, 2),
                _ => {}
            }
        }

        Ok(Self {
            field_type: header.field_type,
            elevation: header.elevation,
            icao: header.icao,
            name: header.name,
            datum: datum_lat.zip(datum_lon),
            runway_end,
            helipad,
            raw: raw.trim_end(),
        })
    }

    /// Returns the position of the airport.
    ///
    /// The datum is preferred over the runway, which is preferred over the
    /// helipad. Returns `None` if the airport can't be placed.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.datum.or(self.runway_end).or(self.helipad)
    }
}

fn position(tokens: &[&str], index: usize) -> Option<(f64, f64)> {
    let lat = Latitude::from_token(tokens.get(index)?).ok()?;
    let lon = Longitude::from_token(tokens.get(index + 1)?).ok()?;
    Some((lat.as_decimal(), lon.as_decimal()))
}

fn is_block_start(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("1" | "16" | "17"))
}

/// Iterator over the airport blocks of an `apt.dat` file.
pub struct AirportBlocks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> AirportBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the line at the current position and advances past it.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let rest = self.text.get(self.pos..).filter(|r| !r.is_empty())?;
        let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
        let start = self.pos;
        self.pos += len;
        Some((start, rest[..len].trim()))
    }
}

impl<'a> Iterator for AirportBlocks<'a> {
    type Item = AirportBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // find the start of the next block, skipping the file header
            let start = loop {
                let (start, line) = self.next_line()?;
                if line == END_OF_DATA {
                    self.pos = self.text.len();
                    return None;
                }
                if is_block_start(line) {
                    break start;
                }
            };

            // the block ends before the next block, the sentinel or the end
            let mut end = self.pos;
            while let Some((line_start, line)) = self.next_line() {
                if line == END_OF_DATA || is_block_start(line) {
                    self.pos = line_start;
                    break;
                }
                end = self.pos;
            }

            match AirportBlock::from_block(&self.text[start..end]) {
                Ok(block) => return Some(block),
                Err(e) => log::trace!("skipping airport block: {e}"),
            }
        }
    }
}

/// Parses all airport blocks of an `apt.dat` file.
pub fn parse(text: &str) -> AirportBlocks<'_> {
    AirportBlocks::new(text)
}
