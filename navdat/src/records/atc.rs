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

//! Air traffic control facilities (`atc.dat`).
//!
//! Each controller is a block of keyword lines:
//!
//! ```text
//! CONTROLLER
//! NAME Seattle Center
//! FACILITY_ID ZSE
//! ROLE ctr
//! FREQ 128300
//! AIRSPACE_POLYGON_BEGIN 0 18000
//! POINT 47.0 -122.0
//! ...
//! AIRSPACE_POLYGON_END
//! CONTROLLER_END
//! ```

use crate::{Field, HeaderPolicy, Lines, Text, Token};

const CONTROLLER: &str = "CONTROLLER";

/// Everything before the first controller is header.
#[derive(Copy, Clone, Debug, Default)]
pub struct AtcHeader;

impl HeaderPolicy for AtcHeader {
    fn is_header(&self, line: &str) -> bool {
        line != CONTROLLER
    }
}

/// A vertical slice of airspace a controller is responsible for.
#[derive(Clone, PartialEq, Debug)]
pub struct Volume {
    /// Floor in feet.
    pub floor: i32,
    /// Ceiling in feet.
    pub ceiling: i32,
    /// `(latitude, longitude)` pairs of the boundary.
    pub boundary: Vec<(f64, f64)>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Controller<'a> {
    pub name: Text<'a>,
    pub facility_id: Option<Token<'a>>,
    pub role: Option<Token<'a>>,
    /// Frequencies in kHz.
    pub frequencies: Vec<u32>,
    pub volumes: Vec<Volume>,
}

/// Iterator over the controllers of the ATC table.
pub struct Controllers<'a> {
    lines: Lines<'a, AtcHeader>,
}

impl<'a> Controllers<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: Lines::new(text, AtcHeader),
        }
    }
}

impl<'a> Iterator for Controllers<'a> {
    type Item = Controller<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current: Option<Controller<'a>> = None;
        let mut volume: Option<Volume> = None;

        for line in self.lines.by_ref() {
            let (keyword, arg) = match line.split_once(char::is_whitespace) {
                Some((keyword, arg)) => (keyword, arg.trim()),
                None => (line, ""),
            };

            if keyword == CONTROLLER {
                if current.is_some() {
                    log::trace!("dropping unterminated controller");
                }
                current = Some(Controller::default());
                volume = None;
                continue;
            }

            let Some(controller) = current.as_mut() else {
                continue;
            };

            match keyword {
                "NAME" => controller.name = Text(arg),
                "FACILITY_ID" => controller.facility_id = Some(Token(arg)),
                "ROLE" => controller.role = Some(Token(arg)),
                "FREQ" => match u32::from_token(arg) {
                    Ok(freq) => controller.frequencies.push(freq),
                    Err(e) => log::trace!("skipping frequency: {e}"),
                },
                "AIRSPACE_POLYGON_BEGIN" => {
                    let mut limits = arg.split_whitespace().map(i32::from_token);
                    volume = match (limits.next(), limits.next()) {
                        (Some(Ok(floor)), Some(Ok(ceiling))) => Some(Volume {
                            floor,
                            ceiling,
                            boundary: Vec::new(),
                        }),
                        _ => {
                            log::trace!("skipping polygon with invalid limits \"{arg}\"");
                            None
                        }
                    };
                }
                "POINT" => {
                    let mut coords = arg.split_whitespace().map(f64::from_token);
                    if let (Some(vol), Some(Ok(lat)), Some(Ok(lon))) =
                        (volume.as_mut(), coords.next(), coords.next())
                    {
                        vol.boundary.push((lat, lon));
                    }
                }
                "AIRSPACE_POLYGON_END" => {
                    if let Some(vol) = volume.take() {
                        if vol.boundary.len() >= 3 {
                            controller.volumes.push(vol);
                        }
                    }
                }
                "CONTROLLER_END" => return current,
                _ => log::trace!("unknown keyword {keyword}"),
            }
        }

        None
    }
}

/// Parses all controllers of the ATC table.
pub fn parse(text: &str) -> Controllers<'_> {
    Controllers::new(text)
}
