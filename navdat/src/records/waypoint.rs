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

use crate::fields::*;
use crate::{Record, Records, StandardHeader, Text, Token};

/// A line of the fix table (`earth_fix.dat`).
#[derive(Clone, PartialEq, Debug, Record)]
pub struct Waypoint<'a> {
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub ident: Token<'a>,
    /// `ENRT` or the ICAO code of the terminal area.
    pub area: Token<'a>,
    pub region: Token<'a>,
    #[navdat(rest)]
    pub description: Text<'a>,
}

/// Parses all waypoints of the fix table.
pub fn parse(text: &str) -> impl Iterator<Item = Waypoint<'_>> {
    Records::new(text, StandardHeader)
}
