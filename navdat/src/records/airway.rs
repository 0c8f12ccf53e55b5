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
use crate::{BannerHeader, Record, Records, Token};

/// A directed segment of the airway table (`earth_awy.dat`).
#[derive(Clone, PartialEq, Debug, Record)]
pub struct AirwaySegment<'a> {
    pub from_ident: Token<'a>,
    pub from_region: Token<'a>,
    pub from_type: FixType,
    pub to_ident: Token<'a>,
    pub to_region: Token<'a>,
    pub to_type: FixType,
    pub direction: AirwayDirection,
    pub level: AirwayLevel,
    /// Base in flight levels.
    pub base: u32,
    /// Top in flight levels.
    pub top: u32,
    names: Token<'a>,
}

impl<'a> AirwaySegment<'a> {
    /// Returns the names of all airways sharing this segment.
    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.names.as_str().split('-').filter(|name| !name.is_empty())
    }
}

/// Parses all segments of the airway table.
pub fn parse(text: &str) -> impl Iterator<Item = AirwaySegment<'_>> {
    Records::new(text, BannerHeader)
}
