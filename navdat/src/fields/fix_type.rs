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

use crate::{Error, Field};

/// The kind of fix a record refers to.
///
/// Table files use numeric codes (`11`, `2`, `3`) while procedures use the
/// ARINC section and subsection letters.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum FixType {
    /// VOR, DME or TACAN.
    VhfNavaid,
    Ndb,
    EnrouteWaypoint,
    TerminalWaypoint,
    Runway,
    Airport,
    Other,
}

impl FixType {
    /// Derives the fix type from the section and subsection of a procedure
    /// leg.
    pub fn from_section(section: Option<char>, subsection: Option<char>) -> Self {
        match (section, subsection) {
            (Some('D'), None) => Self::VhfNavaid,
            (Some('D'), Some('B')) | (Some('P'), Some('N')) => Self::Ndb,
            (Some('E'), _) => Self::EnrouteWaypoint,
            (Some('P'), Some('C')) => Self::TerminalWaypoint,
            (Some('P'), Some('G')) => Self::Runway,
            (Some('P'), Some('A')) => Self::Airport,
            _ => Self::Other,
        }
    }

    /// Returns `true` for radio navigation aids.
    pub fn is_navaid(&self) -> bool {
        matches!(self, Self::VhfNavaid | Self::Ndb)
    }
}

impl Field<'_> for FixType {
    fn from_token(token: &str) -> Result<Self, Error> {
        match u8::from_token(token)? {
            2 => Ok(Self::Ndb),
            3 => Ok(Self::VhfNavaid),
            11 => Ok(Self::EnrouteWaypoint),
            _ => Ok(Self::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_codes() {
        assert_eq!(FixType::from_section(Some('D'), None), FixType::VhfNavaid);
        assert_eq!(FixType::from_section(Some('D'), Some('B')), FixType::Ndb);
        assert_eq!(FixType::from_section(Some('P'), Some('N')), FixType::Ndb);
        assert_eq!(FixType::from_section(Some('E'), Some('A')), FixType::EnrouteWaypoint);
        assert_eq!(FixType::from_section(Some('P'), Some('C')), FixType::TerminalWaypoint);
        assert_eq!(FixType::from_section(Some('P'), Some('G')), FixType::Runway);
        assert_eq!(FixType::from_section(None, None), FixType::Other);
    }

    #[test]
    fn table_codes() {
        assert_eq!(FixType::from_token("11"), Ok(FixType::EnrouteWaypoint));
        assert_eq!(FixType::from_token("2"), Ok(FixType::Ndb));
        assert_eq!(FixType::from_token("3"), Ok(FixType::VhfNavaid));
        assert!(FixType::from_token("X").is_err());
    }
}
