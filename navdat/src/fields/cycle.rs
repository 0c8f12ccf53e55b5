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

use std::fmt;

/// An AIRAC cycle like `2305` (fifth cycle of 2023).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cycle {
    pub year: u8,
    pub cycle: u8,
}

impl Cycle {
    /// Finds the `data cycle YYCC` note in the header of a file.
    ///
    /// Only the first lines of the text are searched.
    pub fn from_header(text: &str) -> Option<Self> {
        const MARKER: &str = "data cycle ";

        text.lines().take(5).find_map(|line| {
            let start = line.find(MARKER)? + MARKER.len();
            let digits = line.get(start..start + 4)?;
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let year = digits[..2].parse().ok()?;
            let cycle = digits[2..].parse().ok()?;
            (1..=14).contains(&cycle).then_some(Self { year, cycle })
        })
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year, self.cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cycle_in_header() {
        let text = "I\n1200 Version - data cycle 2305, build 20230420. Copyright\n";
        let cycle = Cycle::from_header(text);
        assert_eq!(cycle, Some(Cycle { year: 23, cycle: 5 }));
        assert_eq!(cycle.map(|c| c.to_string()), Some("2305".to_string()));
    }

    #[test]
    fn no_cycle() {
        assert_eq!(Cycle::from_header("I\n1100 Version\n"), None);
        assert_eq!(Cycle::from_header("I\n1100 Version - data cycle 2399\n"), None);
    }
}
