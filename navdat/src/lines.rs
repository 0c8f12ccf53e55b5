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

//! Header and end-of-data handling shared by all line oriented files.
//!
//! Every navigation data file starts with a few lines of header (platform
//! marker, version and copyright) of varying length and ends with a line
//! containing only `99`. [`Lines`] skips the header according to a
//! [`HeaderPolicy`] and stops at the sentinel.

use std::marker::PhantomData;

use crate::record::Record;

/// The line that marks the end of the data.
pub const END_OF_DATA: &str = "99";

/// Decides which lines at the start of a file are header lines.
pub trait HeaderPolicy {
    /// Returns `true` if the trimmed, non-empty line is a header line.
    fn is_header(&self, line: &str) -> bool;

    /// Returns `true` if the trimmed line ends the data.
    fn is_end(&self, line: &str) -> bool {
        line == END_OF_DATA
    }
}

/// Header lines start with a capital letter, are numbers only or contain a
/// copyright.
///
/// Suits files whose data lines start with a number.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardHeader;

impl HeaderPolicy for StandardHeader {
    fn is_header(&self, line: &str) -> bool {
        line.starts_with(|c: char| c.is_ascii_uppercase())
            || line.chars().all(|c| c.is_ascii_digit())
            || line.contains("Copyright")
    }
}

/// Header lines are single tokens or contain the version or copyright.
///
/// Suits files whose data lines start with an identifier.
#[derive(Copy, Clone, Debug, Default)]
pub struct BannerHeader;

impl HeaderPolicy for BannerHeader {
    fn is_header(&self, line: &str) -> bool {
        line.split_whitespace().nth(1).is_none()
            || line.contains("Copyright")
            || line.contains(" Version")
    }
}

/// No header at all, the sentinel still ends the data.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHeader;

impl HeaderPolicy for NoHeader {
    fn is_header(&self, _line: &str) -> bool {
        false
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    InHeader,
    InData,
    Done,
}

/// Iterator over the trimmed, non-empty data lines of a file.
pub struct Lines<'a, P> {
    lines: std::str::Lines<'a>,
    policy: P,
    state: State,
    line_number: usize,
}

impl<'a, P: HeaderPolicy> Lines<'a, P> {
    pub fn new(text: &'a str, policy: P) -> Self {
        Self {
            lines: text.lines(),
            policy,
            state: State::InHeader,
            line_number: 0,
        }
    }

    /// The 1-based number of the line returned last.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a, P: HeaderPolicy> Iterator for Lines<'a, P> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state != State::Done {
            let line = self.lines.next()?.trim();
            self.line_number += 1;

            if line.is_empty() {
                continue;
            }

            if self.policy.is_end(line) {
                self.state = State::Done;
                break;
            }

            if self.state == State::InHeader {
                if self.policy.is_header(line) {
                    continue;
                }
                self.state = State::InData;
            }

            return Some(line);
        }

        None
    }
}

/// Iterator over the records of a file.
///
/// Lines that fail to parse are dropped and logged.
pub struct Records<'a, R, P> {
    lines: Lines<'a, P>,
    record: PhantomData<R>,
}

impl<'a, R, P> Records<'a, R, P>
where
    R: Record<'a>,
    P: HeaderPolicy,
{
    /// Creates a new record iterator from a file's text.
    ///
    /// # Examples
    ///
    /// ```
    /// use navdat::records::Waypoint;
    /// use navdat::{Records, StandardHeader};
    ///
    /// let text = "I\n1200 Version - Copyright\n\n 47.4 -122.3 ALPHA ENRT K1 2105\n99\n";
    ///
    /// for wp in Records::<Waypoint, _>::new(text, StandardHeader) {
    ///     println!("{} in {}", wp.ident, wp.region);
    /// }
    /// ```
    pub fn new(text: &'a str, policy: P) -> Self {
        Self {
            lines: Lines::new(text, policy),
            record: PhantomData,
        }
    }
}

impl<'a, R, P> Iterator for Records<'a, R, P>
where
    R: Record<'a>,
    P: HeaderPolicy,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            match R::from_line(line) {
                Ok(record) => return Some(record),
                Err(e) => {
                    log::trace!("skipping line {}: {e}", self.lines.line_number());
                }
            }
        }
    }
}
