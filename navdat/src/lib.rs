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

//! X-Plane navigation data parser.
//!
//! This crate provides parsers for the text files X-Plane reads its
//! navigation data from: navaids, fixes, airways, holding patterns, minimum
//! sector and off-route altitudes, airport metadata, ATC facilities,
//! procedures (CIFP), OpenAir airspaces and airport tables (`apt.dat`).
//!
//! Each file has its own module in [records] with a `parse` function that
//! returns the records of a file's text. Records reference the text and copy
//! as little as possible. Parsing never fails as a whole: lines that can't be
//! decoded are dropped and logged at trace level.
//!
//! # Examples
//!
//! Lets parse the Seattle VORTAC and print its frequency:
//!
//! ```
//! use navdat::records::Navaid;
//!
//! # fn main() -> Result<(), navdat::Error> {
//! let line = "3  47.43538889 -122.30961111    354 11680 130   19.0 SEA ENRT K1 SEATTLE VORTAC";
//!
//! if let Navaid::Vor(vor) = Navaid::try_from(line)? {
//!     let mhz = vor.frequency as f64 / 100.0;
//!     println!("{} ({}) on {mhz:.2}", vor.ident, vor.name); // => "SEA (SEATTLE VORTAC) on 116.80"
//! }
//! #     Ok(())
//! # }
//! ```
//!
//! A complete table is read the same way, the header and the `99` at the end
//! are skipped:
//!
//! ```no_run
//! use navdat::records::navaid;
//!
//! let text = std::fs::read_to_string("earth_nav.dat").expect("file should be readable");
//! println!("{} navaids", navaid::parse(&text).count());
//! ```
//!
//! [records]: crate::records

mod error;
mod field;
pub mod fields;
mod lines;
mod record;
pub mod records;

pub use error::Error;
pub use field::{Field, Text, Token};
pub use lines::{BannerHeader, HeaderPolicy, Lines, NoHeader, Records, StandardHeader, END_OF_DATA};
pub use navdat_derive::Record;
pub use record::{Fields, Record};
