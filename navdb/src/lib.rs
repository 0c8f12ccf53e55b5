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

//! Navigation database of an X-Plane installation.
//!
//! The database reads the navigation data files of an X-Plane installation
//! with the parsers of the [navdat] crate and turns them into navigation data
//! whose fixes all have coordinates:
//!
//! - [airports](apt) of the global scenery, overridden by the custom scenery
//!   packs and kept in an SQLite [store](apt::AirportStore),
//! - [navaids](nd::Navaid), [waypoints](nd::Waypoint),
//!   [airway segments](nd::AirwaySegment) and [airspaces](nd::Airspace),
//! - holding patterns, MSA sectors, the MORA grid, airport metadata and ATC
//!   controllers,
//! - procedures of an airport with their fixes
//!   [resolved](nd::ProcedureResolver) on demand.
//!
//! The [`NavContext`] loads an installation in the background and answers
//! radius queries while the data is reloaded.
//!
//! # Examples
//!
//! ```no_run
//! use navdb::{NavConfig, NavContext, StoreLocation};
//!
//! # async fn run() -> navdb::Result<()> {
//! let config = NavConfig::new("/opt/X-Plane 12")
//!     .with_store(StoreLocation::File("airports.sqlite".into()));
//!
//! let ctx = NavContext::new(config)?;
//! let status = ctx.reload().await?;
//! println!("{} navaids of cycle {:?}", status.counts.navaids, status.cycle);
//!
//! for procedure in ctx.procedures("KSEA").await? {
//!     println!("{} {}", procedure.procedure_type, procedure.name);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod apt;
mod config;
mod context;
mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod geom;
pub mod nd;
pub mod xplane;

pub use apt::StoreLocation;
pub use config::NavConfig;
pub use context::{LoadStatus, NavContext};
pub use error::{Error, Result};
