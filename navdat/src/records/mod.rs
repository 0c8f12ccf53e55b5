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

//! Records of all supported files.
//!
//! Each module parses one kind of file with its `parse` function. The records
//! borrow from the text of the file.

pub mod airport_meta;
pub mod airspace;
pub mod airway;
pub mod apt;
pub mod atc;
pub mod hold;
pub mod mora;
pub mod msa;
pub mod navaid;
pub mod procedure;
pub mod waypoint;

pub use airport_meta::{AirportClass, AirportMeta};
pub use airspace::{Airspace, AirspaceClass};
pub use airway::AirwaySegment;
pub use apt::{AirportBlock, FieldType};
pub use atc::{Controller, Volume};
pub use hold::Hold;
pub use mora::{Mora, MoraCell};
pub use msa::{Msa, Sector};
pub use navaid::Navaid;
pub use procedure::{LegRole, Procedure, ProcedureLine, ProcedureType};
pub use waypoint::Waypoint;
