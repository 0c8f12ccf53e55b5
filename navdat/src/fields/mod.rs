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

//! Field types shared by the records.

mod compound;
mod constraint;
mod coordinate;
mod cycle;
mod direction;
mod fix_type;

pub use compound::{Glidepath, LocalizerBearing};
pub use constraint::{Altitude, AltitudeConstraint, AltitudeDescriptor, SpeedDescriptor, Tenths};
pub use coordinate::{parse_dms_position, Latitude, Longitude};
pub use cycle::Cycle;
pub use direction::{AirwayDirection, AirwayLevel, TurnDirection};
pub use fix_type::FixType;
