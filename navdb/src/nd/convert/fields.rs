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

use navdat::fields;
use navdat::records::{AirportClass as RecordAirportClass, AirspaceClass as RecordAirspaceClass};
use navdat::records::ProcedureType as RecordProcedureType;

use crate::nd::*;

impl From<fields::FixType> for FixType {
    fn from(value: fields::FixType) -> Self {
        match value {
            fields::FixType::VhfNavaid => Self::VhfNavaid,
            fields::FixType::Ndb => Self::Ndb,
            fields::FixType::EnrouteWaypoint => Self::EnrouteWaypoint,
            fields::FixType::TerminalWaypoint => Self::TerminalWaypoint,
            fields::FixType::Runway => Self::Runway,
            fields::FixType::Airport => Self::Airport,
            fields::FixType::Other => Self::Other,
        }
    }
}

impl From<fields::TurnDirection> for TurnDirection {
    fn from(value: fields::TurnDirection) -> Self {
        match value {
            fields::TurnDirection::Left => Self::Left,
            fields::TurnDirection::Right => Self::Right,
            fields::TurnDirection::Either => Self::Either,
        }
    }
}

impl From<fields::AirwayDirection> for AirwayDirection {
    fn from(value: fields::AirwayDirection) -> Self {
        match value {
            fields::AirwayDirection::Both => Self::Both,
            fields::AirwayDirection::Forward => Self::Forward,
            fields::AirwayDirection::Backward => Self::Backward,
        }
    }
}

impl From<fields::AltitudeDescriptor> for AltitudeDescriptor {
    fn from(value: fields::AltitudeDescriptor) -> Self {
        match value {
            fields::AltitudeDescriptor::At => Self::At,
            fields::AltitudeDescriptor::AtOrAbove => Self::AtOrAbove,
            fields::AltitudeDescriptor::AtOrBelow => Self::AtOrBelow,
            fields::AltitudeDescriptor::Between => Self::Between,
            fields::AltitudeDescriptor::Other(c) => Self::Other(c),
        }
    }
}

impl From<fields::AltitudeConstraint> for AltitudeConstraint {
    fn from(value: fields::AltitudeConstraint) -> Self {
        Self {
            descriptor: value.descriptor.into(),
            altitude1: value.altitude1.feet(),
            altitude2: value.altitude2.map(|alt| alt.feet()),
        }
    }
}

impl From<fields::SpeedDescriptor> for SpeedDescriptor {
    fn from(value: fields::SpeedDescriptor) -> Self {
        match value {
            fields::SpeedDescriptor::At => Self::At,
            fields::SpeedDescriptor::AtOrAbove => Self::AtOrAbove,
            fields::SpeedDescriptor::AtOrBelow => Self::AtOrBelow,
        }
    }
}

impl From<RecordProcedureType> for ProcedureType {
    fn from(value: RecordProcedureType) -> Self {
        match value {
            RecordProcedureType::Sid => Self::Sid,
            RecordProcedureType::Star => Self::Star,
            RecordProcedureType::Approach => Self::Approach,
        }
    }
}

impl From<RecordAirspaceClass> for AirspaceClass {
    fn from(value: RecordAirspaceClass) -> Self {
        match value {
            RecordAirspaceClass::A => Self::A,
            RecordAirspaceClass::B => Self::B,
            RecordAirspaceClass::C => Self::C,
            RecordAirspaceClass::D => Self::D,
            RecordAirspaceClass::E => Self::E,
            RecordAirspaceClass::F => Self::F,
            RecordAirspaceClass::G => Self::G,
            RecordAirspaceClass::Ctr => Self::CTR,
            RecordAirspaceClass::Tma => Self::TMA,
            RecordAirspaceClass::Restricted => Self::Restricted,
            RecordAirspaceClass::Prohibited => Self::Prohibited,
            RecordAirspaceClass::Danger => Self::Danger,
            RecordAirspaceClass::Other => Self::Other,
        }
    }
}

impl From<RecordAirportClass> for AirportClass {
    fn from(value: RecordAirportClass) -> Self {
        match value {
            RecordAirportClass::Controlled => Self::Controlled,
            RecordAirportClass::Private => Self::Private,
            RecordAirportClass::Uncontrolled => Self::Uncontrolled,
        }
    }
}

impl From<fields::Cycle> for AiracCycle {
    fn from(c: fields::Cycle) -> Self {
        Self {
            year: c.year,
            cycle: c.cycle,
        }
    }
}
