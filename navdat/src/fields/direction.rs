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

/// Direction of a turn.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}

impl Field<'_> for TurnDirection {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            "E" => Ok(Self::Either),
            _ => Err(Error::InvalidVariant {
                field: "Turn Direction",
                token: token.to_owned(),
                expected: "L, R or E",
            }),
        }
    }
}

/// The direction in which an airway segment may be flown.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AirwayDirection {
    /// `N`: no restriction.
    Both,
    /// `F`: from the first to the second fix only.
    Forward,
    /// `B`: from the second to the first fix only.
    Backward,
}

impl Field<'_> for AirwayDirection {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "N" => Ok(Self::Both),
            "F" => Ok(Self::Forward),
            "B" => Ok(Self::Backward),
            _ => Err(Error::InvalidVariant {
                field: "Airway Direction",
                token: token.to_owned(),
                expected: "N, F or B",
            }),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AirwayLevel {
    Low,
    High,
}

impl Field<'_> for AirwayLevel {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "1" => Ok(Self::Low),
            "2" => Ok(Self::High),
            _ => Err(Error::InvalidVariant {
                field: "Airway Level",
                token: token.to_owned(),
                expected: "1 or 2",
            }),
        }
    }
}
