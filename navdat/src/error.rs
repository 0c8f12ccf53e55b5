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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    MissingField {
        index: usize,
    },
    NotANumber {
        token: String,
    },
    InvalidCoordinate {
        field: &'static str,
        token: String,
    },
    InvalidVariant {
        field: &'static str,
        token: String,
        expected: &'static str,
    },
    UnknownRowCode {
        code: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { index } => {
                write!(f, "line should have a field at position {}", index + 1)
            }
            Self::NotANumber { token } => {
                write!(f, "field should be a number but is \"{token}\"")
            }
            Self::InvalidCoordinate { field, token } => {
                write!(f, "{field} \"{token}\" is out of range")
            }
            Self::InvalidVariant {
                field,
                token,
                expected,
            } => {
                write!(f, "found \"{token}\" in {field} but should be {expected}")
            }
            Self::UnknownRowCode { code } => {
                write!(f, "row code \"{code}\" is not known")
            }
        }
    }
}

impl error::Error for Error {}
