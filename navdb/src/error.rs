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
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The X-Plane installation can't be found at the path.
    InvalidSourcePath(PathBuf),
    /// Another reload is running.
    ReloadInProgress,
    Io(io::Error),
    Store(rusqlite::Error),
    Migration(rusqlite_migration::Error),
    UnknownIdent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourcePath(path) => {
                write!(f, "no X-Plane installation found at {}", path.display())
            }
            Self::ReloadInProgress => write!(f, "navigation data is already reloading"),
            Self::Io(e) => write!(f, "could not read navigation data: {e}"),
            Self::Store(e) => write!(f, "airport store failed: {e}"),
            Self::Migration(e) => write!(f, "airport store could not be migrated: {e}"),
            Self::UnknownIdent(ident) => write!(f, "unknown ident {ident}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Migration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Store(e)
    }
}

impl From<rusqlite_migration::Error> for Error {
    fn from(e: rusqlite_migration::Error) -> Self {
        Self::Migration(e)
    }
}
