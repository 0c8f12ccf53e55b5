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

use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::apt::StoreLocation;
use crate::nd::DEFAULT_CEILING_NM;

/// Configuration of a [`NavContext`](crate::NavContext).
///
/// # Examples
///
/// ```
/// use navdb::{NavConfig, StoreLocation};
///
/// let config = NavConfig::new("/opt/X-Plane 12")
///     .with_store(StoreLocation::File("airports.sqlite".into()))
///     .with_fallback_ceiling(250.0);
///
/// assert_eq!(config.fallback_ceiling_nm(), 250.0);
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavConfig {
    xplane_path: PathBuf,
    store: StoreLocation,
    fallback_ceiling_nm: f64,
}

impl NavConfig {
    pub fn new<P: Into<PathBuf>>(xplane_path: P) -> Self {
        Self {
            xplane_path: xplane_path.into(),
            store: StoreLocation::default(),
            fallback_ceiling_nm: DEFAULT_CEILING_NM,
        }
    }

    pub fn with_xplane_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.xplane_path = path.into();
        self
    }

    pub fn with_store(mut self, store: StoreLocation) -> Self {
        self.store = store;
        self
    }

    /// Sets how far from an airport a procedure fix may be found if it's not
    /// in the region the procedure names.
    pub fn with_fallback_ceiling(mut self, nm: f64) -> Self {
        self.fallback_ceiling_nm = nm;
        self
    }

    pub fn xplane_path(&self) -> &Path {
        &self.xplane_path
    }

    pub fn store(&self) -> &StoreLocation {
        &self.store
    }

    pub fn fallback_ceiling_nm(&self) -> f64 {
        self.fallback_ceiling_nm
    }
}
