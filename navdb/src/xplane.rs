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

//! Layout of an X-Plane installation.
//!
//! ```text
//! X-Plane 12/
//! ├── Custom Data/                  # Navigation data updates
//! ├── Custom Scenery/
//! │   └── <pack>/Earth nav data/apt.dat
//! ├── Global Scenery/
//! │   └── Global Airports/Earth nav data/apt.dat
//! └── Resources/
//!     ├── default data/             # Navigation data shipped with X-Plane
//!     │   ├── earth_nav.dat
//!     │   ├── airspaces/*.txt
//!     │   └── CIFP/<ICAO>.dat
//!     └── default scenery/default apt dat/Earth nav data/apt.dat
//! ```
//!
//! Tables in `Custom Data` replace the ones in `Resources/default data`.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const NAVAIDS: &str = "earth_nav.dat";
pub const FIXES: &str = "earth_fix.dat";
pub const AIRWAYS: &str = "earth_awy.dat";
pub const HOLDS: &str = "earth_hold.dat";
pub const MSA: &str = "earth_msa.dat";
pub const MORA: &str = "earth_mora.dat";
pub const AIRPORT_METADATA: &str = "earth_aptmeta.dat";
pub const ATC: &str = "atc.dat";
pub const AIRSPACES: &str = "airspaces";
pub const CIFP: &str = "CIFP";

const APT_DAT: &str = "Earth nav data/apt.dat";

/// A validated X-Plane installation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct XPlaneInstallation {
    root: PathBuf,
}

impl XPlaneInstallation {
    /// Opens the installation at the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSourcePath`] if the path is not a directory
    /// with a `Resources` directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();

        if !root.is_dir() || !root.join("Resources").is_dir() {
            return Err(Error::InvalidSourcePath(root));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn custom_data_path(&self) -> PathBuf {
        self.root.join("Custom Data")
    }

    pub fn default_data_path(&self) -> PathBuf {
        self.root.join("Resources").join("default data")
    }

    pub fn custom_scenery_path(&self) -> PathBuf {
        self.root.join("Custom Scenery")
    }

    /// Returns the path of a navigation data file or directory.
    ///
    /// The path in `Custom Data` is returned if it exists.
    pub async fn nav_data_path(&self, name: &str) -> PathBuf {
        let custom = self.custom_data_path().join(name);
        if tokio::fs::try_exists(&custom).await.unwrap_or(false) {
            custom
        } else {
            self.default_data_path().join(name)
        }
    }

    /// Returns the path of the procedures of an airport.
    pub async fn cifp_path(&self, icao: &str) -> PathBuf {
        self.nav_data_path(&format!("{CIFP}/{icao}.dat")).await
    }

    /// Returns the global airport table.
    ///
    /// The `Global Airports` scenery is preferred over the default airports
    /// in `Resources`. Returns `None` if neither exists.
    pub async fn global_airports_path(&self) -> Option<PathBuf> {
        let candidates = [
            self.root.join("Global Scenery/Global Airports").join(APT_DAT),
            self.root
                .join("Resources/default scenery/default apt dat")
                .join(APT_DAT),
        ];
        for path in candidates {
            if tokio::fs::metadata(&path)
                .await
                .is_ok_and(|meta| meta.is_file())
            {
                return Some(path);
            }
        }
        None
    }

    /// Returns the name and airport table of every scenery pack with
    /// airports, ordered by name.
    pub async fn scenery_packs(&self) -> io::Result<Vec<(String, PathBuf)>> {
        let mut packs = Vec::new();

        let mut entries = match tokio::fs::read_dir(self.custom_scenery_path()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(packs),
            Err(e) => return Err(e),
        };

        while let Some(entry) = entries.next_entry().await? {
            let apt = entry.path().join(APT_DAT);
            if tokio::fs::try_exists(&apt).await.unwrap_or(false) {
                packs.push((entry.file_name().to_string_lossy().into_owned(), apt));
            }
        }

        packs.sort();
        Ok(packs)
    }

    /// Returns the OpenAir files of the airspaces directory ordered by name.
    pub async fn airspace_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(self.nav_data_path(AIRSPACES).await).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt")) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn installation() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("Resources/default data/CIFP"))
            .expect("default data should be created");
        dir
    }

    #[test]
    fn rejects_invalid_path() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        assert!(matches!(
            XPlaneInstallation::new(dir.path()),
            Err(Error::InvalidSourcePath(_))
        ));
        assert!(XPlaneInstallation::new(dir.path().join("missing")).is_err());
    }

    #[tokio::test]
    async fn custom_data_is_preferred() {
        let dir = installation();
        let xp = XPlaneInstallation::new(dir.path()).expect("installation should be valid");

        assert_eq!(
            xp.nav_data_path(NAVAIDS).await,
            dir.path().join("Resources/default data/earth_nav.dat")
        );

        fs::create_dir_all(dir.path().join("Custom Data")).expect("dir should be created");
        fs::write(dir.path().join("Custom Data/earth_nav.dat"), "I\n99\n")
            .expect("file should be written");

        assert_eq!(
            xp.nav_data_path(NAVAIDS).await,
            dir.path().join("Custom Data/earth_nav.dat")
        );
        assert_eq!(
            xp.cifp_path("KSEA").await,
            dir.path().join("Resources/default data/CIFP/KSEA.dat")
        );
    }

    #[tokio::test]
    async fn scenery_packs_are_sorted() {
        let dir = installation();
        for pack in ["Zulu", "Alpha", "No Airports"] {
            fs::create_dir_all(dir.path().join("Custom Scenery").join(pack))
                .expect("pack should be created");
        }
        for pack in ["Zulu", "Alpha"] {
            let nav = dir.path().join("Custom Scenery").join(pack).join("Earth nav data");
            fs::create_dir_all(&nav).expect("dir should be created");
            fs::write(nav.join("apt.dat"), "I\n99\n").expect("file should be written");
        }

        let xp = XPlaneInstallation::new(dir.path()).expect("installation should be valid");
        let packs: Vec<_> = xp
            .scenery_packs()
            .await
            .expect("packs should be listed")
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(packs, vec!["Alpha", "Zulu"]);
        assert_eq!(xp.global_airports_path().await, None);
    }
}
