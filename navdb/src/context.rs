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

//! The navigation database of one X-Plane installation.
//!
//! [`NavContext`] owns the loaded [`NavigationData`], the airport store and
//! the configuration. Reloading reads the installation in the background and
//! swaps the new data in once it's complete. Readers take a snapshot of the
//! data and never see a partial load.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::apt::{AirportBreakdown, AirportOverlay, AirportRecord, AirportStore};
use crate::config::NavConfig;
use crate::error::{Error, Result};
use crate::geom::Coordinate;
use crate::nd::convert;
use crate::nd::*;
use crate::xplane::{self, XPlaneInstallation};

/// What's loaded and whether a reload is running.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadStatus {
    pub counts: Counts,
    pub airports: AirportBreakdown,
    pub cycle: Option<AiracCycle>,
    pub loading: bool,
}

#[derive(Clone, Debug, Default)]
struct Loaded {
    data: Arc<NavigationData>,
    airports: AirportBreakdown,
}

/// Sets the reload flag and resets it when dropped.
struct ReloadGuard<'a>(&'a AtomicBool);

impl<'a> ReloadGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| Error::ReloadInProgress)
    }
}

impl Drop for ReloadGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Whether a reload can do without a dataset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Dataset {
    Core,
    Optional,
}

/// The navigation database.
///
/// # Examples
///
/// ```no_run
/// use navdb::nd::{EntityKind, NavaidFilter, NavaidFamily};
/// use navdb::geom::Coordinate;
/// use navdb::{NavConfig, NavContext};
///
/// # async fn run() -> navdb::Result<()> {
/// let ctx = NavContext::new(NavConfig::new("/opt/X-Plane 12"))?;
/// ctx.reload().await?;
///
/// let vors = ctx.within_radius(
///     EntityKind::Navaid(Some(NavaidFilter::Family(NavaidFamily::Vor))),
///     Coordinate::new(47.45, -122.31),
///     40.0,
/// );
///
/// for vor in vors {
///     println!("{}", vor.ident());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NavContext {
    config: RwLock<NavConfig>,
    loaded: RwLock<Loaded>,
    store: Mutex<AirportStore>,
    reloading: AtomicBool,
}

impl NavContext {
    /// Creates an empty context and opens the airport store.
    ///
    /// Nothing is read from the installation until [`reload`](Self::reload)
    /// is called.
    pub fn new(config: NavConfig) -> Result<Self> {
        let store = AirportStore::open(config.store())?;

        Ok(Self {
            config: RwLock::new(config),
            loaded: RwLock::new(Loaded::default()),
            store: Mutex::new(store),
            reloading: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> NavConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the navigation data that is currently loaded.
    pub fn snapshot(&self) -> Arc<NavigationData> {
        Arc::clone(&self.loaded().data)
    }

    fn loaded(&self) -> Loaded {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.reloading.load(Ordering::Acquire)
    }

    pub fn status(&self) -> LoadStatus {
        let loaded = self.loaded();

        LoadStatus {
            counts: loaded.data.counts(),
            airports: loaded.airports,
            cycle: loaded.data.cycle(),
            loading: self.is_loading(),
        }
    }

    /// Points the context at another installation.
    ///
    /// The loaded data and the airport store are wiped. The new installation
    /// is read on the next [`reload`](Self::reload).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ReloadInProgress`] while a reload is running and
    /// if the airport store can't be cleared.
    pub fn set_source_path<P: Into<PathBuf>>(&self, path: P) -> Result<()> {
        let _guard = ReloadGuard::acquire(&self.reloading)?;

        *self.loaded.write().unwrap_or_else(PoisonError::into_inner) = Loaded::default();
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear()?;

        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *config = config.clone().with_xplane_path(path);
        log::info!("navigation data source set to {}", config.xplane_path().display());

        Ok(())
    }

    /// Reads the installation and replaces the loaded data.
    ///
    /// The airports, navaids, waypoints, airspaces and airways are read first,
    /// then the ATC, holding pattern, airport metadata, MSA and MORA tables.
    /// A table that is missing or can't be read is logged and left empty.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ReloadInProgress`] if another reload is running
    /// and with [`Error::InvalidSourcePath`] if the configured path is not an
    /// X-Plane installation. The loaded data is kept in both cases.
    pub async fn reload(&self) -> Result<LoadStatus> {
        let _guard = ReloadGuard::acquire(&self.reloading)?;
        let xp = XPlaneInstallation::new(self.config().xplane_path())?;

        log::info!("loading navigation data from {}", xp.root().display());

        let (overlay, (navaids, cycle), waypoints, airspaces, airways) = tokio::join!(
            load_airports(&xp),
            load(
                &xp,
                xplane::NAVAIDS,
                Dataset::Core,
                |text| (convert::navaids(text), convert::cycle(text)),
            ),
            load(&xp, xplane::FIXES, Dataset::Core, convert::waypoints),
            load_airspaces(&xp),
            load(&xp, xplane::AIRWAYS, Dataset::Core, convert::airways),
        );

        let (controllers, holds, metadata, msa_sectors, mora_cells) = tokio::join!(
            load(&xp, xplane::ATC, Dataset::Optional, convert::controllers),
            load(&xp, xplane::HOLDS, Dataset::Optional, convert::holds),
            load(
                &xp,
                xplane::AIRPORT_METADATA,
                Dataset::Optional,
                convert::airport_metadata,
            ),
            load(&xp, xplane::MSA, Dataset::Optional, convert::msa_sectors),
            load(&xp, xplane::MORA, Dataset::Optional, convert::mora_cells),
        );

        let breakdown = overlay.breakdown();
        let records = overlay.into_records();

        if let Err(e) = self
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace_all(&records)
        {
            log::warn!("could not store airports: {e}");
        }

        let mut builder = NavigationData::builder();
        builder.add_airports(records.iter().map(AirportRecord::summary));
        builder.add_navaids(navaids);
        builder.add_waypoints(waypoints);
        builder.add_airspaces(airspaces);
        builder.add_airways(airways);
        builder.add_controllers(controllers);
        builder.add_holds(holds);
        builder.add_airport_metadata(metadata);
        builder.add_msa_sectors(msa_sectors);
        builder.add_mora_cells(mora_cells);
        builder.set_cycle(cycle);

        let data = Arc::new(builder.build());
        let counts = data.counts();

        *self.loaded.write().unwrap_or_else(PoisonError::into_inner) = Loaded {
            data,
            airports: breakdown,
        };

        log::info!(
            "loaded {} airports ({} custom from {} packs), {} navaids, {} waypoints, \
             {} airspaces, {} airway segments, cycle {}",
            counts.airports,
            breakdown.custom,
            breakdown.packs,
            counts.navaids,
            counts.waypoints,
            counts.airspaces,
            counts.airways,
            cycle.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()),
        );

        Ok(LoadStatus {
            counts,
            airports: breakdown,
            cycle,
            loading: false,
        })
    }

    /// Returns the entities of a kind within the radius of the center.
    pub fn within_radius(&self, kind: EntityKind, center: Coordinate, radius_nm: f64) -> Vec<Entity> {
        self.snapshot().within_radius(kind, center, radius_nm)
    }

    /// Returns all navaids with the identifier.
    pub fn navaid(&self, ident: &str) -> Vec<Arc<Navaid>> {
        self.snapshot().navaids_by_ident(ident).to_vec()
    }

    /// Returns all waypoints with the identifier.
    pub fn waypoints_by_ident(&self, ident: &str) -> Vec<Arc<Waypoint>> {
        self.snapshot().waypoints_by_ident(ident).to_vec()
    }

    /// Returns the airport with its `apt.dat` block from the airport store.
    pub fn airport(&self, icao: &str) -> Result<Option<AirportRecord>> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(icao)
    }

    /// Returns every airport of the airport store.
    pub fn airports(&self) -> Result<Vec<AirportRecord>> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .all()
    }

    pub fn airport_metadata(&self, icao: &str) -> Option<Arc<AirportMetadata>> {
        self.snapshot().metadata(icao).cloned()
    }

    /// Reads the procedures of an airport and resolves their fixes.
    ///
    /// Fixes are resolved relative to the airport. An airport without
    /// procedures has none.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownIdent`] if the airport is not loaded and
    /// with [`Error::Io`] if the procedures can't be read.
    pub async fn procedures(&self, icao: &str) -> Result<Vec<ResolvedProcedure>> {
        let config = self.config();
        let data = self.snapshot();

        let reference = data
            .airport(icao)
            .map(|airport| airport.coordinate)
            .or_else(|| data.metadata(icao).map(|meta| meta.coordinate.into()))
            .ok_or_else(|| Error::UnknownIdent(icao.to_string()))?;

        let xp = XPlaneInstallation::new(config.xplane_path())?;
        let Some(text) = read_text(&xp.cifp_path(icao).await).await? else {
            log::debug!("{icao} has no procedures");
            return Ok(Vec::new());
        };

        let procedures = convert::procedures(&text);
        let resolved = ProcedureResolver::new(&data)
            .with_ceiling(config.fallback_ceiling_nm())
            .resolve_all(&procedures, reference);

        let stats: ResolutionStats = resolved.iter().collect();
        log::debug!(
            "{icao}: {} procedures, {} of {} fixes resolved",
            resolved.len(),
            stats.resolved,
            stats.total()
        );

        Ok(resolved)
    }
}

/// Reads a file as text.
///
/// Returns `None` if the file doesn't exist. Bytes that are not UTF-8 are
/// replaced.
async fn read_text(path: &Path) -> io::Result<Option<String>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Reads a file, logging why it's unavailable.
async fn read_dataset(path: &Path, dataset: Dataset) -> Option<String> {
    match read_text(path).await {
        Ok(Some(text)) => Some(text),
        Ok(None) if dataset == Dataset::Core => {
            log::warn!("{} is missing", path.display());
            None
        }
        Ok(None) => {
            log::debug!("{} is missing", path.display());
            None
        }
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            None
        }
    }
}

async fn load<T, F>(xp: &XPlaneInstallation, name: &str, dataset: Dataset, decode: F) -> T
where
    T: Default,
    F: FnOnce(&str) -> T,
{
    let path = xp.nav_data_path(name).await;
    read_dataset(&path, dataset)
        .await
        .map(|text| decode(&text))
        .unwrap_or_default()
}

async fn load_airports(xp: &XPlaneInstallation) -> AirportOverlay {
    let mut overlay = AirportOverlay::new();

    match xp.global_airports_path().await {
        Some(path) => {
            if let Some(text) = read_dataset(&path, Dataset::Core).await {
                overlay.add_global(&text);
            }
        }
        None => log::warn!("no global airports in {}", xp.root().display()),
    }

    let packs = xp.scenery_packs().await.unwrap_or_else(|e| {
        log::warn!("could not list the custom scenery: {e}");
        Vec::new()
    });

    for (pack, path) in packs {
        if let Some(text) = read_dataset(&path, Dataset::Optional).await {
            overlay.add_pack(&pack, &text);
        }
    }

    overlay
}

async fn load_airspaces(xp: &XPlaneInstallation) -> Vec<Airspace> {
    let files = match xp.airspace_files().await {
        Ok(files) => files,
        Err(e) => {
            log::warn!("could not list the airspaces: {e}");
            return Vec::new();
        }
    };

    let mut airspaces = Vec::new();
    for file in files {
        if let Some(text) = read_dataset(&file, Dataset::Core).await {
            airspaces.extend(convert::airspaces(&text));
        }
    }
    airspaces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> NavContext {
        NavContext::new(NavConfig::new("/nonexistent")).expect("memory store should open")
    }

    #[tokio::test]
    async fn rejects_concurrent_reload() {
        let ctx = context();
        ctx.reloading.store(true, Ordering::Release);

        assert!(matches!(ctx.reload().await, Err(Error::ReloadInProgress)));
        assert!(matches!(
            ctx.set_source_path("/other"),
            Err(Error::ReloadInProgress)
        ));
        // the running reload still owns the flag
        assert!(ctx.is_loading());
    }

    #[tokio::test]
    async fn flag_is_reset_after_failed_reload() {
        let ctx = context();

        assert!(matches!(ctx.reload().await, Err(Error::InvalidSourcePath(_))));
        assert!(!ctx.is_loading());
        assert!(!ctx.status().loading);
    }

    #[test]
    fn empty_before_first_reload() {
        let ctx = context();
        let status = ctx.status();

        assert_eq!(status.counts, Counts::default());
        assert_eq!(status.cycle, None);
        assert!(ctx.navaid("SEA").is_empty());
    }
}
