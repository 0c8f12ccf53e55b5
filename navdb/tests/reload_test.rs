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

use std::fs;
use std::path::Path;

use navdb::apt::Provenance;
use navdb::geom::Coordinate;
use navdb::nd::{EntityKind, NavaidFamily, NavaidFilter, ProcedureType, ResolutionStats};
use navdb::{Error, NavConfig, NavContext};
use tempfile::TempDir;

const NAVAIDS: &str = "I
1200 Version - data cycle 2305, build 20230418, metadata NavXP1200. Copyright

3  47.43538889 -122.30961111    354 11680 130   19.0 SEA ENRT K1 SEATTLE VORTAC
3  47.91950000 -122.27783333    600 11160  40   20.0 PAE ENRT K1 PAINE VOR/DME
3  47.43538889 -122.30961111    354 11680
99
";

const FIXES: &str = "I
1200 Version - data cycle 2305, build 20230418, metadata FixXP1200. Copyright

  47.60000000 -122.00000000 HAWKZ ENRT K1 2105 HAWKZ
  47.44000000 -122.30000000 ANVIL KSEA K1 4530263
99
";

const AIRWAYS: &str = "I
1100 Version - data cycle 2305, build 20230418, metadata AwyXP1100. Copyright

HAWKZ K1 11 SEA K1 3 N 1 180 450 V4
99
";

const AIRSPACE: &str = "* Seattle
AC D
AN SEATTLE CLASS D
AH 3000ft MSL
AL GND
DP 47:30:00 N 122:20:00 W
DP 47:30:00 N 122:10:00 W
DP 47:20:00 N 122:10:00 W
DP 47:20:00 N 122:20:00 W
";

const CIFP: &str = "\
SID:010,1,BANGR9,RW16L,RW16L,K1,P,G,GY M,,,IF,,,,,,,,,,,,,,,,,;
SID:020,1,BANGR9,RW16L,SEA,K1,D, ,V   ,R,,VA,,,,,,,,,1590,,+,01000,,18000,,,;
STAR:010,5,HAWKZ7,ALL,HAWKZ,K1,E,A,E   ,,,IF,,,,,,,,,,,,,,,,,;
STAR:020,5,HAWKZ7,ALL,ANVIL,K1,E,A,E   ,,,TF,,,,,,,,,,,,,,,,,;
";

const GLOBAL_AIRPORTS: &str = "I
1100 Generated by WorldEditor

1    433 0 0 KSEA Seattle Tacoma Intl
1302 datum_lat 47.449888889
1302 datum_lon -122.311777778
1     13 0 0 KJFK John F Kennedy Intl
1302 datum_lat 40.639751
1302 datum_lon -73.778925
99
";

const PACK_AIRPORTS: &str = "I
1100 Generated by WorldEditor

1     13 0 0 KJFK JFK Custom
1302 datum_lat 40.64
1302 datum_lon -73.78
99
";

fn write(root: &Path, path: &str, contents: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().expect("path should have a parent"))
        .expect("directory should be created");
    fs::write(path, contents).expect("file should be written");
}

/// Creates an installation around Seattle with a scenery pack for KJFK.
fn installation() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let root = dir.path();

    write(root, "Resources/default data/earth_nav.dat", NAVAIDS);
    write(root, "Resources/default data/earth_fix.dat", FIXES);
    write(root, "Resources/default data/earth_awy.dat", AIRWAYS);
    write(root, "Resources/default data/airspaces/us.txt", AIRSPACE);
    write(root, "Resources/default data/CIFP/KSEA.dat", CIFP);
    write(
        root,
        "Global Scenery/Global Airports/Earth nav data/apt.dat",
        GLOBAL_AIRPORTS,
    );
    write(
        root,
        "Custom Scenery/KJFK Scenery/Earth nav data/apt.dat",
        PACK_AIRPORTS,
    );

    dir
}

fn context(root: &Path) -> NavContext {
    NavContext::new(NavConfig::new(root)).expect("memory store should open")
}

#[tokio::test]
async fn loads_installation() {
    let dir = installation();
    let ctx = context(dir.path());

    let status = ctx.reload().await.expect("installation should load");

    assert_eq!(status.counts.navaids, 2);
    assert_eq!(status.counts.waypoints, 2);
    assert_eq!(status.counts.airways, 1);
    assert_eq!(status.counts.airspaces, 1);
    assert_eq!(status.counts.airports, 2);
    assert_eq!(status.cycle.map(|c| c.to_string()).as_deref(), Some("2305"));
    assert_eq!(status.airports.custom, 1);
    assert_eq!(status.airports.global_only, 1);
    assert_eq!(status.airports.packs, 1);
    assert!(!ctx.status().loading);

    // optional tables are missing
    assert_eq!(status.counts.holds, 0);
    assert_eq!(status.counts.mora_cells, 0);

    let data = ctx.snapshot();
    let v4 = &data.airways()[0];
    assert!(v4.from.coordinate.is_some());
    assert!(v4.to.coordinate.is_some());
}

#[tokio::test]
async fn scenery_pack_overrides_global_airport() {
    let dir = installation();
    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");

    let kjfk = ctx
        .airport("KJFK")
        .expect("store should be readable")
        .expect("KJFK should be stored");

    assert_eq!(kjfk.name, "JFK Custom");
    assert_eq!(kjfk.coordinate, Coordinate::new(40.64, -73.78));
    assert_eq!(
        kjfk.provenance,
        Provenance::Custom {
            pack: "KJFK Scenery".to_string()
        }
    );
    assert!(kjfk.raw.contains("JFK Custom"));

    let ksea = ctx
        .airport("KSEA")
        .expect("store should be readable")
        .expect("KSEA should be stored");
    assert_eq!(ksea.provenance, Provenance::Global);

    assert_eq!(ctx.airports().expect("store should be readable").len(), 2);
}

#[tokio::test]
async fn queries_loaded_data() {
    let dir = installation();
    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");

    let sea = Coordinate::new(47.43538889, -122.30961111);

    let mut vors: Vec<_> = ctx
        .within_radius(
            EntityKind::Navaid(Some(NavaidFilter::Family(NavaidFamily::Vor))),
            sea,
            30.0,
        )
        .iter()
        .map(|e| e.ident().to_string())
        .collect();
    vors.sort();
    assert_eq!(vors, vec!["PAE", "SEA"]);

    let airports = ctx.within_radius(EntityKind::Airport, sea, 10.0);
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].ident(), "KSEA");

    let airspaces = ctx.within_radius(EntityKind::Airspace, sea, 1.0);
    assert_eq!(airspaces.len(), 1);

    assert_eq!(ctx.navaid("SEA").len(), 1);
    assert_eq!(ctx.waypoints_by_ident("HAWKZ").len(), 1);
    assert!(ctx.navaid("HAWKZ").is_empty());
}

#[tokio::test]
async fn resolves_procedures() {
    let dir = installation();
    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");

    let procedures = ctx.procedures("KSEA").await.expect("procedures should load");
    assert_eq!(procedures.len(), 2);

    let sid = &procedures[0];
    assert_eq!(sid.procedure_type, ProcedureType::Sid);
    assert_eq!(sid.runway.as_deref(), Some("RW16L"));
    // the runway is not a fix
    assert!(!sid.waypoints[0].resolved);
    assert!(sid.waypoints[1].resolved);
    assert!(!sid.is_complete());

    let star = &procedures[1];
    assert_eq!(star.name, "HAWKZ7");
    assert!(star.is_complete());
    assert_eq!(
        star.waypoints[0].coordinate,
        Some(Coordinate::new(47.6, -122.0))
    );

    let stats: ResolutionStats = procedures.iter().collect();
    assert_eq!(stats.resolved, 3);
    assert_eq!(stats.unresolved, 1);

    // no CIFP file
    assert!(ctx
        .procedures("KJFK")
        .await
        .expect("missing procedures are empty")
        .is_empty());

    assert!(matches!(
        ctx.procedures("XXXX").await,
        Err(Error::UnknownIdent(_))
    ));
}

#[tokio::test]
async fn missing_core_table_is_empty() {
    let dir = installation();
    fs::remove_file(dir.path().join("Resources/default data/earth_fix.dat"))
        .expect("fix table should be removed");

    let ctx = context(dir.path());
    let status = ctx.reload().await.expect("installation should load");

    assert_eq!(status.counts.waypoints, 0);
    assert_eq!(status.counts.navaids, 2);
    // HAWKZ is unknown
    assert!(ctx.snapshot().airways()[0].from.coordinate.is_none());
}

#[tokio::test]
async fn custom_data_replaces_default_data() {
    let dir = installation();
    write(
        dir.path(),
        "Custom Data/earth_fix.dat",
        "I\n1200 Version - data cycle 2401. Copyright\n\n  47.7 -122.1 NEWWP ENRT K1\n99\n",
    );

    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");

    assert_eq!(ctx.waypoints_by_ident("NEWWP").len(), 1);
    assert!(ctx.waypoints_by_ident("HAWKZ").is_empty());
}

#[tokio::test]
async fn invalid_path_keeps_loaded_data() {
    let dir = installation();
    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");

    fs::remove_dir_all(dir.path().join("Resources")).expect("resources should be removed");

    assert!(matches!(ctx.reload().await, Err(Error::InvalidSourcePath(_))));
    assert_eq!(ctx.status().counts.navaids, 2);
    assert!(!ctx.is_loading());

    let empty = tempfile::tempdir().expect("temp dir should be created");
    let invalid = context(empty.path());
    assert!(matches!(
        invalid.reload().await,
        Err(Error::InvalidSourcePath(_))
    ));
}

#[tokio::test]
async fn path_change_wipes_state() {
    let dir = installation();
    let ctx = context(dir.path());
    ctx.reload().await.expect("installation should load");
    assert_eq!(ctx.airports().expect("store should be readable").len(), 2);

    let other = installation();
    ctx.set_source_path(other.path())
        .expect("source path should change");

    let status = ctx.status();
    assert_eq!(status.counts.navaids, 0);
    assert_eq!(status.counts.airports, 0);
    assert_eq!(status.cycle, None);
    assert!(ctx.airports().expect("store should be readable").is_empty());
    assert_eq!(ctx.config().xplane_path(), other.path());

    ctx.reload().await.expect("other installation should load");
    assert_eq!(ctx.status().counts.navaids, 2);
}

#[tokio::test]
async fn rejects_reload_while_loading() {
    let dir = installation();
    let ctx = context(dir.path());

    // the first reload waits on the file system when the second one starts
    let (first, second) = tokio::join!(ctx.reload(), ctx.reload());

    assert!(first.is_ok());
    assert!(matches!(second, Err(Error::ReloadInProgress)));
    assert!(!ctx.is_loading());
}

#[tokio::test(flavor = "multi_thread")]
async fn readers_see_complete_data() {
    let dir = installation();
    let ctx = std::sync::Arc::new(context(dir.path()));

    let reader = {
        let ctx = std::sync::Arc::clone(&ctx);
        tokio::spawn(async move {
            for _ in 0..100 {
                let counts = ctx.status().counts;
                assert!(counts.navaids == 0 || counts.navaids == 2);
                assert_eq!(counts.navaids == 0, counts.waypoints == 0);
                tokio::task::yield_now().await;
            }
        })
    };

    ctx.reload().await.expect("installation should load");
    reader.await.expect("reader should not panic");
}
