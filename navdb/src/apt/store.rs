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

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AirportRecord, FieldType, Provenance};
use crate::error::Result;
use crate::geom::Coordinate;

static MIGRATION_STEPS: &[M<'static>] = &[M::up(
    "CREATE TABLE airports (
        icao TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        elevation INTEGER NOT NULL,
        field_type INTEGER NOT NULL,
        raw TEXT NOT NULL,
        pack TEXT
    );",
)];

const MIGRATIONS: Migrations<'static> = Migrations::from_slice(MIGRATION_STEPS);

const COLUMNS: &str = "icao, name, latitude, longitude, elevation, field_type, raw, pack";

/// Where the airport store keeps its data.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoreLocation {
    /// A SQLite database file which is created if missing.
    File(PathBuf),
    #[default]
    Memory,
}

/// Persistent airport records keyed by ICAO code.
///
/// The store is replaced as a whole on every reload.
#[derive(Debug)]
pub struct AirportStore {
    conn: Connection,
}

impl AirportStore {
    /// Opens the store and migrates its schema.
    pub fn open(location: &StoreLocation) -> Result<Self> {
        let mut conn = match location {
            StoreLocation::File(path) => Connection::open(path)?,
            StoreLocation::Memory => Connection::open_in_memory()?,
        };

        MIGRATIONS.to_latest(&mut conn)?;

        Ok(Self { conn })
    }

    /// Replaces all airports by the `records`.
    ///
    /// Nothing is changed if any record fails to insert.
    pub fn replace_all<'a, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a AirportRecord>,
    {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM airports", [])?;

        let mut count = 0;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT OR REPLACE INTO airports ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ))?;

            for record in records {
                let pack = match &record.provenance {
                    Provenance::Global => None,
                    Provenance::Custom { pack } => Some(pack.as_str()),
                };

                stmt.execute(params![
                    record.icao,
                    record.name,
                    record.coordinate.latitude,
                    record.coordinate.longitude,
                    record.elevation,
                    record.field_type.code(),
                    record.raw,
                    pack,
                ])?;
                count += 1;
            }
        }

        tx.commit()?;
        Ok(count)
    }

    pub fn get(&self, icao: &str) -> Result<Option<AirportRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM airports WHERE icao = ?1"),
                params![icao],
                from_row,
            )
            .optional()?;

        Ok(record)
    }

    /// Returns all airports ordered by ICAO code.
    pub fn all(&self) -> Result<Vec<AirportRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM airports ORDER BY icao"))?;
        let records = stmt
            .query_map([], from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM airports", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    /// Removes all airports.
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM airports", [])?;
        Ok(())
    }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<AirportRecord> {
    let code: u8 = row.get(5)?;
    let field_type = FieldType::from_code(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Integer,
            format!("unknown airport type {code}").into(),
        )
    })?;

    Ok(AirportRecord {
        icao: row.get(0)?,
        name: row.get(1)?,
        coordinate: Coordinate::new(row.get(2)?, row.get(3)?),
        elevation: row.get(4)?,
        field_type,
        raw: row.get(6)?,
        provenance: match row.get::<_, Option<String>>(7)? {
            Some(pack) => Provenance::Custom { pack },
            None => Provenance::Global,
        },
    })
}
