//! Local SQLite results store
//!
//! Mirrors the four-column sheet schema in a single append-ordered table so
//! the tracker works without network access or credentials. The rowid keeps
//! append order, which `read_all` must preserve.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, TrackerError};

use super::{SheetRow, SheetStore};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Default database location under the user data directory.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| TrackerError::Store {
            message: "could not determine user data directory".to_string(),
        })?;
        Ok(data_dir.join("chess-tracker").join("results.db"))
    }

    fn initialize_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                championship TEXT NOT NULL,
                winner TEXT NOT NULL,
                colour TEXT NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| TrackerError::Store {
            message: "database connection mutex poisoned".to_string(),
        })
    }
}

#[async_trait]
impl SheetStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<()> {
        // Created in the constructor; keep this idempotent anyway.
        let guard = self.lock()?;
        Self::initialize_schema(&guard)
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT championship, winner, colour, date
             FROM results
             ORDER BY id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SheetRow {
                    championship: row.get(0)?,
                    winner: row.get(1)?,
                    colour: row.get(2)?,
                    date: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    async fn append_row(&self, row: &SheetRow) -> Result<()> {
        self.lock()?.execute(
            "INSERT INTO results (championship, winner, colour, date)
             VALUES (?, ?, ?, ?)",
            params![row.championship, row.winner, row.colour, row.date],
        )?;
        Ok(())
    }
}
