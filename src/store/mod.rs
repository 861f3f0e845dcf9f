//! Results store boundary
//!
//! The tracker persists to a four-column results sheet. This module pins the
//! column order and header names both sides must agree on, provides the
//! typed parse/validate step for rows coming off the wire, and abstracts the
//! two backends behind one trait:
//! - `sheets`: Google Sheets v4 values API over HTTP
//! - `sqlite`: local SQLite mirror of the same schema

pub mod sheets;
pub mod sqlite;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;


use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::MatchRecord;
use crate::TrackerError;

pub use sheets::SheetsStore;
pub use sqlite::SqliteStore;

/// Fixed column order and header names of the results sheet.
pub const COLUMN_HEADERS: [&str; 4] = ["Championship Name", "Winner", "Winner Colour", "Date"];

/// Wire format for match dates (ISO-8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the results sheet, still in wire form (four text cells).
///
/// A placeholder row carries only the championship name and marks its
/// creation; anything else must parse into a full [`MatchRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub championship: String,
    pub winner: String,
    pub colour: String,
    pub date: String,
}

impl SheetRow {
    /// The row appended when a championship is created.
    pub fn placeholder(championship: &str) -> Self {
        Self {
            championship: championship.to_string(),
            winner: String::new(),
            colour: String::new(),
            date: String::new(),
        }
    }

    /// The row appended when a match result is saved.
    pub fn for_match(championship: &str, record: &MatchRecord) -> Self {
        Self {
            championship: championship.to_string(),
            winner: record.winner.clone(),
            colour: record.colour.to_string(),
            date: record.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Cells in the fixed column order.
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.championship.clone(),
            self.winner.clone(),
            self.colour.clone(),
            self.date.clone(),
        ]
    }

    /// Build a row from wire cells. Trailing cells the backend omitted for
    /// empty values are padded back in; extra cells are ignored.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            championship: cell(0),
            winner: cell(1),
            colour: cell(2),
            date: cell(3),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.winner.is_empty() && self.colour.is_empty() && self.date.is_empty()
    }

    /// Typed view of the row: `None` for a placeholder, a validated
    /// [`MatchRecord`] otherwise. Partially-empty rows and unparseable
    /// colours or dates are errors, not silently duck-typed values.
    pub fn match_record(&self) -> Result<Option<MatchRecord>> {
        if self.is_placeholder() {
            return Ok(None);
        }
        if self.winner.is_empty() || self.colour.is_empty() || self.date.is_empty() {
            return Err(TrackerError::IncompleteRow {
                championship: self.championship.clone(),
            });
        }

        let colour = self.colour.parse()?;
        let date = chrono::NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            TrackerError::InvalidDate {
                date: self.date.clone(),
            }
        })?;

        Ok(Some(MatchRecord {
            winner: self.winner.clone(),
            colour,
            date,
        }))
    }
}

/// The persistence boundary: an append-only, ordered four-column sheet.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Prepare the backing sheet once per session (header row / table).
    async fn ensure_schema(&self) -> Result<()>;

    /// All persisted rows, in append order.
    async fn read_all(&self) -> Result<Vec<SheetRow>>;

    /// Append one row. Callers treat a successful append as the durability
    /// gate for the corresponding in-memory mutation.
    async fn append_row(&self, row: &SheetRow) -> Result<()>;
}
