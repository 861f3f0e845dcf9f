//! In-memory store test double

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{Result, TrackerError};

use super::{SheetRow, SheetStore};

/// A `SheetStore` backed by a plain `Vec`, for tests. Can be made
/// unreachable to exercise hydrate failures and the durability gate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<SheetRow>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail: false,
        }
    }

    /// A store whose reads and appends always fail with a store error.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows_snapshot(&self) -> Vec<SheetRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SheetStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        if self.fail {
            return Err(TrackerError::Store {
                message: "read rejected by test store".to_string(),
            });
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn append_row(&self, row: &SheetRow) -> Result<()> {
        if self.fail {
            return Err(TrackerError::Store {
                message: "append rejected by test store".to_string(),
            });
        }
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }
}
