//! Shared session wiring for command handlers.

use std::path::Path;

use crate::config::{Config, StoreBackend};
use crate::registry::Registry;
use crate::store::{SheetStore, SheetsStore, SqliteStore};
use crate::{Result, TrackerError};

/// Everything a command handler needs for one session: the loaded config,
/// the store handle, and the registry hydrated from it. Owns all session
/// state so handlers never reach for globals.
pub struct SessionContext {
    pub config: Config,
    pub store: Box<dyn SheetStore>,
    pub registry: Registry,
}

impl SessionContext {
    /// Load config, connect the configured store, and hydrate the registry.
    ///
    /// A store that cannot be reached or parsed fails here, before any
    /// command runs; the session never silently starts empty.
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let store = build_store(&config)?;
        store.ensure_schema().await?;
        let registry = Registry::hydrate(store.as_ref()).await?;

        Ok(Self {
            config,
            store,
            registry,
        })
    }

    /// The names a winner may be picked from in this session.
    pub fn roster(&self) -> Vec<String> {
        self.config.roster()
    }
}

/// Build the store the config selects.
pub fn build_store(config: &Config) -> Result<Box<dyn SheetStore>> {
    match config.store {
        StoreBackend::Sheets => {
            let sheets = config
                .sheets
                .as_ref()
                .ok_or(TrackerError::MissingSheetsConfig)?;
            let token = config.sheets_token()?;
            let store = SheetsStore::new(&sheets.spreadsheet_id, &sheets.worksheet, token)?;
            Ok(Box::new(store))
        }
        StoreBackend::Sqlite => {
            let path = match &config.database.path {
                Some(path) => path.clone(),
                None => SqliteStore::default_path()?,
            };
            Ok(Box::new(SqliteStore::open(&path)?))
        }
    }
}
