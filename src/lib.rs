//! Chess Championship Tracker Library
//!
//! A small Rust library and CLI for recording chess match results per
//! championship and tallying wins, persisting every accepted mutation to a
//! four-column results sheet (Google Sheets or a local SQLite mirror).
//!
//! ## Features
//!
//! - **Championship Registry**: in-memory, insertion-ordered championships,
//!   hydrated once per session from the store
//! - **Durable Mutations**: the store append is the durability gate; memory
//!   is only updated after the row is written
//! - **Win Tallies**: pure frequency counts per championship or across all
//! - **Pluggable Store**: Google Sheets over HTTP, or SQLite for local use
//! - **Interactive Session**: form-style prompt loop for creating
//!   championships and logging results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chess_tracker::{registry::Registry, store::{SheetStore, SqliteStore}};
//!
//! # async fn example() -> chess_tracker::Result<()> {
//! let store = SqliteStore::open_in_memory()?;
//! store.ensure_schema().await?;
//!
//! let mut registry = Registry::hydrate(&store).await?;
//! registry.create_championship(&store, "Spring Cup").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Provide the Google Sheets access token without putting it in the config
//! file:
//! ```bash
//! export CHESS_TRACKER_SHEETS_TOKEN=ya29....
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use config::{Config, StoreBackend, THIRD_ENTRANT};
pub use error::{Result, TrackerError};
pub use registry::{win_counts, Championship, Colour, MatchRecord, Registry};
pub use store::{SheetRow, SheetStore, COLUMN_HEADERS};

pub const SHEETS_TOKEN_ENV_VAR: &str = "CHESS_TRACKER_SHEETS_TOKEN";
