//! Error types for the chess championship tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid config file: {message}")]
    Config { message: String },

    #[error("Sheets store selected but the config file has no [sheets] section")]
    MissingSheetsConfig,

    #[error("No Sheets access token provided: set {env_var} or sheets.access_token in the config file")]
    MissingAccessToken { env_var: String },

    #[error("Worksheet header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Invalid winner colour: {colour}")]
    InvalidColour { colour: String },

    #[error("Invalid match date: {date}")]
    InvalidDate { date: String },

    #[error("Match row for championship '{championship}' is missing fields")]
    IncompleteRow { championship: String },

    #[error("Championship name must not be empty")]
    EmptyChampionshipName,

    #[error("Championship already exists: {name}")]
    DuplicateChampionship { name: String },

    #[error("No such championship: {name}")]
    UnknownChampionship { name: String },

    #[error("Winner is not a configured player: {name}")]
    UnknownPlayer { name: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl TrackerError {
    /// True for errors caused by a rejected user action rather than a broken
    /// store or config. Validation failures leave both the registry and the
    /// store untouched, so the interactive session reports them and keeps
    /// going instead of aborting.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackerError::EmptyChampionshipName
                | TrackerError::DuplicateChampionship { .. }
                | TrackerError::UnknownChampionship { .. }
                | TrackerError::UnknownPlayer { .. }
                | TrackerError::InvalidColour { .. }
                | TrackerError::InvalidDate { .. }
        )
    }
}
