//! Config file loading
//!
//! A TOML file holds the player names, which store backend to use, and the
//! Sheets coordinates/credentials. Everything has a default so the tracker
//! runs out of the box against a local SQLite store. The Sheets access token
//! can come from the config table or from `CHESS_TRACKER_SHEETS_TOKEN`,
//! which takes precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError};
use crate::SHEETS_TOKEN_ENV_VAR;

/// The fixed extra entrant that can win a match besides the two configured
/// players.
pub const THIRD_ENTRANT: &str = "User 3";

/// Which backend persists the results sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sheets,
    #[default]
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreBackend,
    pub players: PlayersConfig,
    pub sheets: Option<SheetsConfig>,
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreBackend::default(),
            players: PlayersConfig::default(),
            sheets: None,
            database: DatabaseConfig::default(),
        }
    }
}

/// The two player names offered when creating a championship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: "User 1".to_string(),
            two: "User 2".to_string(),
        }
    }
}

/// Coordinates and credentials for the Google Sheets backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    /// Bearer token; the env var overrides this when set.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_worksheet() -> String {
    "Sheet1".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Overrides the default location under the user data directory.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Default config file location under the user config directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| TrackerError::Config {
            message: "could not determine user config directory".to_string(),
        })?;
        Ok(config_dir.join("chess-tracker").join("config.toml"))
    }

    /// Load the config file.
    ///
    /// An explicitly given path must exist; a missing file at the default
    /// location just means defaults (local SQLite store, default players).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(TrackerError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| TrackerError::Config {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// The names a match winner may be picked from: the two configured
    /// players plus the fixed third entrant.
    pub fn roster(&self) -> Vec<String> {
        vec![
            self.players.one.clone(),
            self.players.two.clone(),
            THIRD_ENTRANT.to_string(),
        ]
    }

    /// Resolve the Sheets access token: env var first, then the config file.
    pub fn sheets_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var(SHEETS_TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
        self.sheets
            .as_ref()
            .and_then(|s| s.access_token.clone())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TrackerError::MissingAccessToken {
                env_var: SHEETS_TOKEN_ENV_VAR.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_sqlite() {
        let config = Config::default();
        assert_eq!(config.store, StoreBackend::Sqlite);
        assert!(config.sheets.is_none());
        assert_eq!(config.players.one, "User 1");
        assert_eq!(config.players.two, "User 2");
    }

    #[test]
    fn test_roster_includes_third_entrant() {
        let config = Config::default();
        assert_eq!(config.roster(), vec!["User 1", "User 2", "User 3"]);
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            store = "sheets"

            [players]
            one = "Alice"
            two = "Bob"

            [sheets]
            spreadsheet_id = "1AbC"
            worksheet = "Results"
            access_token = "token-from-file"

            [database]
            path = "/tmp/results.db"
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.store, StoreBackend::Sheets);
        assert_eq!(config.players.one, "Alice");
        assert_eq!(config.roster(), vec!["Alice", "Bob", "User 3"]);

        let sheets = config.sheets.unwrap();
        assert_eq!(sheets.spreadsheet_id, "1AbC");
        assert_eq!(sheets.worksheet, "Results");
        assert_eq!(sheets.access_token.as_deref(), Some("token-from-file"));
        assert_eq!(
            config.database.path.as_deref(),
            Some(Path::new("/tmp/results.db"))
        );
    }

    #[test]
    fn test_parse_minimal_sheets_config_defaults_worksheet() {
        let raw = r#"
            [sheets]
            spreadsheet_id = "1AbC"
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        // Backend selection is independent of the [sheets] section existing.
        assert_eq!(config.store, StoreBackend::Sqlite);
        assert_eq!(config.sheets.unwrap().worksheet, "Sheet1");
    }

    #[test]
    fn test_parse_rejects_unknown_backend() {
        let result = toml::from_str::<Config>(r#"store = "postgres""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = Config::load(Some(&missing));
        assert!(matches!(result, Err(TrackerError::Config { .. })));
    }

    #[test]
    fn test_load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[players]\none = \"Carol\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.players.one, "Carol");
        assert_eq!(config.players.two, "User 2");
    }
}
