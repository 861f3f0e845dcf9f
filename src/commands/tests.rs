//! Unit tests for command helpers

use super::common::build_store;
use super::matches::match_table;
use super::standings::standings;
use crate::config::{Config, SheetsConfig, StoreBackend};
use crate::registry::{Colour, MatchRecord};
use crate::TrackerError;

fn record(winner: &str, colour: Colour, date: &str) -> MatchRecord {
    MatchRecord {
        winner: winner.to_string(),
        colour,
        date: date.parse().unwrap(),
    }
}

#[test]
fn test_standings_maps_win_counts_to_lines() {
    let matches = vec![
        record("User 1", Colour::White, "2024-03-01"),
        record("User 2", Colour::Black, "2024-03-02"),
        record("User 1", Colour::White, "2024-03-03"),
    ];

    let lines = standings(&matches);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].player, "User 1");
    assert_eq!(lines[0].wins, 2);
    assert_eq!(lines[1].player, "User 2");
    assert_eq!(lines[1].wins, 1);
}

#[test]
fn test_standings_serialize_as_player_wins_objects() {
    let matches = vec![record("User 1", Colour::White, "2024-03-01")];
    let json = serde_json::to_value(standings(&matches)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "player": "User 1", "wins": 1 }])
    );
}

#[test]
fn test_match_table_shows_sheet_columns() {
    let matches = vec![record("User 1", Colour::White, "2024-03-01")];
    let table = match_table(&matches);

    assert!(table.contains("Winner"));
    assert!(table.contains("Winner Colour"));
    assert!(table.contains("Date"));
    assert!(table.contains("User 1"));
    assert!(table.contains("White"));
    assert!(table.contains("2024-03-01"));
}

#[test]
fn test_build_store_sqlite_uses_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.database.path = Some(dir.path().join("results.db"));

    assert!(build_store(&config).is_ok());
    assert!(dir.path().join("results.db").exists());
}

#[test]
fn test_build_store_sheets_requires_section() {
    let config = Config {
        store: StoreBackend::Sheets,
        ..Config::default()
    };

    let err = build_store(&config).err().unwrap();
    assert!(matches!(err, TrackerError::MissingSheetsConfig));
}

#[test]
fn test_build_store_sheets_with_file_token() {
    let config = Config {
        store: StoreBackend::Sheets,
        sheets: Some(SheetsConfig {
            spreadsheet_id: "1AbC".to_string(),
            worksheet: "Sheet1".to_string(),
            access_token: Some("token-from-file".to_string()),
        }),
        ..Config::default()
    };

    assert!(build_store(&config).is_ok());
}
