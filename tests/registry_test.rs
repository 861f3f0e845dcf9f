//! Integration tests for registry + store flows

use chess_tracker::{
    registry::{win_counts, Colour, MatchRecord, Registry},
    store::{SheetStore, SqliteStore},
    TrackerError,
};

fn roster() -> Vec<String> {
    vec![
        "User 1".to_string(),
        "User 2".to_string(),
        "User 3".to_string(),
    ]
}

fn record(winner: &str, colour: Colour, date: &str) -> MatchRecord {
    MatchRecord {
        winner: winner.to_string(),
        colour,
        date: date.parse().unwrap(),
    }
}

#[tokio::test]
async fn test_full_session_flow() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.ensure_schema().await.unwrap();

    // Fresh store, fresh registry.
    let mut registry = Registry::hydrate(&store).await.unwrap();
    assert!(registry.is_empty());

    registry.create_championship(&store, "Spring Cup").await.unwrap();
    for (winner, colour, date) in [
        ("User 1", Colour::White, "2024-03-01"),
        ("User 2", Colour::Black, "2024-03-02"),
        ("User 1", Colour::White, "2024-03-03"),
    ] {
        registry
            .record_match(&store, "Spring Cup", record(winner, colour, date), &roster())
            .await
            .unwrap();
    }

    let spring = registry.get("Spring Cup").unwrap();
    assert_eq!(
        win_counts(&spring.matches),
        vec![("User 1".to_string(), 2), ("User 2".to_string(), 1)]
    );

    // A second session over the same store sees the same state.
    let rehydrated = Registry::hydrate(&store).await.unwrap();
    assert_eq!(rehydrated.names(), vec!["Spring Cup"]);
    assert_eq!(rehydrated.get("Spring Cup").unwrap().matches.len(), 3);
    assert_eq!(rehydrated.rows(), registry.rows());
}

#[tokio::test]
async fn test_rejected_actions_do_not_touch_the_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = Registry::hydrate(&store).await.unwrap();
    registry.create_championship(&store, "Spring Cup").await.unwrap();

    assert!(matches!(
        registry.create_championship(&store, "Spring Cup").await,
        Err(TrackerError::DuplicateChampionship { .. })
    ));
    assert!(matches!(
        registry.create_championship(&store, "").await,
        Err(TrackerError::EmptyChampionshipName)
    ));
    assert!(matches!(
        registry
            .record_match(
                &store,
                "Winter Open",
                record("User 1", Colour::White, "2024-03-01"),
                &roster()
            )
            .await,
        Err(TrackerError::UnknownChampionship { .. })
    ));

    assert_eq!(store.read_all().await.unwrap().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_cross_championship_tally() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut registry = Registry::hydrate(&store).await.unwrap();

    registry.create_championship(&store, "Spring Cup").await.unwrap();
    registry.create_championship(&store, "Winter Open").await.unwrap();

    registry
        .record_match(
            &store,
            "Spring Cup",
            record("User 1", Colour::White, "2024-03-01"),
            &roster(),
        )
        .await
        .unwrap();
    registry
        .record_match(
            &store,
            "Winter Open",
            record("User 1", Colour::Black, "2024-11-01"),
            &roster(),
        )
        .await
        .unwrap();
    registry
        .record_match(
            &store,
            "Winter Open",
            record("User 3", Colour::White, "2024-11-02"),
            &roster(),
        )
        .await
        .unwrap();

    assert_eq!(
        win_counts(registry.all_matches()),
        vec![("User 1".to_string(), 2), ("User 3".to_string(), 1)]
    );
    assert_eq!(
        win_counts(&registry.get("Winter Open").unwrap().matches),
        vec![("User 1".to_string(), 1), ("User 3".to_string(), 1)]
    );
}
