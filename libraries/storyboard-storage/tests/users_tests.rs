//! Integration tests for the user store
//!
//! Covers:
//! - Create then fetch round-trips the submitted fields
//! - Duplicate id inserts fail with `DuplicateId`, never overwrite
//! - Leaderboard ordering by story_count descending
//! - `exists` check used by the seeder

mod test_helpers;

use chrono::NaiveDate;
use storyboard_core::NewUser;
use storyboard_storage::StorageError;
use test_helpers::*;

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    let record = NewUser {
        id: "LOLJK".to_string(),
        name: "dal".to_string(),
        story_count: 5,
        last_story: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
    };
    store.create(&record).await.expect("Failed to create user");

    let user = store
        .get("LOLJK")
        .await
        .expect("Failed to get user")
        .expect("User should exist");

    assert_eq!(user.id, "LOLJK");
    assert_eq!(user.name, "dal");
    assert_eq!(user.story_count, 5);
    assert_eq!(user.last_story, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
}

#[tokio::test]
async fn test_get_missing_user_returns_none() {
    let test_db = TestDb::new().await;

    let user = test_db.store.get("NOBODY").await.expect("Failed to query");
    assert!(user.is_none());
}

#[tokio::test]
async fn test_duplicate_id_fails_and_keeps_first_row() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    store
        .create(&new_user("BIGMAN", "steve", 4))
        .await
        .expect("First create should succeed");

    let err = store
        .create(&new_user("BIGMAN", "impostor", 99))
        .await
        .expect_err("Second create should fail");

    assert!(matches!(err, StorageError::DuplicateId { ref id } if id == "BIGMAN"));

    // The original row is untouched
    let user = store
        .get("BIGMAN")
        .await
        .expect("Failed to get user")
        .expect("User should exist");
    assert_eq!(user.name, "steve");
    assert_eq!(user.story_count, 4);
}

#[tokio::test]
async fn test_list_orders_by_story_count_desc() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    store.create(&new_user("ICE422", "jaina", 0)).await.unwrap();
    store.create(&new_user("LOLJK", "dal", 5)).await.unwrap();
    store.create(&new_user("BIGMAN", "steve", 4)).await.unwrap();

    let leaderboard = store
        .list_by_story_count()
        .await
        .expect("Failed to list users");

    assert_eq!(leaderboard.len(), 3);
    for pair in leaderboard.windows(2) {
        assert!(
            pair[0].story_count >= pair[1].story_count,
            "leaderboard must be non-increasing in story_count"
        );
    }
    assert_eq!(leaderboard[0].id, "LOLJK");
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let test_db = TestDb::new().await;

    let leaderboard = test_db
        .store
        .list_by_story_count()
        .await
        .expect("Failed to list users");
    assert!(leaderboard.is_empty());
}

#[tokio::test]
async fn test_exists() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    assert!(!store.exists("ICE422").await.unwrap());

    store.create(&new_user("ICE422", "jaina", 0)).await.unwrap();

    assert!(store.exists("ICE422").await.unwrap());
}

#[tokio::test]
async fn test_last_story_defaults_to_null() {
    let test_db = TestDb::new().await;
    let store = &test_db.store;

    store.create(&new_user("LOLJK", "dal", 5)).await.unwrap();

    let user = store.get("LOLJK").await.unwrap().unwrap();
    assert_eq!(user.last_story, None);
}
