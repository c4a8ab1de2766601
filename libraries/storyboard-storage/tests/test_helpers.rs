//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

use storyboard_core::NewUser;
use storyboard_storage::UserStore;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: UserStore,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let store = UserStore::new(&db_url)
            .await
            .expect("Failed to open test store");

        Self {
            store,
            _temp_dir: temp_dir,
        }
    }
}

/// Test fixture: a valid creation record
pub fn new_user(id: &str, name: &str, story_count: i64) -> NewUser {
    NewUser {
        id: id.to_string(),
        name: name.to_string(),
        story_count,
        last_story: None,
    }
}
