/// User store implementation
use crate::error::{Result, StorageError};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use storyboard_core::{NewUser, User};

// Embedded migrations for reliability across execution contexts
const MIGRATIONS: &[&str] = &[include_str!("../migrations/20250601000001_create_users.sql")];

/// SQLite-backed store for leaderboard users
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open (or create) the database and apply migrations
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a store from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    /// Returns [`StorageError::DuplicateId`] when the id already exists and
    /// [`StorageError::ConstraintViolation`] for other schema failures.
    pub async fn create(&self, new_user: &NewUser) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (id, name, story_count, last_story) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_user.id)
        .bind(&new_user.name)
        .bind(new_user.story_count)
        .bind(new_user.last_story)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_insert(e, &new_user.id))?;

        Ok(())
    }

    /// Get a user by id, or `None` if absent
    pub async fn get(&self, id: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, story_count, last_story FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    /// All users ordered by `story_count` descending
    ///
    /// Ties keep storage order; no secondary sort key is defined. Returns an
    /// empty vec (never an error) when the table is empty.
    pub async fn list_by_story_count(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            "SELECT id, name, story_count, last_story FROM users ORDER BY story_count DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    /// Whether a user with the given id exists
    ///
    /// Check-then-act callers (the seeder) must treat the unique constraint
    /// on `id` as the backstop for concurrent creates, not this check.
    pub async fn exists(&self, id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

/// Map a `users` row to the domain record
fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        story_count: row.try_get("story_count")?,
        last_story: row.try_get::<Option<NaiveDate>, _>("last_story")?,
    })
}
