//! Storyboard Storage
//!
//! `SQLite` persistence layer for the Storyboard leaderboard.
//!
//! The [`UserStore`] owns the `users` table and its invariants: `id` is the
//! primary key and duplicate inserts fail rather than overwrite. All mutating
//! calls commit as single implicit transactions.
//!
//! # Example
//!
//! ```rust,no_run
//! use storyboard_storage::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = UserStore::new("sqlite://storyboard.db").await?;
//! let leaderboard = store.list_by_story_count().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

pub use error::StorageError;
pub use store::UserStore;
