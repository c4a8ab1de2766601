/// User domain types
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Chat-platform user ID, externally supplied, immutable
    pub id: String,

    /// Display name (mutable)
    pub name: String,

    /// Number of stories told, the leaderboard ranking key
    pub story_count: i64,

    /// Date of the most recent story, if any
    pub last_story: Option<NaiveDate>,
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Chat-platform user ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Initial story count, defaults to 0
    pub story_count: i64,

    /// Date of the most recent story, defaults to absent
    pub last_story: Option<NaiveDate>,
}
