//! Storyboard Core
//!
//! Platform-agnostic domain types and input validation for the Storyboard
//! leaderboard service.
//!
//! This crate defines:
//! - **Domain Types**: `User`, `NewUser`
//! - **Validation**: untyped JSON payload -> typed creation record, or a
//!   list of per-field errors
//!
//! # Example
//!
//! ```rust
//! use storyboard_core::validate_new_user;
//! use serde_json::json;
//!
//! let payload = json!({ "id": "LOLJK", "name": "dal", "story_count": 5 });
//! let new_user = validate_new_user(&payload).expect("valid payload");
//! assert_eq!(new_user.story_count, 5);
//! ```

#![forbid(unsafe_code)]

pub mod types;
pub mod validate;

// Re-export commonly used types
pub use types::{NewUser, User};
pub use validate::{validate_new_user, FieldError};
