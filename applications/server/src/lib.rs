//! Storyboard Server Library
//!
//! HTTP leaderboard service: users identified by a chat-platform ID, ranked
//! by the number of stories they have told.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod seed;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{SeedUser, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
