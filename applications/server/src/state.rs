/// Shared application state
use std::sync::Arc;
use storyboard_core::NewUser;
use storyboard_storage::UserStore;

/// Application state shared across all handlers
///
/// Handlers hold no state of their own between requests; the store is the
/// only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub fixtures: Arc<Vec<NewUser>>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, fixtures: Vec<NewUser>) -> Self {
        Self {
            store,
            fixtures: Arc::new(fixtures),
        }
    }
}
