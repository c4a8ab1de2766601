//! Dummy-data seeder
//!
//! Idempotent bulk insert of the configured fixture users. Existing ids are
//! skipped; running the seeder twice creates nothing on the second pass.

use serde::Serialize;
use storyboard_core::NewUser;
use storyboard_storage::{StorageError, UserStore};

/// Outcome of one seeding pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Insert every fixture whose id is not already present
///
/// The exists-then-create sequence is a check-then-act race under concurrent
/// requests; a `DuplicateId` from the insert means another caller won, and
/// that fixture counts as skipped.
///
/// # Errors
///
/// Returns the first unclassified storage error; duplicate-id failures are
/// absorbed as skips.
pub async fn seed_fixtures(
    store: &UserStore,
    fixtures: &[NewUser],
) -> Result<SeedReport, StorageError> {
    let mut created = 0;
    let mut skipped = 0;

    for fixture in fixtures {
        if store.exists(&fixture.id).await? {
            skipped += 1;
            continue;
        }

        match store.create(fixture).await {
            Ok(()) => created += 1,
            Err(StorageError::DuplicateId { .. }) => skipped += 1,
            Err(err) => return Err(err),
        }
    }

    Ok(SeedReport { created, skipped })
}
