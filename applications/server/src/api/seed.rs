/// Dummy-data API route
use crate::{error::Result, seed, seed::SeedReport, state::AppState};
use axum::{extract::State, Json};

/// POST /create_dummy_data
/// Seed the configured fixture users; idempotent
pub async fn create_dummy_data(State(app_state): State<AppState>) -> Result<Json<SeedReport>> {
    let report = seed::seed_fixtures(&app_state.store, &app_state.fixtures).await?;
    Ok(Json(report))
}
