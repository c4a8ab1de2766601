/// Router assembly
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `/users` and `/users/` are registered separately: a GET with no id behaves
/// like the leaderboard, matching the original API surface.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::users::leaderboard))
        .route("/leaderboard", get(api::users::leaderboard))
        .route(
            "/users",
            get(api::users::leaderboard).post(api::users::create_user),
        )
        .route(
            "/users/",
            get(api::users::leaderboard).post(api::users::create_user),
        )
        .route(
            "/users/:id",
            get(api::users::get_user).put(api::users::update_user),
        )
        .route("/create_dummy_data", post(api::seed::create_dummy_data))
        .route("/health", get(api::health::health))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
