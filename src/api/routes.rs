use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/movies", get(handlers::get_movies))
        .route("/movies/:movie_id", get(handlers::get_movie))
        // Ratings
        .route("/users/:user_id/ratings", get(handlers::get_user_ratings))
        // Prediction
        .route(
            "/users/:user_id/predictions/:movie_id",
            get(handlers::get_prediction),
        )
        // Offline evaluation
        .route("/evaluate", get(handlers::run_evaluation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
