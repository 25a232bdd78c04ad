use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{Movie, MovieId, Prediction, UserId};
use crate::services::{evaluate, EvaluationReport, Predictor};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: MovieId,
    pub title: String,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserRatingResponse {
    pub movie_id: MovieId,
    pub title: String,
    pub rating: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub title: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get all movies in the catalog
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<MovieResponse>> {
    let mut movies: Vec<MovieResponse> = state.catalog.iter().map(MovieResponse::from).collect();
    movies.sort_by_key(|m| m.id);
    Json(movies)
}

/// Get a single movie by id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<u32>,
) -> AppResult<Json<MovieResponse>> {
    let movie_id = MovieId(movie_id);
    let movie = state
        .catalog
        .get(movie_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown movie id: {}", movie_id)))?;
    Ok(Json(MovieResponse::from(movie)))
}

/// Get all ratings a user has given
pub async fn get_user_ratings(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> AppResult<Json<Vec<UserRatingResponse>>> {
    let user_id = UserId(user_id);
    let rated = state
        .table
        .movies_rated_by(user_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown user id: {}", user_id)))?;

    let mut ratings: Vec<UserRatingResponse> = rated
        .iter()
        .map(|(&movie_id, &rating)| UserRatingResponse {
            movie_id,
            title: state.catalog.title(movie_id).to_string(),
            rating,
        })
        .collect();
    ratings.sort_by_key(|r| r.movie_id);
    Ok(Json(ratings))
}

/// Predict the rating a user would give a movie
pub async fn get_prediction(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(u32, u32)>,
) -> AppResult<Json<PredictionResponse>> {
    let user_id = UserId(user_id);
    let movie_id = MovieId(movie_id);

    let predictor = Predictor::new(&state.table);
    let prediction = predictor.predict(user_id, movie_id)?;

    tracing::debug!(%user_id, %movie_id, ?prediction, "Prediction computed");

    Ok(Json(PredictionResponse {
        user_id,
        movie_id,
        title: state.catalog.title(movie_id).to_string(),
        prediction,
    }))
}

/// Run offline accuracy evaluation over the configured test set
pub async fn run_evaluation(State(state): State<AppState>) -> AppResult<Json<EvaluationReport>> {
    let test_set = state.test_set.as_ref().ok_or_else(|| {
        AppError::InvalidInput("No test ratings file was configured".to_string())
    })?;

    let report = evaluate(&state.table, &state.catalog, test_set)?;

    tracing::info!(
        evaluated = report.evaluated,
        unpredictable = report.unpredictable,
        correlation = ?report.correlation,
        "Evaluation finished"
    );

    Ok(Json(report))
}
