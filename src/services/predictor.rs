use thiserror::Error;

use crate::models::{MovieId, Prediction, RatingTable, UserId};

use super::similarity::movie_similarity;

/// Error types for the predictor
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("Unknown user id: {0}")]
    UnknownUser(UserId),
    #[error("Unknown movie id: {0}")]
    UnknownMovie(MovieId),
}

/// Item-based collaborative-filtering rating predictor.
///
/// Estimates the rating a user would give a movie as the similarity-weighted
/// average of the user's own ratings on movies whose rating patterns
/// positively correlate with the target. Candidates whose similarity is
/// undefined, or at or below `min_similarity`, carry no weight.
///
/// The default threshold of 0.0 drops every non-positive correlation; a
/// stricter policy can be substituted without touching the similarity
/// computation itself.
pub struct Predictor<'a> {
    table: &'a RatingTable,
    min_similarity: f64,
}

impl<'a> Predictor<'a> {
    /// Creates a predictor over the given rating table
    pub fn new(table: &'a RatingTable) -> Self {
        Self {
            table,
            min_similarity: 0.0,
        }
    }

    /// Overrides the similarity cutoff; candidates at or below it are dropped
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Predicts the rating `user` would give `movie`.
    ///
    /// Unknown identifiers are a caller contract violation and fail with
    /// [`PredictError`]. Calling on a movie the user has already rated is
    /// permitted (evaluation against ground truth relies on it); the stored
    /// rating is not echoed back and the movie never appears in its own
    /// candidate set.
    ///
    /// When a prediction exists, it lies between the minimum and maximum of
    /// the contributing ratings: the surviving weights are strictly positive
    /// and normalized by their sum. Ratings in-scale on input therefore stay
    /// in-scale, with no explicit clamping.
    pub fn predict(&self, user: UserId, movie: MovieId) -> Result<Prediction, PredictError> {
        let rated = self
            .table
            .movies_rated_by(user)
            .ok_or(PredictError::UnknownUser(user))?;
        if !self.table.knows_movie(movie) {
            return Err(PredictError::UnknownMovie(movie));
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (&candidate, &rating) in rated {
            if candidate == movie {
                continue;
            }
            let Some(similarity) = movie_similarity(self.table, movie, candidate) else {
                continue;
            };
            // Explicit filter step: non-positive correlation carries no
            // predictive weight
            if similarity <= self.min_similarity {
                continue;
            }
            weighted_sum += similarity * rating;
            weight_total += similarity;
        }

        if weight_total > 0.0 {
            Ok(Prediction::Predicted {
                rating: weighted_sum / weight_total,
            })
        } else {
            Ok(Prediction::Unpredictable)
        }
    }
}
