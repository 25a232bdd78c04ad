use serde::Serialize;

use crate::models::{MovieCatalog, MovieId, Prediction, RatingEvent, RatingTable, UserId};

use super::predictor::{PredictError, Predictor};
use super::similarity::pearson;

/// One evaluated test case
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvaluatedCase {
    pub user: UserId,
    pub movie: MovieId,
    pub title: String,
    pub prediction: Prediction,
    pub actual: f64,
}

/// Accuracy report over a held-out test set.
///
/// Unpredictable cases are counted separately and excluded from the
/// statistics; folding them in as some default rating would corrupt both the
/// correlation and the error figures.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub cases: Vec<EvaluatedCase>,
    pub evaluated: usize,
    pub unpredictable: usize,
    /// Pearson correlation between predicted and actual ratings; `None` when
    /// the predictable cases are too few or too uniform to correlate
    pub correlation: Option<f64>,
    /// Mean absolute error over predictable cases
    pub mean_absolute_error: Option<f64>,
}

/// Runs the predictor over each test case and aggregates accuracy statistics.
///
/// Test cases carry the rating the user actually gave, so the training table
/// may well contain the same (user, movie) pair; the predictor self-excludes
/// the target movie and never echoes the stored rating. Unknown identifiers
/// in the test set indicate a defective upstream file and propagate as
/// errors.
pub fn evaluate(
    table: &RatingTable,
    catalog: &MovieCatalog,
    test_set: &[RatingEvent],
) -> Result<EvaluationReport, PredictError> {
    let predictor = Predictor::new(table);

    let mut cases = Vec::with_capacity(test_set.len());
    let mut predicted = Vec::new();
    let mut actual = Vec::new();
    for event in test_set {
        let prediction = predictor.predict(event.user, event.movie)?;
        if let Some(rating) = prediction.rating() {
            predicted.push(rating);
            actual.push(event.rating);
        }
        cases.push(EvaluatedCase {
            user: event.user,
            movie: event.movie,
            title: catalog.title(event.movie).to_string(),
            prediction,
            actual: event.rating,
        });
    }

    let evaluated = predicted.len();
    let unpredictable = cases.len() - evaluated;
    let correlation = pearson(&predicted, &actual);
    let mean_absolute_error = if evaluated > 0 {
        let total: f64 = predicted
            .iter()
            .zip(actual.iter())
            .map(|(p, a)| (p - a).abs())
            .sum();
        Some(total / evaluated as f64)
    } else {
        None
    };

    Ok(EvaluationReport {
        cases,
        evaluated,
        unpredictable,
        correlation,
        mean_absolute_error,
    })
}
