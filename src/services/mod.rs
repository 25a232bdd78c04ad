pub mod evaluation;
pub mod predictor;
pub mod similarity;

pub use evaluation::{evaluate, EvaluatedCase, EvaluationReport};
pub use predictor::{PredictError, Predictor};
pub use similarity::{movie_similarity, pearson, MIN_CO_RATERS};
