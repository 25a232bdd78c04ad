use std::sync::Arc;

use crate::models::{MovieCatalog, RatingEvent, RatingTable};

/// Shared application state.
///
/// The catalog and rating table are immutable once loaded, so handlers share
/// them through plain `Arc`s; concurrent predictions are read-only queries
/// and need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
    pub table: Arc<RatingTable>,
    pub test_set: Option<Arc<Vec<RatingEvent>>>,
}

impl AppState {
    /// Creates application state over a loaded dataset
    pub fn new(catalog: MovieCatalog, table: RatingTable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            table: Arc::new(table),
            test_set: None,
        }
    }

    /// Attaches a held-out test set for the evaluation endpoint
    pub fn with_test_set(mut self, test_set: Vec<RatingEvent>) -> Self {
        self.test_set = Some(Arc::new(test_set));
        self
    }
}
