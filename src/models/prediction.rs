use serde::{Deserialize, Serialize};

/// Outcome of a rating prediction.
///
/// `Unpredictable` is a distinct variant rather than a numeric sentinel, so
/// evaluation code can exclude or separately account for those cases without
/// guessing whether a value like 0.0 or -1.0 was a real estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Prediction {
    /// A similarity-weighted estimate of the rating
    Predicted { rating: f64 },
    /// No positively-correlated rated movie was available to estimate from
    Unpredictable,
}

impl Prediction {
    /// The predicted rating, when one exists
    pub fn rating(&self) -> Option<f64> {
        match self {
            Prediction::Predicted { rating } => Some(*rating),
            Prediction::Unpredictable => None,
        }
    }

    pub fn is_predictable(&self) -> bool {
        matches!(self, Prediction::Predicted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_serde_tagged() {
        let json = serde_json::to_string(&Prediction::Predicted { rating: 4.25 }).unwrap();
        assert_eq!(json, r#"{"status":"predicted","rating":4.25}"#);

        let json = serde_json::to_string(&Prediction::Unpredictable).unwrap();
        assert_eq!(json, r#"{"status":"unpredictable"}"#);

        let parsed: Prediction = serde_json::from_str(r#"{"status":"unpredictable"}"#).unwrap();
        assert_eq!(parsed, Prediction::Unpredictable);
    }

    #[test]
    fn test_prediction_accessors() {
        assert_eq!(Prediction::Predicted { rating: 3.5 }.rating(), Some(3.5));
        assert_eq!(Prediction::Unpredictable.rating(), None);
        assert!(Prediction::Predicted { rating: 3.5 }.is_predictable());
        assert!(!Prediction::Unpredictable.is_predictable());
    }
}
