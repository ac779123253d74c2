//! Group prediction — the imputer and classifier the recommendation core consults.
//!
//! Both are opaque collaborators loaded from JSON artifacts at startup. The predicted
//! group is advisory metadata on a recommendation; it never restricts which careers
//! qualify.
//!
//! `RecommendationContext` holds them as `Arc<dyn Imputer>` / `Arc<dyn GroupClassifier>`,
//! so tests can swap in mocks.

pub mod artifacts;
pub mod classifier;
pub mod imputer;

use thiserror::Error;

use crate::models::subject::FeatureVector;

pub use classifier::LinearGroupClassifier;
pub use imputer::MeanImputer;

#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature {index} is not a finite number")]
    NonFiniteFeature { index: usize },

    #[error("model parameter for class {class} is not a finite number")]
    NonFiniteParameter { class: usize },

    #[error("decision value for class {class} is not a finite number")]
    NonFiniteDecision { class: usize },

    #[error("model has no classes")]
    EmptyModel,

    #[error("unsupported imputation strategy '{0}'")]
    UnsupportedStrategy(String),
}

/// Fills missing or invalid feature values before classification.
pub trait Imputer: Send + Sync {
    fn transform(&self, raw: &FeatureVector) -> Result<FeatureVector, InferenceError>;
}

/// Predicts a coarse career group from a complete feature vector.
pub trait GroupClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError>;
}

/// Runs impute → classify. Any failure degrades to `None` with a warning.
pub fn predict_group(
    imputer: &dyn Imputer,
    classifier: &dyn GroupClassifier,
    raw: &FeatureVector,
) -> Option<String> {
    let imputed = match imputer.transform(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Imputer failed, omitting predicted group: {e}");
            return None;
        }
    };

    match classifier.predict(&imputed) {
        Ok(group) => Some(group),
        Err(e) => {
            tracing::warn!("Classifier failed, omitting predicted group: {e}");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;

    /// Returns the input untouched.
    pub struct PassthroughImputer;

    impl Imputer for PassthroughImputer {
        fn transform(&self, raw: &FeatureVector) -> Result<FeatureVector, InferenceError> {
            Ok(*raw)
        }
    }

    pub struct BrokenImputer;

    impl Imputer for BrokenImputer {
        fn transform(&self, _raw: &FeatureVector) -> Result<FeatureVector, InferenceError> {
            Err(InferenceError::ShapeMismatch {
                expected: 8,
                actual: 3,
            })
        }
    }

    /// Always predicts the same group.
    pub struct FixedClassifier(pub &'static str);

    impl GroupClassifier for FixedClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<String, InferenceError> {
            Ok(self.0.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;
    use crate::models::subject::{Subject, SubjectScores};

    #[test]
    fn test_predict_group_happy_path() {
        let fv = FeatureVector([50.0; 8]);
        let group = predict_group(&PassthroughImputer, &FixedClassifier("STEM"), &fv);
        assert_eq!(group.as_deref(), Some("STEM"));
    }

    #[test]
    fn test_broken_imputer_omits_group() {
        let fv = FeatureVector([50.0; 8]);
        assert_eq!(
            predict_group(&BrokenImputer, &FixedClassifier("STEM"), &fv),
            None
        );
    }

    #[test]
    fn test_classifier_rejecting_nan_omits_group() {
        let classifier = LinearGroupClassifier::new(
            vec!["A".to_string()],
            vec![vec![1.0; 8]],
            vec![0.0],
        )
        .unwrap();
        let fv = FeatureVector::from_scores(&SubjectScores::new().with(Subject::Math, 10));
        assert_eq!(predict_group(&PassthroughImputer, &classifier, &fv), None);
    }
}
