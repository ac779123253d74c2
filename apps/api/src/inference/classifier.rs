use serde::{Deserialize, Serialize};

use crate::inference::{GroupClassifier, InferenceError};
use crate::models::subject::{FeatureVector, FEATURE_COUNT};

/// On-disk shape of a fitted linear multi-class model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// One-vs-rest linear classifier: picks the class with the largest
/// `coef[c] · x + intercept[c]`. The first class wins ties.
#[derive(Debug, Clone)]
pub struct LinearGroupClassifier {
    classes: Vec<String>,
    coef: Vec<[f64; FEATURE_COUNT]>,
    intercept: Vec<f64>,
}

impl LinearGroupClassifier {
    pub fn new(
        classes: Vec<String>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    ) -> Result<Self, InferenceError> {
        if classes.is_empty() {
            return Err(InferenceError::EmptyModel);
        }
        if coef.len() != classes.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: classes.len(),
                actual: coef.len(),
            });
        }
        if intercept.len() != classes.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: classes.len(),
                actual: intercept.len(),
            });
        }

        let coef = coef
            .iter()
            .map(|row| {
                row.as_slice()
                    .try_into()
                    .map_err(|_| InferenceError::ShapeMismatch {
                        expected: FEATURE_COUNT,
                        actual: row.len(),
                    })
            })
            .collect::<Result<Vec<[f64; FEATURE_COUNT]>, _>>()?;

        let non_finite = coef
            .iter()
            .zip(intercept.iter())
            .position(|(row, b)| !b.is_finite() || row.iter().any(|w| !w.is_finite()));
        if let Some(class) = non_finite {
            return Err(InferenceError::NonFiniteParameter { class });
        }

        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, InferenceError> {
        Self::new(artifact.classes, artifact.coef, artifact.intercept)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn decision(&self, class: usize, x: &[f64; FEATURE_COUNT]) -> f64 {
        self.coef[class]
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.intercept[class]
    }
}

impl GroupClassifier for LinearGroupClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        if let Some(index) = features.0.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFiniteFeature { index });
        }

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for class in 0..self.classes.len() {
            let score = self.decision(class, &features.0);
            // Finite weights and inputs can still overflow.
            if !score.is_finite() {
                return Err(InferenceError::NonFiniteDecision { class });
            }
            if score > best_score {
                best = class;
                best_score = score;
            }
        }
        Ok(self.classes[best].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class() -> LinearGroupClassifier {
        // "Science" favours math/physics, "Humanities" favours english/history.
        LinearGroupClassifier::new(
            vec!["Science".to_string(), "Humanities".to_string()],
            vec![
                vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            ],
            vec![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_predicts_highest_decision_value() {
        let c = two_class();
        let sci = FeatureVector([95.0, 90.0, 50.0, 50.0, 40.0, 40.0, 50.0, 20.0]);
        let hum = FeatureVector([40.0, 40.0, 50.0, 50.0, 95.0, 90.0, 50.0, 20.0]);
        assert_eq!(c.predict(&sci).unwrap(), "Science");
        assert_eq!(c.predict(&hum).unwrap(), "Humanities");
    }

    #[test]
    fn test_tie_goes_to_first_class() {
        let c = two_class();
        let tie = FeatureVector([50.0; 8]);
        assert_eq!(c.predict(&tie).unwrap(), "Science");
    }

    #[test]
    fn test_rejects_nan_feature() {
        let mut x = [50.0; 8];
        x[5] = f64::NAN;
        assert_eq!(
            two_class().predict(&FeatureVector(x)).unwrap_err(),
            InferenceError::NonFiniteFeature { index: 5 }
        );
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let classes = vec!["A".to_string(), "B".to_string()];
        let mut coef = vec![vec![1.0; 8], vec![1.0; 8]];
        coef[1][3] = f64::NAN;
        assert_eq!(
            LinearGroupClassifier::new(classes.clone(), coef, vec![0.0, 0.0]).unwrap_err(),
            InferenceError::NonFiniteParameter { class: 1 }
        );
        assert_eq!(
            LinearGroupClassifier::new(classes, vec![vec![1.0; 8]; 2], vec![f64::INFINITY, 0.0])
                .unwrap_err(),
            InferenceError::NonFiniteParameter { class: 0 }
        );
    }

    #[test]
    fn test_overflowing_decision_is_an_error() {
        let c = LinearGroupClassifier::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![0.0; 8], vec![f64::MAX; 8]],
            vec![0.0, 0.0],
        )
        .unwrap();
        assert_eq!(
            c.predict(&FeatureVector([100.0; 8])).unwrap_err(),
            InferenceError::NonFiniteDecision { class: 1 }
        );
    }

    #[test]
    fn test_shape_validation() {
        assert_eq!(
            LinearGroupClassifier::new(vec![], vec![], vec![]).unwrap_err(),
            InferenceError::EmptyModel
        );
        assert!(matches!(
            LinearGroupClassifier::new(vec!["A".into()], vec![vec![1.0; 7]], vec![0.0]),
            Err(InferenceError::ShapeMismatch {
                expected: 8,
                actual: 7
            })
        ));
        assert!(matches!(
            LinearGroupClassifier::new(vec!["A".into()], vec![vec![1.0; 8]], vec![]),
            Err(InferenceError::ShapeMismatch { .. })
        ));
    }
}
