use serde::{Deserialize, Serialize};

use crate::inference::{Imputer, InferenceError};
use crate::models::subject::{FeatureVector, FEATURE_COUNT};

/// On-disk shape of a fitted imputer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImputerArtifact {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    pub statistics: Vec<f64>,
}

fn default_strategy() -> String {
    "mean".to_string()
}

/// Feature-wise fallback imputer: every non-finite entry is replaced by the
/// learned statistic at the same index.
#[derive(Debug, Clone)]
pub struct MeanImputer {
    statistics: [f64; FEATURE_COUNT],
}

impl MeanImputer {
    pub fn new(statistics: &[f64]) -> Result<Self, InferenceError> {
        let statistics: [f64; FEATURE_COUNT] =
            statistics
                .try_into()
                .map_err(|_| InferenceError::ShapeMismatch {
                    expected: FEATURE_COUNT,
                    actual: statistics.len(),
                })?;
        if let Some(index) = statistics.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFiniteFeature { index });
        }
        Ok(Self { statistics })
    }

    pub fn from_artifact(artifact: &ImputerArtifact) -> Result<Self, InferenceError> {
        match artifact.strategy.as_str() {
            // A fitted median or most-frequent imputer stores its fill values the same way.
            "mean" | "median" | "most_frequent" | "constant" => Self::new(&artifact.statistics),
            other => Err(InferenceError::UnsupportedStrategy(other.to_string())),
        }
    }
}

impl Imputer for MeanImputer {
    fn transform(&self, raw: &FeatureVector) -> Result<FeatureVector, InferenceError> {
        let mut out = raw.0;
        for (value, fill) in out.iter_mut().zip(self.statistics.iter()) {
            if !value.is_finite() {
                *value = *fill;
            }
        }
        Ok(FeatureVector(out))
    }
}
