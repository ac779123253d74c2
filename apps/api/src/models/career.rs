use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::subject::Subject;

/// A validated catalog entry. Weights are keyed by subject and act as relative importance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerDefinition {
    pub name: String,
    pub group: String,
    pub weights: BTreeMap<Subject, f64>,
    pub threshold: f64,
    pub description: String,
}

impl CareerDefinition {
    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }
}

/// A career that met its threshold for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualifiedCareer {
    pub name: String,
    pub group: String,
    /// Weighted match score, rounded to two decimals.
    pub score: f64,
    pub threshold: f64,
    pub description: String,
    /// Position in the catalog; the ranking tie-break.
    #[serde(skip)]
    pub catalog_index: usize,
}
