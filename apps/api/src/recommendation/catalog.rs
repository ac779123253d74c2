//! Career catalog — the static career definitions every submission is scored against.
//!
//! Loaded once from a JSON object `name → {group, weights, threshold, description}`.
//! Declaration order is kept and is the ranking tie-break. Entries are validated one
//! by one; a bad entry is logged and dropped, it never fails a request later.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::inference::artifacts::read_json_file;
use crate::models::career::CareerDefinition;
use crate::models::subject::Subject;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown subject key '{0}' in weights")]
    UnknownSubject(String),

    #[error("weight for '{subject}' must be a non-negative number, got {weight}")]
    InvalidWeight { subject: String, weight: f64 },

    #[error("subject '{0}' is weighted more than once")]
    DuplicateSubject(String),

    #[error("threshold must be within [0, 100], got {0}")]
    ThresholdOutOfRange(f64),
}

/// A catalog entry that failed validation.
#[derive(Debug)]
pub struct RejectedEntry {
    pub name: String,
    pub reason: CatalogError,
}

/// Shape of one entry as written in the mapping file, before validation.
#[derive(Debug, Deserialize)]
struct RawCareerSpec {
    group: String,
    /// Sorted by key so the first reported problem is the same on every load.
    weights: BTreeMap<String, f64>,
    threshold: f64,
    description: String,
}

/// Read-only, validated collection of careers in declaration order.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    careers: Vec<CareerDefinition>,
}

impl CareerCatalog {
    #[cfg(test)]
    pub fn from_definitions(careers: Vec<CareerDefinition>) -> Self {
        Self { careers }
    }

    /// Validates every entry of a mapping object. Returns the catalog plus the entries
    /// that were rejected.
    pub fn from_mapping(mapping: &Map<String, Value>) -> (Self, Vec<RejectedEntry>) {
        let mut careers = Vec::with_capacity(mapping.len());
        let mut rejected = Vec::new();

        for (name, value) in mapping {
            match validate_entry(name, value) {
                Ok(career) => {
                    if career.weight_sum() <= 0.0 {
                        warn!("Career '{name}' has zero total weight and will always score 0");
                    }
                    careers.push(career);
                }
                Err(reason) => {
                    error!("Rejecting catalog entry '{name}': {reason}");
                    rejected.push(RejectedEntry {
                        name: name.clone(),
                        reason,
                    });
                }
            }
        }

        (Self { careers }, rejected)
    }

    /// Loads the mapping file. A non-object file, or one where no entry survives
    /// validation, is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = read_json_file(path)?;
        let Value::Object(mapping) = value else {
            bail!(
                "Career mapping '{}' must be a JSON object keyed by career name",
                path.display()
            );
        };

        let (catalog, rejected) = Self::from_mapping(&mapping);
        if catalog.is_empty() {
            let reasons: Vec<String> = rejected
                .iter()
                .map(|r| format!("{}: {}", r.name, r.reason))
                .collect();
            bail!(
                "Career mapping '{}' has no valid entries ({} rejected: {})",
                path.display(),
                rejected.len(),
                reasons.join("; ")
            );
        }

        info!(
            "Career catalog loaded from {}: {} careers, {} rejected",
            path.display(),
            catalog.len(),
            rejected.len()
        );
        Ok(catalog)
    }

    pub fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn get(&self, name: &str) -> Option<&CareerDefinition> {
        self.careers.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

fn validate_entry(name: &str, value: &Value) -> Result<CareerDefinition, CatalogError> {
    let raw = RawCareerSpec::deserialize(value)?;

    let mut weights = BTreeMap::new();
    for (key, weight) in raw.weights {
        let subject =
            Subject::from_key(&key).ok_or_else(|| CatalogError::UnknownSubject(key.clone()))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(CatalogError::InvalidWeight {
                subject: key,
                weight,
            });
        }
        if weights.insert(subject, weight).is_some() {
            return Err(CatalogError::DuplicateSubject(subject.key().to_string()));
        }
    }

    if !raw.threshold.is_finite() || !(0.0..=100.0).contains(&raw.threshold) {
        return Err(CatalogError::ThresholdOutOfRange(raw.threshold));
    }

    Ok(CareerDefinition {
        name: name.to_string(),
        group: raw.group,
        weights,
        threshold: raw.threshold,
        description: raw.description,
    })
}
