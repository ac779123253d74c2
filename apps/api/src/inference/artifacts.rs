use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::inference::classifier::ClassifierArtifact;
use crate::inference::imputer::ImputerArtifact;
use crate::inference::{LinearGroupClassifier, MeanImputer};

/// Reads and deserializes a JSON artifact. Any failure is fatal for startup.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read artifact '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Artifact '{}' is not valid JSON for its type", path.display()))
}

pub fn load_imputer(path: &Path) -> Result<MeanImputer> {
    let artifact: ImputerArtifact = read_json_file(path)?;
    let imputer = MeanImputer::from_artifact(&artifact)
        .with_context(|| format!("Imputer artifact '{}' is malformed", path.display()))?;
    info!(
        "Imputer loaded from {} (strategy: {})",
        path.display(),
        artifact.strategy
    );
    Ok(imputer)
}

pub fn load_classifier(path: &Path) -> Result<LinearGroupClassifier> {
    let artifact: ClassifierArtifact = read_json_file(path)?;
    let classifier = LinearGroupClassifier::from_artifact(artifact)
        .with_context(|| format!("Classifier artifact '{}' is malformed", path.display()))?;
    info!(
        "Group classifier loaded from {} ({} classes)",
        path.display(),
        classifier.classes().len()
    );
    Ok(classifier)
}
