//! One submission, one pass: impute → classify → score → filter → rank → advise.
//!
//! `RecommendationContext` is built once at startup and never mutated afterwards;
//! handlers share it behind an `Arc` and read it without locking.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::inference::artifacts::{load_classifier, load_imputer};
use crate::inference::{predict_group, GroupClassifier, Imputer};
use crate::models::career::QualifiedCareer;
use crate::models::subject::{FeatureVector, SubjectScores};
use crate::recommendation::advisor::{improvement_areas, ImprovementArea, ImprovementTips};
use crate::recommendation::catalog::CareerCatalog;
use crate::recommendation::ranking::{rank, recommendation_message};
use crate::recommendation::scoring::qualifying_careers;

/// Everything a recommendation needs, loaded once.
pub struct RecommendationContext {
    pub catalog: CareerCatalog,
    pub tips: ImprovementTips,
    pub imputer: Arc<dyn Imputer>,
    pub classifier: Arc<dyn GroupClassifier>,
}

/// Result of one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Advisory only. Never used to filter careers.
    pub predicted_group: Option<String>,
    /// How many careers qualified before truncation.
    pub match_count: usize,
    pub message: String,
    pub careers: Vec<QualifiedCareer>,
    pub improvement_areas: Vec<ImprovementArea>,
}

impl RecommendationContext {
    pub fn new(
        catalog: CareerCatalog,
        tips: ImprovementTips,
        imputer: Arc<dyn Imputer>,
        classifier: Arc<dyn GroupClassifier>,
    ) -> Self {
        for subject in tips.missing_subjects() {
            error!("Improvement tip table has no entry for '{}'", subject.key());
        }
        Self {
            catalog,
            tips,
            imputer,
            classifier,
        }
    }

    /// Loads the catalog, imputer and classifier named in config. Any failure is fatal.
    pub fn load(config: &Config) -> Result<Self> {
        let catalog = CareerCatalog::load(&config.career_mapping_path)?;
        let imputer = load_imputer(&config.imputer_path)?;
        let classifier = load_classifier(&config.career_model_path)?;

        Ok(Self::new(
            catalog,
            ImprovementTips::default(),
            Arc::new(imputer),
            Arc::new(classifier),
        ))
    }

    pub fn recommend(&self, scores: &SubjectScores) -> Recommendation {
        let features = FeatureVector::from_scores(scores);
        let predicted_group =
            predict_group(self.imputer.as_ref(), self.classifier.as_ref(), &features);

        let qualified = qualifying_careers(scores, &self.catalog);
        let careers = rank(&qualified);
        let improvement_areas = improvement_areas(scores, &self.tips);

        info!(
            "Recommendation computed: {} qualified, {} returned, {} weak areas, predicted group {:?}",
            qualified.len(),
            careers.len(),
            improvement_areas.len(),
            predicted_group
        );

        Recommendation {
            predicted_group,
            match_count: qualified.len(),
            message: recommendation_message(qualified.len()),
            careers,
            improvement_areas,
        }
    }
}
