//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::{CareerDefinition, QualifiedCareer};
use crate::models::subject::{Subject, SubjectScores};
use crate::recommendation::advisor::{ImprovementArea, IMPROVEMENT_HEADING};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Form submission. Any omitted value is treated as missing, not as an error.
/// Subjects accept the short name or the canonical catalog key; anything else is rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationRequest {
    pub name: Option<String>,
    #[serde(alias = "math_score")]
    pub math: Option<i64>,
    #[serde(alias = "physics_score")]
    pub physics: Option<i64>,
    #[serde(alias = "chemistry_score")]
    pub chemistry: Option<i64>,
    #[serde(alias = "biology_score")]
    pub biology: Option<i64>,
    #[serde(alias = "english_score")]
    pub english: Option<i64>,
    #[serde(alias = "history_score")]
    pub history: Option<i64>,
    #[serde(alias = "geography_score")]
    pub geography: Option<i64>,
    #[serde(alias = "study_hours")]
    pub weekly_self_study_hours: Option<i64>,
}

impl RecommendationRequest {
    /// Range-checks every present value and builds the scores.
    pub fn to_scores(&self) -> Result<SubjectScores, AppError> {
        let inputs = [
            (Subject::Math, self.math),
            (Subject::Physics, self.physics),
            (Subject::Chemistry, self.chemistry),
            (Subject::Biology, self.biology),
            (Subject::English, self.english),
            (Subject::History, self.history),
            (Subject::Geography, self.geography),
            (Subject::StudyHours, self.weekly_self_study_hours),
        ];

        let mut scores = SubjectScores::new();
        for (subject, value) in inputs {
            let Some(value) = value else { continue };
            let max = subject.max_value();
            let checked = u32::try_from(value)
                .ok()
                .filter(|v| *v <= max)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "{} must be between 0 and {max}, got {value}",
                        subject.key()
                    ))
                })?;
            scores = scores.with(subject, checked);
        }
        Ok(scores)
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub submission_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_group: Option<String>,
    pub match_count: usize,
    pub message: String,
    pub careers: Vec<QualifiedCareer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_heading: Option<String>,
    pub improvement_areas: Vec<ImprovementArea>,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerDefinition>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Scores the submission against every catalog career and returns up to five
/// qualifying careers plus improvement tips for weak inputs.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload?;
    let scores = request.to_scores()?;
    let submission_id = Uuid::new_v4();

    let recommendation = state.engine.recommend(&scores);
    info!(
        "Submission {submission_id}: {} careers matched",
        recommendation.match_count
    );

    let improvement_heading = (!recommendation.improvement_areas.is_empty())
        .then(|| IMPROVEMENT_HEADING.to_string());

    Ok(Json(RecommendationResponse {
        submission_id,
        name: request
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
        predicted_group: recommendation.predicted_group,
        match_count: recommendation.match_count,
        message: recommendation.message,
        careers: recommendation.careers,
        improvement_heading,
        improvement_areas: recommendation.improvement_areas,
    }))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CareerListResponse> {
    let careers = state.engine.catalog.careers().to_vec();
    Json(CareerListResponse {
        total: careers.len(),
        careers,
    })
}

/// GET /api/v1/careers/:name
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CareerDefinition>, AppError> {
    state
        .engine
        .catalog
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))
}
