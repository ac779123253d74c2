//! Weighted match scoring.
//!
//! score = Σ(value[k] × weight[k]) / Σ(weight[k])
//!
//! Weights are relative importance, so their unit does not matter. A career whose
//! weights sum to zero scores 0. A missing subject value counts as 0.

use crate::models::career::{CareerDefinition, QualifiedCareer};
use crate::models::subject::SubjectScores;
use crate::recommendation::catalog::CareerCatalog;

/// Weighted average of the submission's values over the career's weighted subjects.
pub fn score(scores: &SubjectScores, career: &CareerDefinition) -> f64 {
    let weight_sum = career.weight_sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    let total: f64 = career
        .weights
        .iter()
        .map(|(subject, weight)| scores.value_or_zero(*subject) * weight)
        .sum();

    total / weight_sum
}

pub fn qualifies(score: f64, career: &CareerDefinition) -> bool {
    score >= career.threshold
}

/// Scores every catalog entry and keeps those at or above their threshold, in
/// catalog order. The threshold check uses the unrounded score.
pub fn qualifying_careers(scores: &SubjectScores, catalog: &CareerCatalog) -> Vec<QualifiedCareer> {
    catalog
        .careers()
        .iter()
        .enumerate()
        .filter_map(|(catalog_index, career)| {
            let s = score(scores, career);
            qualifies(s, career).then(|| QualifiedCareer {
                name: career.name.clone(),
                group: career.group.clone(),
                score: round2(s),
                threshold: career.threshold,
                description: career.description.clone(),
                catalog_index,
            })
        })
        .collect()
}

/// Two-decimal rounding with exact halves going to the even digit (72.125 → 72.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
