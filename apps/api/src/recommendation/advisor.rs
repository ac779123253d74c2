//! Improvement advice — flags weak inputs and pairs them with a study tip.
//!
//! Cutoffs are fixed domain constants, independent of any career threshold:
//! a subject is weak below 60, weekly self-study hours are weak below 25.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::subject::{Subject, SubjectScores};

pub const SUBJECT_WEAK_BELOW: u32 = 60;
pub const STUDY_HOURS_WEAK_BELOW: u32 = 25;

pub const IMPROVEMENT_HEADING: &str = "Suggested Improvement Areas";

const DEFAULT_TIPS: &[(Subject, &str)] = &[
    (
        Subject::Math,
        "Practice algebra, geometry, and calculus regularly. Use apps like Khan Academy or Cuemath.",
    ),
    (
        Subject::Physics,
        "Focus on problem-solving and understanding core concepts. Use visual simulations.",
    ),
    (
        Subject::Chemistry,
        "Revise reaction mechanisms and periodic table trends. Practice with previous year questions.",
    ),
    (
        Subject::Biology,
        "Review diagrams and processes. Focus on NCERT and concept-based questions.",
    ),
    (
        Subject::English,
        "Improve vocabulary, reading comprehension, and writing. Read editorials and practice grammar.",
    ),
    (
        Subject::History,
        "Create timelines and understand cause-effect of events. Use flashcards for dates.",
    ),
    (
        Subject::Geography,
        "Study maps, physical processes, and current affairs. Practice with past questions.",
    ),
    (
        Subject::StudyHours,
        "Try to increase dedicated study hours gradually by creating a daily routine.",
    ),
];

/// One weak input with its advice, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImprovementArea {
    pub subject: String,
    pub tip: String,
}

/// Read-only subject → tip table.
#[derive(Debug, Clone)]
pub struct ImprovementTips {
    tips: BTreeMap<Subject, String>,
}

impl Default for ImprovementTips {
    fn default() -> Self {
        Self::new(DEFAULT_TIPS.iter().map(|(s, t)| (*s, t.to_string())))
    }
}

impl ImprovementTips {
    pub fn new(tips: impl IntoIterator<Item = (Subject, String)>) -> Self {
        Self {
            tips: tips.into_iter().collect(),
        }
    }

    pub fn get(&self, subject: Subject) -> Option<&str> {
        self.tips.get(&subject).map(String::as_str)
    }

    /// Subjects that have no tip. Non-empty means the table is inconsistent.
    pub fn missing_subjects(&self) -> Vec<Subject> {
        Subject::ALL
            .iter()
            .copied()
            .filter(|s| !self.tips.contains_key(s))
            .collect()
    }
}

pub fn is_weak(subject: Subject, value: u32) -> bool {
    match subject {
        Subject::StudyHours => value < STUDY_HOURS_WEAK_BELOW,
        _ => value < SUBJECT_WEAK_BELOW,
    }
}

/// Weak inputs in fixed subject order. A missing value reads as 0.
pub fn weak_areas(scores: &SubjectScores) -> Vec<Subject> {
    scores
        .iter()
        .filter(|(subject, value)| is_weak(*subject, value.unwrap_or(0)))
        .map(|(subject, _)| subject)
        .collect()
}

/// Weak areas paired with their tips. A weak subject without a tip is logged and skipped.
pub fn improvement_areas(scores: &SubjectScores, tips: &ImprovementTips) -> Vec<ImprovementArea> {
    weak_areas(scores)
        .into_iter()
        .filter_map(|subject| match tips.get(subject) {
            Some(tip) => Some(ImprovementArea {
                subject: subject.label(),
                tip: tip.to_string(),
            }),
            None => {
                error!("No improvement tip configured for '{}'", subject.key());
                None
            }
        })
        .collect()
}
