use serde::{Deserialize, Serialize};

/// Number of inputs a submission carries, and the width of the model feature vector.
pub const FEATURE_COUNT: usize = 8;

/// One scored input of a submission.
///
/// Declaration order is the fixed feature order the classifier expects and the
/// iteration order used everywhere else (weak areas, weight sums).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "math_score")]
    Math,
    #[serde(rename = "physics_score")]
    Physics,
    #[serde(rename = "chemistry_score")]
    Chemistry,
    #[serde(rename = "biology_score")]
    Biology,
    #[serde(rename = "english_score")]
    English,
    #[serde(rename = "history_score")]
    History,
    #[serde(rename = "geography_score")]
    Geography,
    #[serde(rename = "weekly_self_study_hours")]
    StudyHours,
}

impl Subject {
    pub const ALL: [Subject; FEATURE_COUNT] = [
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::English,
        Subject::History,
        Subject::Geography,
        Subject::StudyHours,
    ];

    /// Canonical key, as used in catalog weights and tip tables.
    pub fn key(self) -> &'static str {
        match self {
            Subject::Math => "math_score",
            Subject::Physics => "physics_score",
            Subject::Chemistry => "chemistry_score",
            Subject::Biology => "biology_score",
            Subject::English => "english_score",
            Subject::History => "history_score",
            Subject::Geography => "geography_score",
            Subject::StudyHours => "weekly_self_study_hours",
        }
    }

    /// Resolves a canonical key or its short alias (`math`, `study_hours`, ...).
    pub fn from_key(key: &str) -> Option<Subject> {
        let subject = match key.trim().to_lowercase().as_str() {
            "math_score" | "math" => Subject::Math,
            "physics_score" | "physics" => Subject::Physics,
            "chemistry_score" | "chemistry" => Subject::Chemistry,
            "biology_score" | "biology" => Subject::Biology,
            "english_score" | "english" => Subject::English,
            "history_score" | "history" => Subject::History,
            "geography_score" | "geography" => Subject::Geography,
            "weekly_self_study_hours" | "study_hours" => Subject::StudyHours,
            _ => return None,
        };
        Some(subject)
    }

    /// Position of this subject in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inclusive upper bound of an accepted input value.
    pub fn max_value(self) -> u32 {
        match self {
            Subject::StudyHours => 50,
            _ => 100,
        }
    }

    /// Human label: `math_score` → `Math`, `weekly_self_study_hours` → `Weekly self study hours`.
    pub fn label(self) -> String {
        format_subject_label(self.key())
    }
}

/// Strips a `_score` suffix, turns separators into spaces, then capitalizes the first
/// letter and lowercases the rest.
pub fn format_subject_label(key: &str) -> String {
    let spaced = key.replace("_score", "").replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validated scores of one submission. A `None` slot is a value the student left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubjectScores {
    values: [Option<u32>; FEATURE_COUNT],
}

impl SubjectScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, subject: Subject, value: u32) -> Self {
        self.values[subject.index()] = Some(value);
        self
    }

    pub fn get(&self, subject: Subject) -> Option<u32> {
        self.values[subject.index()]
    }

    /// Value used by scoring and advice: missing reads as 0.
    pub fn value_or_zero(&self, subject: Subject) -> f64 {
        self.get(subject).map(f64::from).unwrap_or(0.0)
    }

    /// Iterates in fixed subject order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, Option<u32>)> + '_ {
        Subject::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

/// Fixed-order numeric vector handed to the imputer and classifier.
/// Missing inputs are carried as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_scores(scores: &SubjectScores) -> Self {
        let mut values = [f64::NAN; FEATURE_COUNT];
        for (subject, value) in scores.iter() {
            if let Some(v) = value {
                values[subject.index()] = f64::from(v);
            }
        }
        FeatureVector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_model_contract() {
        let keys: Vec<&str> = Subject::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                "math_score",
                "physics_score",
                "chemistry_score",
                "biology_score",
                "english_score",
                "history_score",
                "geography_score",
                "weekly_self_study_hours",
            ]
        );
        for (i, s) in Subject::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn test_from_key_accepts_aliases() {
        assert_eq!(Subject::from_key("math"), Some(Subject::Math));
        assert_eq!(Subject::from_key("Math_Score"), Some(Subject::Math));
        assert_eq!(Subject::from_key("study_hours"), Some(Subject::StudyHours));
        assert_eq!(Subject::from_key("art_score"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Subject::Math.label(), "Math");
        assert_eq!(Subject::Geography.label(), "Geography");
        assert_eq!(Subject::StudyHours.label(), "Weekly self study hours");
        assert_eq!(format_subject_label(""), "");
    }

    #[test]
    fn test_feature_vector_marks_missing_as_nan() {
        let scores = SubjectScores::new()
            .with(Subject::Math, 90)
            .with(Subject::StudyHours, 12);
        let fv = FeatureVector::from_scores(&scores);
        assert_eq!(fv.0[0], 90.0);
        assert_eq!(fv.0[7], 12.0);
        assert!(fv.0[1].is_nan());
        assert!(fv.0[2..7].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_missing_value_reads_as_zero() {
        let scores = SubjectScores::new().with(Subject::Physics, 40);
        assert_eq!(scores.value_or_zero(Subject::Physics), 40.0);
        assert_eq!(scores.value_or_zero(Subject::History), 0.0);
    }
}
