use std::cmp::Ordering;

use crate::models::career::QualifiedCareer;

/// Maximum number of careers returned to the student.
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const NO_MATCHES_MESSAGE: &str =
    "No careers matched your profile. Improve scores to unlock more.";

/// Sorts by reported score, highest first, and keeps the top `MAX_RECOMMENDATIONS`.
/// Equal scores keep catalog declaration order.
pub fn rank(qualified: &[QualifiedCareer]) -> Vec<QualifiedCareer> {
    let mut ranked = qualified.to_vec();
    ranked.sort_by(compare_for_ranking);
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

fn compare_for_ranking(a: &QualifiedCareer, b: &QualifiedCareer) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.catalog_index.cmp(&b.catalog_index))
}

/// Headline for a result list, driven by how many careers qualified in total.
pub fn recommendation_message(qualified_count: usize) -> String {
    match qualified_count {
        0 => NO_MATCHES_MESSAGE.to_string(),
        1 => "Here is your recommended career:".to_string(),
        n if n <= MAX_RECOMMENDATIONS => format!("Here are your top {n} recommended careers:"),
        _ => format!("Here are your top {MAX_RECOMMENDATIONS} recommended careers:"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified(name: &str, score: f64, catalog_index: usize) -> QualifiedCareer {
        QualifiedCareer {
            name: name.to_string(),
            group: "General".to_string(),
            score,
            threshold: 50.0,
            description: String::new(),
            catalog_index,
        }
    }

    fn names(list: &[QualifiedCareer]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let input = vec![
            qualified("Low", 61.0, 0),
            qualified("High", 92.5, 1),
            qualified("Mid", 77.25, 2),
        ];
        assert_eq!(names(&rank(&input)), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_scenario_d_seven_qualify_top_five_returned() {
        let input: Vec<QualifiedCareer> = [70.0, 95.0, 60.0, 88.0, 91.0, 65.0, 82.0]
            .iter()
            .enumerate()
            .map(|(i, s)| qualified(&format!("C{i}"), *s, i))
            .collect();
        let ranked = rank(&input);
        assert_eq!(ranked.len(), 5);
        assert_eq!(names(&ranked), vec!["C1", "C4", "C3", "C6", "C0"]);
        assert_eq!(
            recommendation_message(input.len()),
            "Here are your top 5 recommended careers:"
        );
    }

    #[test]
    fn test_fewer_than_five_returns_all() {
        let input = vec![qualified("A", 70.0, 0), qualified("B", 80.0, 1)];
        assert_eq!(rank(&input).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[]).is_empty());
        assert_eq!(recommendation_message(0), NO_MATCHES_MESSAGE);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Input order deliberately differs from catalog order.
        let input = vec![
            qualified("Third", 80.0, 7),
            qualified("First", 80.0, 2),
            qualified("Second", 80.0, 4),
        ];
        assert_eq!(names(&rank(&input)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let input = vec![qualified("A", 60.0, 0), qualified("B", 90.0, 1)];
        let before = input.clone();
        let _ = rank(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_messages_by_count() {
        assert_eq!(recommendation_message(1), "Here is your recommended career:");
        assert_eq!(
            recommendation_message(3),
            "Here are your top 3 recommended careers:"
        );
        assert_eq!(
            recommendation_message(5),
            "Here are your top 5 recommended careers:"
        );
        assert_eq!(
            recommendation_message(42),
            "Here are your top 5 recommended careers:"
        );
    }
}
