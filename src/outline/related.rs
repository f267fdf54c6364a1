//! Supporting-sentence lookup for a subtopic.

/// Maximum number of related points per subtopic.
pub const MAX_RELATED_POINTS: usize = 2;

/// Related points are truncated to this many words.
pub const TRUNCATE_WORDS: usize = 10;

/// Find up to [`MAX_RELATED_POINTS`] sentences mentioning `topic`.
///
/// Sentences are scanned in order; a sentence matches when the lowercased
/// topic occurs as a substring of the lowercased sentence. Matches are
/// truncated to their first [`TRUNCATE_WORDS`] whitespace-delimited words,
/// and truncated strings already collected are skipped.
pub fn find_related_points(sentences: &[String], topic: &str) -> Vec<String> {
    let topic = topic.to_lowercase();
    let mut related: Vec<String> = Vec::new();

    for sentence in sentences {
        if !sentence.to_lowercase().contains(&topic) {
            continue;
        }

        let truncated = sentence
            .split_whitespace()
            .take(TRUNCATE_WORDS)
            .collect::<Vec<_>>()
            .join(" ");

        if related.contains(&truncated) {
            continue;
        }
        related.push(truncated);

        if related.len() >= MAX_RELATED_POINTS {
            break;
        }
    }

    related
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_matching_sentences_in_order() {
        let input = sentences(&[
            "Cats are great pets",
            "Cats need food and water",
            "Water bowls should be cleaned daily",
        ]);
        let points = find_related_points(&input, "water");
        assert_eq!(
            points,
            vec![
                "Cats need food and water",
                "Water bowls should be cleaned daily"
            ]
        );
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let input = sentences(&["WATERFALL hikes are fun"]);
        let points = find_related_points(&input, "water");
        assert_eq!(points, vec!["WATERFALL hikes are fun"]);
    }

    #[test]
    fn test_truncates_to_ten_words() {
        let long = "one two three four five six seven eight nine ten eleven twelve";
        let points = find_related_points(&sentences(&[long]), "seven");
        assert_eq!(points, vec!["one two three four five six seven eight nine ten"]);
    }

    #[test]
    fn test_caps_at_two_points() {
        let input = sentences(&["water a", "water b", "water c", "water d"]);
        let points = find_related_points(&input, "water");
        assert_eq!(points.len(), MAX_RELATED_POINTS);
        assert_eq!(points, vec!["water a", "water b"]);
    }

    #[test]
    fn test_skips_duplicate_truncations() {
        // Both sentences truncate to the same ten words.
        let a = "water one two three four five six seven eight nine END";
        let b = "water one two three four five six seven eight nine TAIL";
        let points = find_related_points(&sentences(&[a, b]), "water");
        assert_eq!(
            points,
            vec!["water one two three four five six seven eight nine"]
        );
    }

    #[test]
    fn test_no_matches() {
        let input = sentences(&["Nothing relevant here"]);
        assert!(find_related_points(&input, "water").is_empty());
    }
}
