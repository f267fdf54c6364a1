//! Topic identification via word-frequency ranking.

/// Placeholder main topic when no sentences are available.
pub(crate) const NO_TEXT_TOPIC: &str = "No text found";

/// Maximum number of subtopics to select.
pub const MAX_SUBTOPICS: usize = 5;

/// Tokens must be longer than this many characters to qualify.
const MIN_TOKEN_CHARS: usize = 3;

/// Function words excluded from frequency counting.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "shall", "should", "may", "might", "must", "can", "could",
];

/// A main topic with its ranked subtopics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    /// First sentence, verbatim
    pub main_topic: String,

    /// Up to [`MAX_SUBTOPICS`] lowercase word tokens, by descending frequency
    pub subtopics: Vec<String>,
}

/// Whether a lowercase token enters the frequency table.
fn qualifies(word: &str) -> bool {
    word.chars().count() > MIN_TOKEN_CHARS
        && !STOP_WORDS.contains(&word)
        && !word.chars().all(|c| c.is_ascii_digit())
}

/// Identify the main topic and ranked subtopics from a sentence list.
///
/// The first sentence is taken as the main topic. The remaining sentences
/// are lowercased and whitespace-split; qualifying tokens (more than three
/// characters, not a stop word, not purely numeric) are tallied and ranked
/// by descending count. The tally keeps first-seen order and the sort is
/// stable, so equal-frequency ties resolve to first-seen order
/// deterministically. Tokens that appear as a case-insensitive substring of
/// the main topic are skipped.
pub fn identify_topics(sentences: &[String]) -> TopicSummary {
    let Some(main_topic) = sentences.first() else {
        return TopicSummary {
            main_topic: NO_TEXT_TOPIC.to_string(),
            subtopics: Vec::new(),
        };
    };

    // Tally in first-seen order so tie-breaking stays deterministic.
    let mut frequencies: Vec<(String, u32)> = Vec::new();
    for sentence in &sentences[1..] {
        for word in sentence.to_lowercase().split_whitespace() {
            if !qualifies(word) {
                continue;
            }
            match frequencies.iter_mut().find(|(w, _)| w.as_str() == word) {
                Some((_, count)) => *count += 1,
                None => frequencies.push((word.to_string(), 1)),
            }
        }
    }

    // Stable sort: ties keep first-seen order.
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));

    let main_lower = main_topic.to_lowercase();
    let subtopics = frequencies
        .into_iter()
        .map(|(word, _)| word)
        .filter(|word| !main_lower.contains(word.as_str()))
        .take(MAX_SUBTOPICS)
        .collect();

    TopicSummary {
        main_topic: main_topic.clone(),
        subtopics,
    }
}
