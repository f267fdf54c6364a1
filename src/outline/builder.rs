//! Outline assembly with a recovery boundary.

use std::panic::{self, AssertUnwindSafe};

use crate::model::{Branch, MindMap};

use super::related::find_related_points;
use super::sentence::split_sentences;
use super::topics::identify_topics;

/// Uppercase the first letter, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Assemble a mind map from raw text. May panic on unexpected faults;
/// [`build_mind_map`] is the recovery boundary around it.
fn assemble(text: &str) -> MindMap {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return MindMap::empty_notice();
    }

    let summary = identify_topics(&sentences);
    let mut map = MindMap::new(summary.main_topic);

    for subtopic in &summary.subtopics {
        let mut branch = Branch::new(capitalize(subtopic));
        for point in find_related_points(&sentences, subtopic) {
            if point.trim().is_empty() {
                continue;
            }
            branch.points.push(capitalize(&point));
        }
        map.add_branch(branch);
    }

    map
}

/// Run `f`, converting any panic into the fixed failure map.
fn with_recovery(f: impl FnOnce() -> MindMap) -> MindMap {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(map) => map,
        Err(fault) => {
            let detail = fault
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| fault.downcast_ref::<&str>().copied())
                .unwrap_or("unknown fault");
            log::error!("Error in mind map generation: {}", detail);
            MindMap::failure_notice()
        }
    }
}

/// Build a mind map from raw recognized text.
///
/// This never fails: empty or unreadable input yields the fixed
/// empty-input map, and any unexpected fault during assembly is caught
/// here and converted to the fixed failure map. Callers can only tell the
/// two apart by content, which matches the reference behavior.
pub fn build_mind_map(text: &str) -> MindMap {
    with_recovery(|| assemble(text))
}

/// Build a mind map and render it as an indented outline string.
///
/// The externally visible entry point of the text-structuring core.
pub fn build_outline(text: &str) -> String {
    build_mind_map(text).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("water"), "Water");
        assert_eq!(capitalize("Water bowls"), "Water bowls");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_outline_starts_with_first_sentence() {
        let outline = build_outline("Dogs are loyal. Dogs love walks. Walks keep dogs healthy.");
        assert!(outline.starts_with("- Dogs are loyal\n"));
    }

    #[test]
    fn test_empty_input_fixed_outline() {
        assert_eq!(build_outline(""), "- No readable text found in image");
    }

    #[test]
    fn test_punctuation_only_fixed_outline() {
        assert_eq!(
            build_outline("!!! ??? ..."),
            "- No readable text found in image"
        );
    }

    #[test]
    fn test_subtopic_lines_are_capitalized() {
        let map = build_mind_map(
            "Cats are great pets. Cats need food and water. \
             Cats love playing with toys. Water bowls should be cleaned daily.",
        );
        assert_eq!(map.root, "Cats are great pets");
        assert_eq!(map.branches.first().map(|b| b.label.as_str()), Some("Water"));

        let outline = map.render();
        assert!(outline.contains("\n  - Water\n"));
        // Related points come from sentences containing "water".
        assert!(outline.contains("    - Cats need food and water"));
        assert!(outline.contains("    - Water bowls should be cleaned daily"));
    }

    #[test]
    fn test_idempotent() {
        let text = "Planets orbit the sun. Planets vary in size. Size matters for gravity.";
        assert_eq!(build_outline(text), build_outline(text));
    }

    #[test]
    fn test_single_sentence_has_no_branches() {
        let map = build_mind_map("Just one lonely sentence here.");
        assert_eq!(map.root, "Just one lonely sentence here");
        assert!(map.branches.is_empty());
    }

    #[test]
    fn test_recovery_boundary_absorbs_panics() {
        let map = with_recovery(|| panic!("boom"));
        assert_eq!(
            map.render(),
            "- Error creating mind map\n  - Please try again with clearer text"
        );
    }
}
